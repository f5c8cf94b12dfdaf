use crate::catalog::ProjectEntry;
use crate::components::{
    cards::{Card, CardContent, CardDescription, CardHeader, CardTitle},
    common::{Button, ButtonSize, ButtonVariant},
    icons::{Icon, IconGlyph},
};
use leptos::*;

#[component]
pub fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    view! {
        <Card class="group hover:shadow-lg transition-all duration-300 hover:-translate-y-1 border-slate-200 dark:border-slate-800">
            <CardHeader>
                <div class="text-4xl mb-3" data-project=project.id>{project.icon}</div>
                <CardTitle class="text-lg">{project.title}</CardTitle>
            </CardHeader>
            <CardContent class="space-y-4">
                <CardDescription class="text-sm leading-relaxed">{project.description}</CardDescription>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! {
                            <span
                                class="inline-block px-3 py-1 text-xs font-medium bg-blue-100 dark:bg-blue-900/30 text-blue-700 dark:text-blue-300 rounded-full"
                                data-tag=*tech
                            >
                                {*tech}
                            </span>
                        })
                        .collect_view()}
                </div>
                <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm class="w-full mt-2 group/btn">
                    "Learn More"
                    <IconGlyph icon=Icon::ArrowRight class="ml-2 h-4 w-4 group-hover/btn:translate-x-1 transition-transform"/>
                </Button>
            </CardContent>
        </Card>
    }
}

/// One card per entry, keyed by project id, in list order.
#[component]
pub fn ProjectGrid(projects: &'static [ProjectEntry]) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
            <For
                each=move || projects.to_vec()
                key=|project| project.id
                children=|project| view! { <ProjectCard project=project/> }
            />
        </div>
    }
}

#[component]
pub fn ProjectsSection(projects: &'static [ProjectEntry]) -> impl IntoView {
    view! {
        <section id="projects" class="container mx-auto px-4 py-20">
            <div class="mb-12">
                <h2 class="text-3xl md:text-4xl font-bold text-slate-900 dark:text-slate-50 mb-4">
                    "Featured Projects"
                </h2>
                <p class="text-lg text-slate-600 dark:text-slate-300">
                    "A collection of machine learning algorithms and techniques implemented as part of my learning journey."
                </p>
            </div>
            <ProjectGrid projects=projects/>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::catalog::PROJECTS;
    use crate::test_support::html::{card_segments, escape_text, tag_values};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn grid_renders_one_card_per_project_in_order() {
        let html = render_to_string(|| view! { <ProjectGrid projects=PROJECTS/> });
        let cards = card_segments(&html);
        assert_eq!(cards.len(), PROJECTS.len());
        for ((id, segment), project) in cards.iter().zip(PROJECTS) {
            assert_eq!(id, project.id);
            assert!(segment.contains(&escape_text(project.title)));
            assert_eq!(tag_values(segment), project.technologies);
        }
    }

    #[test]
    fn kmeans_card_shows_three_tags_in_order() {
        let html = render_to_string(|| view! { <ProjectGrid projects=PROJECTS/> });
        let cards = card_segments(&html);
        let (_, kmeans) = cards.iter().find(|(id, _)| id == "kmeans").unwrap();
        assert!(kmeans.contains("K-Means Clustering"));
        assert_eq!(tag_values(kmeans), vec!["Python", "Clustering", "Data Analysis"]);
    }

    #[test]
    fn empty_catalog_renders_empty_grid() {
        static EMPTY: &[ProjectEntry] = &[];
        let html = render_to_string(|| view! { <ProjectsSection projects=EMPTY/> });
        assert!(html.contains("Featured Projects"));
        assert!(card_segments(&html).is_empty());
    }

    #[test]
    fn project_without_technologies_renders_no_tags() {
        static UNTAGGED: &[ProjectEntry] = &[ProjectEntry {
            id: "untagged",
            title: "Untagged",
            description: "No labels yet.",
            technologies: &[],
            icon: "❔",
        }];
        let html = render_to_string(|| view! { <ProjectGrid projects=UNTAGGED/> });
        let cards = card_segments(&html);
        assert_eq!(cards.len(), 1);
        assert!(tag_values(&cards[0].1).is_empty());
        assert!(cards[0].1.contains("Learn More"));
    }
}
