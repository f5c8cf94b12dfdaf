use leptos::*;

struct SkillGroup {
    heading: &'static str,
    items: &'static [&'static str],
}

const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        heading: "Languages & Libraries",
        items: &[
            "Python (NumPy, Pandas, Scikit-learn)",
            "Advanced ML Libraries (XGBoost, LightGBM)",
            "Data Visualization (Matplotlib, Seaborn)",
        ],
    },
    SkillGroup {
        heading: "ML Concepts",
        items: &[
            "Supervised & Unsupervised Learning",
            "Ensemble Methods & Boosting",
            "Feature Engineering & Selection",
        ],
    },
    SkillGroup {
        heading: "Tools & Practices",
        items: &[
            "Jupyter Notebooks & Analysis",
            "Git & Version Control",
            "Model Evaluation & Metrics",
        ],
    },
];

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section class="container mx-auto px-4 py-20">
            <h2 class="text-3xl md:text-4xl font-bold text-slate-900 dark:text-slate-50 mb-12">
                "Technical Skills"
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                {SKILL_GROUPS
                    .iter()
                    .map(|group| view! {
                        <div class="space-y-4">
                            <h3 class="text-xl font-semibold text-slate-900 dark:text-slate-50">{group.heading}</h3>
                            <div class="space-y-2 text-slate-600 dark:text-slate-300">
                                {group.items.iter().map(|item| view! { <p>{format!("• {}", item)}</p> }).collect_view()}
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
