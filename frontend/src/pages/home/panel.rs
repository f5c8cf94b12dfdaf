use crate::catalog::PROJECTS;
use crate::components::layout::{SiteFooter, SiteHeader};
use crate::pages::home::components::{
    AboutSection, ContactSection, HeroSection, ProjectsSection, SkillsSection,
};
use crate::state::config::use_config;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn HomePage() -> impl IntoView {
    let (config, _) = use_config();

    view! {
        <Title text=move || config.with(|c| c.app_title())/>
        <div class="min-h-screen bg-gradient-to-b from-slate-50 to-slate-100 dark:from-slate-950 dark:to-slate-900">
            <SiteHeader/>
            <HeroSection/>
            <ProjectsSection projects=PROJECTS/>
            <AboutSection/>
            <SkillsSection/>
            <ContactSection/>
            <SiteFooter/>
        </div>
    }
}
