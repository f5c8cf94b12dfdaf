use crate::components::{
    common::{Button, ButtonSize, ButtonVariant, LinkButton},
    icons::{Icon, IconGlyph},
};
use leptos::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="container mx-auto px-4 py-20 md:py-32">
            <div class="max-w-3xl">
                <h1 class="text-4xl md:text-6xl font-bold text-slate-900 dark:text-slate-50 mb-6 leading-tight">
                    "Machine Learning Projects"
                </h1>
                <p class="text-xl text-slate-600 dark:text-slate-300 mb-8 leading-relaxed">
                    "A comprehensive showcase of machine learning algorithms and techniques implemented from scratch. Explore my learning journey through practical implementations of fundamental and advanced ML concepts."
                </p>
                <div class="flex flex-col sm:flex-row gap-4">
                    <LinkButton href="#projects" size=ButtonSize::Lg>
                        "Explore Projects"
                        <IconGlyph icon=Icon::ArrowRight class="ml-2 h-5 w-5"/>
                    </LinkButton>
                    <Button size=ButtonSize::Lg variant=ButtonVariant::Outline>
                        "View on GitHub"
                    </Button>
                </div>
            </div>
        </section>
    }
}
