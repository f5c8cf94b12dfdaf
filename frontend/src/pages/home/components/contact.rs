use crate::components::{
    common::{Button, ButtonSize, ButtonVariant},
    icons::{Icon, IconGlyph},
};
use leptos::*;

const CHANNELS: &[(Icon, &str)] = &[
    (Icon::Mail, "Email"),
    (Icon::Github, "GitHub"),
    (Icon::Linkedin, "LinkedIn"),
];

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="container mx-auto px-4 py-20">
            <div class="max-w-2xl mx-auto text-center">
                <h2 class="text-3xl md:text-4xl font-bold text-slate-900 dark:text-slate-50 mb-6">
                    "Get In Touch"
                </h2>
                <p class="text-lg text-slate-600 dark:text-slate-300 mb-12">
                    "Interested in discussing machine learning, data science, or collaboration opportunities? Feel free to reach out."
                </p>
                <div class="flex justify-center gap-4">
                    {CHANNELS
                        .iter()
                        .map(|(icon, label)| view! {
                            <Button size=ButtonSize::Lg variant=ButtonVariant::Outline class="gap-2">
                                <IconGlyph icon=*icon class="h-5 w-5"/>
                                {*label}
                            </Button>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
