use leptos::*;

/// Decorative glyphs used on the home page, drawn as inline SVG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Github,
    Linkedin,
    Mail,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::ArrowRight => "arrow-right",
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
            Icon::Mail => "mail",
        }
    }

    fn paths(&self) -> &'static [&'static str] {
        match self {
            Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Icon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Icon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z",
            ],
            Icon::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 6-10 7L2 6",
            ],
        }
    }
}

#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            data-icon=icon.name()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
