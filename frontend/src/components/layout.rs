use crate::{
    components::common::{Button, ButtonSize, ButtonVariant, LinkButton},
    state::{auth::AuthState, auth::use_auth, config::use_config},
};
use leptos::*;

pub const SECTION_LINKS: &[(&str, &str)] = &[
    ("#projects", "Projects"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

/// The single auth-dependent control in the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderAction {
    Dashboard,
    SignIn { href: String },
}

impl HeaderAction {
    /// `loading` is deliberately ignored: while the session check runs the
    /// header shows the signed-out action.
    pub fn resolve(state: &AuthState, login_url: impl Into<String>) -> Self {
        if state.is_authenticated {
            HeaderAction::Dashboard
        } else {
            HeaderAction::SignIn {
                href: login_url.into(),
            }
        }
    }
}

#[component]
fn HeaderActionView(action: HeaderAction) -> impl IntoView {
    match action {
        HeaderAction::Dashboard => view! {
            <Button variant=ButtonVariant::Outline size=ButtonSize::Sm>"Dashboard"</Button>
        }
        .into_view(),
        HeaderAction::SignIn { href } => view! {
            <LinkButton href=href size=ButtonSize::Sm>"Sign In"</LinkButton>
        }
        .into_view(),
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (config, _set_config) = use_config();
    let action = move || {
        let login_url = config.with(|c| c.login_url());
        auth.with(|state| HeaderAction::resolve(state, login_url))
    };

    view! {
        <header class="sticky top-0 z-50 w-full border-b border-slate-200 dark:border-slate-800 bg-white/80 dark:bg-slate-950/80 backdrop-blur-sm">
            <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                <div class="flex items-center gap-2">
                    {move || {
                        config
                            .with(|c| c.runtime.app_logo.clone())
                            .map(|src| view! { <img src=src alt="" class="h-8 w-8 rounded"/> })
                    }}
                    <span class="text-2xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                        {move || config.with(|c| c.app_title())}
                    </span>
                </div>
                <nav class="hidden md:flex items-center gap-8">
                    {SECTION_LINKS
                        .iter()
                        .map(|(href, label)| view! {
                            <a href=*href class="text-sm font-medium text-slate-600 dark:text-slate-300 hover:text-slate-900 dark:hover:text-slate-100 transition-colors">
                                {*label}
                            </a>
                        })
                        .collect_view()}
                    {move || view! { <HeaderActionView action=action()/> }}
                </nav>
            </div>
        </header>
    }
}

struct FooterColumn {
    heading: &'static str,
    links: &'static [(&'static str, &'static str)],
}

const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Portfolio",
        links: &[("#projects", "Projects"), ("#about", "About"), ("#contact", "Contact")],
    },
    FooterColumn {
        heading: "Projects",
        links: &[("#", "Regression"), ("#", "Decision Trees"), ("#", "Random Forest")],
    },
    FooterColumn {
        heading: "Learning",
        links: &[("#", "Boosting"), ("#", "SVM"), ("#", "K-Means")],
    },
    FooterColumn {
        heading: "Connect",
        links: &[("#", "GitHub"), ("#", "LinkedIn"), ("#", "Twitter")],
    },
];

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-200 dark:border-slate-800 bg-slate-50 dark:bg-slate-950/50 py-12">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-8">
                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| view! {
                            <div>
                                <h3 class="font-semibold text-slate-900 dark:text-slate-50 mb-4">{column.heading}</h3>
                                <ul class="space-y-2 text-sm text-slate-600 dark:text-slate-400">
                                    {column
                                        .links
                                        .iter()
                                        .map(|(href, label)| view! {
                                            <li>
                                                <a href=*href class="hover:text-slate-900 dark:hover:text-slate-200 transition-colors">
                                                    {*label}
                                                </a>
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                </div>
                <div class="border-t border-slate-200 dark:border-slate-800 pt-8 flex flex-col md:flex-row justify-between items-center text-sm text-slate-600 dark:text-slate-400">
                    <p>"© 2025 AI Project Portfolio. All rights reserved."</p>
                    <div class="flex gap-6 mt-4 md:mt-0">
                        <a href="#" class="hover:text-slate-900 dark:hover:text-slate-200 transition-colors">"Privacy"</a>
                        <a href="#" class="hover:text-slate-900 dark:hover:text-slate-200 transition-colors">"Terms"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, provide_config, sample_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_shows_sign_in_link_when_signed_out() {
        let html = render_to_string(|| {
            provide_auth(None);
            provide_config("https://auth.example.com", "portfolio");
            view! { <SiteHeader/> }
        });
        assert!(html.contains("Sign In"));
        assert!(html.contains("href=\"https://auth.example.com/app-auth?appId=portfolio"));
        assert!(!html.contains("Dashboard"));
    }

    #[test]
    fn header_shows_dashboard_when_signed_in() {
        let html = render_to_string(|| {
            provide_auth(Some(sample_user()));
            view! { <SiteHeader/> }
        });
        assert!(html.contains("Dashboard"));
        assert!(!html.contains("Sign In"));
    }

    #[test]
    fn header_links_to_page_sections() {
        let html = render_to_string(|| view! { <SiteHeader/> });
        for (href, label) in SECTION_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", href)));
            assert!(html.contains(label));
        }
    }

    #[test]
    fn header_shows_configured_title_and_logo() {
        let html = render_to_string(|| {
            let (_, set_config) = crate::state::config::use_config();
            set_config.update(|c| {
                c.runtime.app_title = "ML Lab".into();
                c.runtime.app_logo = Some("/logo.svg".into());
            });
            view! { <SiteHeader/> }
        });
        assert!(html.contains("ML Lab"));
        assert!(html.contains("src=\"/logo.svg\""));
    }

    #[test]
    fn footer_renders_all_columns() {
        let html = render_to_string(|| view! { <SiteFooter/> });
        for column in FOOTER_COLUMNS {
            assert!(html.contains(column.heading));
        }
        assert!(html.contains("All rights reserved."));
        assert!(html.contains("Privacy"));
    }
}
