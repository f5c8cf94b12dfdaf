use leptos::*;

fn join_classes(base: &str, extra: &str) -> String {
    if extra.trim().is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra.trim())
    }
}

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=join_classes(
            "rounded-xl border border-slate-200 bg-white text-slate-900 shadow-sm dark:border-slate-800 dark:bg-slate-950 dark:text-slate-50",
            &class,
        )>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=join_classes("flex flex-col space-y-1.5 p-6", &class)>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <h3 class=join_classes("font-semibold leading-none tracking-tight", &class)>{children()}</h3> }
}

#[component]
pub fn CardDescription(
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <p class=join_classes("text-sm text-slate-500 dark:text-slate-400", &class)>{children()}</p> }
}

#[component]
pub fn CardContent(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=join_classes("p-6 pt-0", &class)>{children()}</div> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn card_parts_render_in_order() {
        let html = render_to_string(|| {
            view! {
                <Card class="group">
                    <CardHeader>
                        <CardTitle>"Random Forest"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <CardDescription>"Many trees."</CardDescription>
                    </CardContent>
                </Card>
            }
        });
        let title = html.find("Random Forest").unwrap();
        let description = html.find("Many trees.").unwrap();
        assert!(title < description);
        assert!(html.contains("rounded-xl border"));
        assert!(html.contains(" group"));
        assert!(html.contains("<h3"));
    }

    #[test]
    fn join_classes_skips_blank_extra() {
        assert_eq!(join_classes("p-6", "  "), "p-6");
        assert_eq!(join_classes("p-6", "pt-0"), "p-6 pt-0");
    }
}
