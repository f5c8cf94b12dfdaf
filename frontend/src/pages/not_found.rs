use crate::components::{
    common::{ButtonSize, LinkButton},
    empty_state::EmptyState,
};
use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let back_home = view! { <LinkButton href="/" size=ButtonSize::Sm>"Back to home"</LinkButton> }.into_view();

    view! {
        <div class="min-h-screen flex items-center justify-center bg-slate-50 dark:bg-slate-950 px-4">
            <div class="max-w-md w-full">
                <EmptyState
                    title="Page not found"
                    description="The page you are looking for does not exist."
                    action=back_home
                />
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn not_found_links_home() {
        let html = render_to_string(|| view! { <NotFoundPage/> });
        assert!(html.contains("Page not found"));
        assert!(html.contains("href=\"/\""));
    }
}
