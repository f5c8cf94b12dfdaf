use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] action: Option<View>,
) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-slate-300 bg-slate-50 dark:border-slate-700 dark:bg-slate-900">
            <h3 class="mt-2 text-lg font-semibold text-slate-900 dark:text-slate-50">{title}</h3>
            {description.map(|desc| view! {
                <p class="mt-1 text-sm text-slate-600 dark:text-slate-400">{desc}</p>
            })}
            {action.map(|action| view! { <div class="mt-6">{action}</div> })}
        </div>
    }
}
