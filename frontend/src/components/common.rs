use leptos::*;

const BASE_CLASSES: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md font-medium transition-colors duration-200 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 focus-visible:ring-blue-500 disabled:pointer-events-none disabled:opacity-50";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-slate-900 text-slate-50 shadow-sm hover:bg-slate-800 dark:bg-slate-50 dark:text-slate-900 dark:hover:bg-slate-200",
            ButtonVariant::Outline => "border border-slate-300 bg-transparent text-slate-900 shadow-sm hover:bg-slate-100 dark:border-slate-700 dark:text-slate-100 dark:hover:bg-slate-800",
            ButtonVariant::Ghost => "bg-transparent text-slate-700 hover:bg-slate-100 dark:text-slate-300 dark:hover:bg-slate-800",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Default,
    Lg,
}

impl ButtonSize {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "h-8 px-3 text-xs",
            ButtonSize::Default => "h-9 px-4 py-2 text-sm",
            ButtonSize::Lg => "h-11 px-8 text-base",
        }
    }
}

pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let mut classes = format!("{} {} {}", BASE_CLASSES, variant.classes(), size.classes());
    if !extra.trim().is_empty() {
        classes.push(' ');
        classes.push_str(extra.trim());
    }
    classes
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <button type="button" class=button_classes(variant, size, &class)>
            {children()}
        </button>
    }
}

/// An anchor styled as a button, for actions that navigate.
#[component]
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=button_classes(variant, size, &class)>
            {children()}
        </a>
    }
}
