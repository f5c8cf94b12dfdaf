pub const DARK_CLASS: &str = "dark";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::{ColorScheme, DARK_CLASS, DARK_SCHEME_QUERY};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    fn apply(html: &web_sys::Element, scheme: ColorScheme) {
        let list = html.class_list();
        let result = if scheme.is_dark() {
            list.add_1(DARK_CLASS)
        } else {
            list.remove_1(DARK_CLASS)
        };
        if result.is_err() {
            log::warn!("could not update color scheme class");
        }
    }

    pub fn init() {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(html) = window.document().and_then(|doc| doc.document_element()) else {
            return;
        };

        let Some(media_query) = window.match_media(DARK_SCHEME_QUERY).ok().flatten() else {
            apply(&html, ColorScheme::Light);
            return;
        };

        let scheme = ColorScheme::from_prefers_dark(media_query.matches());
        log::debug!("initial color scheme: {:?}", scheme);
        apply(&html, scheme);

        let html_clone = html.clone();
        let closure = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
            apply(&html_clone, ColorScheme::from_prefers_dark(event.matches()));
        }) as Box<dyn FnMut(_)>);
        if media_query
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("could not watch color scheme changes");
        }
        closure.forget();
    }
}

/// Keeps the `dark` class on `<html>` in step with the system preference.
#[cfg(target_arch = "wasm32")]
pub use wasm::init as init_system_theme;

#[cfg(not(target_arch = "wasm32"))]
pub fn init_system_theme() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_follows_preference() {
        assert_eq!(ColorScheme::from_prefers_dark(true), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_prefers_dark(false), ColorScheme::Light);
        assert!(ColorScheme::Dark.is_dark());
        assert!(!ColorScheme::default().is_dark());
    }
}
