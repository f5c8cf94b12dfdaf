#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::UserInfo;
    use crate::config::RuntimeConfig;
    use crate::state::auth::AuthState;
    use crate::state::config::ConfigState;
    use leptos::*;

    pub fn sample_user() -> UserInfo {
        UserInfo {
            id: "u-sample".into(),
            name: Some("Sample User".into()),
            email: Some("sample@example.com".into()),
            role: "user".into(),
        }
    }

    pub fn provide_auth(user: Option<UserInfo>) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let state = match user {
            Some(user) => AuthState::signed_in(user),
            None => AuthState::signed_out(),
        };
        let (auth, set_auth) = create_signal(state);
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn provide_config(oauth_portal_url: &str, app_id: &str) -> ConfigState {
        let state = ConfigState {
            runtime: RuntimeConfig {
                oauth_portal_url: Some(oauth_portal_url.into()),
                app_id: Some(app_id.into()),
                ..RuntimeConfig::default()
            },
            origin: None,
        };
        provide_context(create_signal(state.clone()));
        state
    }
}

/// Helpers for picking rendered markup apart in assertions.
#[cfg(test)]
pub mod html {
    fn attribute_values<'a>(html: &'a str, attr: &str) -> Vec<&'a str> {
        let needle = format!("{}=\"", attr);
        html.match_indices(&needle)
            .filter_map(|(at, _)| {
                let rest = &html[at + needle.len()..];
                rest.find('"').map(|end| &rest[..end])
            })
            .collect()
    }

    /// Splits markup into `(project id, markup up to the next card)` pairs.
    pub fn card_segments(html: &str) -> Vec<(String, String)> {
        let needle = "data-project=\"";
        let starts: Vec<usize> = html.match_indices(needle).map(|(at, _)| at).collect();
        starts
            .iter()
            .enumerate()
            .filter_map(|(i, &start)| {
                let end = starts.get(i + 1).copied().unwrap_or(html.len());
                let segment = &html[start..end];
                attribute_values(segment, "data-project")
                    .first()
                    .map(|id| (id.to_string(), segment.to_string()))
            })
            .collect()
    }

    pub fn tag_values(segment: &str) -> Vec<String> {
        attribute_values(segment, "data-tag")
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn escape_text(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    #[test]
    fn card_segments_split_on_project_marker() {
        let html = r#"<div data-project="a"><span data-tag="x"></span></div><div data-project="b"></div>"#;
        let cards = card_segments(html);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].0, "a");
        assert_eq!(tag_values(&cards[0].1), vec!["x"]);
        assert!(tag_values(&cards[1].1).is_empty());
    }
}
