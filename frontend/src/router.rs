use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{home::HomePage, not_found::NotFoundPage},
    state::{auth::AuthProvider, config::use_config},
};

pub const ROUTE_PATHS: &[&str] = &["/"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/"];

/// Loads the runtime config first so the header and the session check both
/// start from it, then mounts.
#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    spawn_local(async {
        crate::config::init().await;
        mount_to_body(app_root);
    });
}

/// App shell. Expects the runtime config to be loaded already; an
/// `ApiClient` already in context takes precedence over the configured one.
pub fn app_root() -> impl IntoView {
    provide_meta_context();
    let (config_state, _) = use_config();
    if use_context::<ApiClient>().is_none() {
        let snapshot = config_state.get_untracked();
        provide_context(ApiClient::from_config(
            &snapshot.runtime,
            snapshot.origin.as_deref(),
        ));
    }
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn home_route_is_public() {
        assert!(ROUTE_PATHS.contains(&"/"));
        assert!(PUBLIC_ROUTE_PATHS.contains(&"/"));
    }

    #[test]
    fn public_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PUBLIC_ROUTE_PATHS {
            assert!(all.contains(path), "public path missing from ROUTE_PATHS: {}", path);
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
