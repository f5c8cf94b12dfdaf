use crate::api::{ApiClient, ApiError, UserInfo};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Snapshot of the session as seen by the page. `loading` is true only while
/// the startup session check is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    fn apply_session_result(&mut self, result: Result<UserInfo, ApiError>) {
        match result {
            Ok(user) => *self = Self::signed_in(user),
            Err(err) => {
                if !err.is_unauthorized() {
                    log::warn!("session check failed: {} ({})", err, err.code);
                }
                *self = Self::signed_out();
            }
        }
    }
}

pub(crate) fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    set_auth_state.update(|state| state.loading = true);

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    spawn_local(async move {
        resolve_session(&api_client, set_auth_state).await;
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn resolve_session(api_client: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    let result = api_client.get_me().await;
    if let Ok(user) = &result {
        log::info!("signed in as {}", user.display_name());
    }
    set_auth_state.update(|state| state.apply_session_result(result));
}
