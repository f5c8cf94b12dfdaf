use base64::{engine::general_purpose::STANDARD, Engine as _};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

pub const DEFAULT_APP_TITLE: &str = "AI Portfolio";
pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const FALLBACK_LOGIN_PATH: &str = "/login";
pub const OAUTH_CALLBACK_PATH: &str = "/api/oauth/callback";

// Matches what URLSearchParams leaves untouched.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuntimeConfig {
    #[serde(alias = "APP_TITLE")]
    pub app_title: String,
    #[serde(alias = "APP_LOGO")]
    pub app_logo: Option<String>,
    #[serde(alias = "OAUTH_PORTAL_URL")]
    pub oauth_portal_url: Option<String>,
    #[serde(alias = "APP_ID")]
    pub app_id: Option<String>,
    #[serde(alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            app_title: DEFAULT_APP_TITLE.to_string(),
            app_logo: None,
            oauth_portal_url: None,
            app_id: None,
            api_base_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("oauth_portal_url is not configured")]
    MissingOAuthPortal,
    #[error("app_id is not configured")]
    MissingAppId,
    #[error("page origin `{0}` is not an http(s) origin")]
    InvalidOrigin(String),
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Builds the hosted sign-in URL. The OAuth callback lives under the page
/// origin and is echoed back base64-encoded in `state`.
pub fn build_login_url(cfg: &RuntimeConfig, origin: &str) -> Result<String, ConfigError> {
    let portal = non_blank(cfg.oauth_portal_url.as_deref())
        .ok_or(ConfigError::MissingOAuthPortal)?
        .trim_end_matches('/');
    let app_id = non_blank(cfg.app_id.as_deref()).ok_or(ConfigError::MissingAppId)?;

    let origin = origin.trim().trim_end_matches('/');
    if !(origin.starts_with("http://") || origin.starts_with("https://")) {
        return Err(ConfigError::InvalidOrigin(origin.to_string()));
    }

    let redirect_uri = format!("{}{}", origin, OAUTH_CALLBACK_PATH);
    let state = STANDARD.encode(redirect_uri.as_bytes());

    let query = [
        ("appId", app_id),
        ("redirectUri", redirect_uri.as_str()),
        ("state", state.as_str()),
        ("type", "signIn"),
    ]
    .iter()
    .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
    .collect::<Vec<_>>()
    .join("&");

    Ok(format!("{}/app-auth?{}", portal, query))
}

/// Resolves an API base against the page origin when it is relative.
pub fn resolve_api_base_url(cfg: &RuntimeConfig, origin: Option<&str>) -> String {
    let base = non_blank(cfg.api_base_url.as_deref())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/');
    match origin {
        Some(origin) if base.starts_with('/') => {
            format!("{}{}", origin.trim_end_matches('/'), base)
        }
        _ => base.to_string(),
    }
}

pub fn current() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    snapshot_from_globals().unwrap_or_default()
}

/// Waits for the runtime config before answering, so callers never see the
/// default base while `config.json` is still in flight.
pub async fn await_api_base_url() -> String {
    resolve_api_base_url(&load().await, page_origin().as_deref())
}

/// Login URL for the "Sign In" link; falls back to the local login path
/// when the OAuth portal is not configured.
pub fn login_url_for(cfg: &RuntimeConfig, origin: Option<&str>) -> String {
    let origin = origin.unwrap_or("http://localhost");
    match build_login_url(cfg, origin) {
        Ok(url) => url,
        Err(err) => {
            log::warn!("falling back to {}: {}", FALLBACK_LOGIN_PATH, err);
            FALLBACK_LOGIN_PATH.to_string()
        }
    }
}

fn cache(cfg: RuntimeConfig) -> RuntimeConfig {
    let _ = RUNTIME_CONFIG.set(cfg);
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    // Optional global set by env.js: window.__PORTFOLIO_ENV = { OAUTH_PORTAL_URL: "...", ... }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &"__PORTFOLIO_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let json: String = js_sys::JSON::stringify(&any).ok()?.into();
    match serde_json::from_str(&json) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("ignoring malformed __PORTFOLIO_ENV: {}", err);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    None
}

/// `config.json` sits next to the page, so a site served under a subpath
/// reads its own copy rather than the one at the domain root.
pub fn config_json_url(page_href: &str) -> String {
    let without_fragment = page_href.split('#').next().unwrap_or(page_href);
    let without_query = without_fragment
        .split('?')
        .next()
        .unwrap_or(without_fragment);
    match without_query.rfind('/') {
        Some(idx) => format!("{}config.json", &without_query[..=idx]),
        None => format!("{}/config.json", without_query),
    }
}

#[cfg(target_arch = "wasm32")]
fn page_href() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_href() -> Option<String> {
    None
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let href = page_href()?;
    let resp = reqwest::get(config_json_url(&href)).await.ok()?;
    if !resp.status().is_success() {
        log::debug!("config.json unavailable (status {})", resp.status());
        return None;
    }
    match resp.json::<RuntimeConfig>().await {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("ignoring malformed config.json: {}", err);
            None
        }
    }
}

/// Resolves the runtime config once: cached value, then the env.js global,
/// then `./config.json`, then built-in defaults.
pub async fn load() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache(existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        return cache(cfg);
    }
    cache(RuntimeConfig::default())
}

pub async fn init() -> RuntimeConfig {
    let cfg = load().await;
    log::info!(
        "runtime config ready (title: {}, oauth portal configured: {})",
        cfg.app_title,
        cfg.oauth_portal_url.is_some()
    );
    cfg
}
