use crate::config::{self, RuntimeConfig};
use leptos::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigState {
    pub runtime: RuntimeConfig,
    pub origin: Option<String>,
}

impl ConfigState {
    pub fn snapshot() -> Self {
        Self {
            runtime: config::current(),
            origin: config::page_origin(),
        }
    }

    pub fn login_url(&self) -> String {
        config::login_url_for(&self.runtime, self.origin.as_deref())
    }

    pub fn app_title(&self) -> String {
        self.runtime.app_title.clone()
    }
}

pub fn use_config() -> (ReadSignal<ConfigState>, WriteSignal<ConfigState>) {
    match use_context::<(ReadSignal<ConfigState>, WriteSignal<ConfigState>)>() {
        Some(ctx) => ctx,
        None => {
            let (read, write) = create_signal(ConfigState::snapshot());
            provide_context((read, write));
            (read, write)
        }
    }
}
