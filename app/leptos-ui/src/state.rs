use bz_api_types::ApiItem;
use bz_core::config::Config;
use leptos::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub items: ReadSignal<Vec<ApiItem>>,
    pub set_items: WriteSignal<Vec<ApiItem>>,
    /// True until the first listings fetch settles.
    pub loading: ReadSignal<bool>,
    pub set_loading: WriteSignal<bool>,
    /// Browser builds have no config file, so this is always the defaults.
    pub config: StoredValue<Config>,
}

pub fn provide_app_state() {
    let (items, set_items) = signal(Vec::<ApiItem>::new());
    let (loading, set_loading) = signal(true);

    provide_context(AppState {
        items,
        set_items,
        loading,
        set_loading,
        config: StoredValue::new(Config::default()),
    });
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
