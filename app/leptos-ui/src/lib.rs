use leptos::prelude::*;

pub mod api;
pub mod components;
pub mod files;
pub mod pages;
pub mod state;
pub mod types;

use wasm_bindgen::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    state::provide_app_state();

    let (current_tab, set_current_tab) = signal(0usize);

    view! {
        <components::nav_bar::NavBar current_tab=current_tab set_current_tab=set_current_tab />
        <main class="content">
            {move || match current_tab.get() {
                1 => view! { <pages::sell::SellPage /> }.into_any(),
                _ => view! { <pages::browse::BrowsePage /> }.into_any(),
            }}
        </main>
    }
}

#[wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
