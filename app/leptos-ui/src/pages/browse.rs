use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::item_card::ItemCard;
use crate::components::skeleton::ItemGridSkeleton;
use crate::state::use_app_state;
use crate::types::demo_items;

#[component]
pub fn BrowsePage() -> impl IntoView {
    let state = use_app_state();
    let (items, set_items) = (state.items, state.set_items);
    let (loading, set_loading) = (state.loading, state.set_loading);
    let display = state.config.with_value(|c| c.display.clone());

    if loading.get_untracked() {
        spawn_local(async move {
            match api::fetch_items().await {
                Ok(data) => set_items.set(data),
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("[browse] failed to load listings, showing demo data: {e}").into(),
                    );
                    set_items.set(demo_items());
                }
            }
            set_loading.set(false);
        });
    }

    view! {
        <section class="page browse-page">
            <h2 class="page-title">"Latest listings"</h2>
            {move || {
                if loading.get() {
                    return view! { <ItemGridSkeleton count=8 /> }.into_any();
                }
                let list = items.get();
                if list.is_empty() {
                    return view! { <p class="empty-state">"No listings yet."</p> }.into_any();
                }
                let display = display.clone();
                view! {
                    <div class="item-grid">
                        {list.into_iter().map(|item| {
                            let display = display.clone();
                            view! { <ItemCard item=item display=display /> }
                        }).collect::<Vec<_>>()}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}
