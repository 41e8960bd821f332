use leptos::prelude::*;

const NAV_LABELS: &[&str] = &["Browse", "Sell"];

pub const TAB_COUNT: usize = NAV_LABELS.len();

/// Human-readable label for a tab index.
pub fn tab_label(idx: usize) -> &'static str {
    NAV_LABELS.get(idx).copied().unwrap_or("Browse")
}

#[component]
pub fn NavBar(
    current_tab: ReadSignal<usize>,
    set_current_tab: WriteSignal<usize>,
) -> impl IntoView {
    view! {
        <nav class="nav-bar" aria-label="Main">
            <span class="nav-brand">"bazaar"</span>
            {(0..TAB_COUNT).map(|idx| {
                let is_active = move || current_tab.get() == idx;
                view! {
                    <button
                        class=move || if is_active() { "nav-tab active" } else { "nav-tab" }
                        aria-current=move || is_active().then_some("page")
                        on:click=move |_| set_current_tab.set(idx)
                    >
                        {tab_label(idx)}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </nav>
    }
}
