use leptos::prelude::*;

/// Pulse placeholder with the same layout as an item card.
#[component]
pub fn ItemCardSkeleton() -> impl IntoView {
    view! {
        <div class="card item-card skeleton-card" aria-hidden="true">
            <div class="skeleton skeleton-media"></div>
            <div class="card-header item-card-header">
                <div class="skeleton skeleton-title"></div>
                <div class="skeleton skeleton-price"></div>
            </div>
            <div class="card-content">
                <div class="item-card-tags">
                    <div class="skeleton skeleton-badge"></div>
                    <div class="skeleton skeleton-badge skeleton-badge-wide"></div>
                </div>
                <div class="item-card-seller">
                    <div class="item-card-seller-info">
                        <div class="skeleton skeleton-avatar"></div>
                        <div>
                            <div class="skeleton skeleton-text"></div>
                            <div class="skeleton skeleton-text skeleton-short"></div>
                        </div>
                    </div>
                    <div class="skeleton skeleton-text skeleton-presence"></div>
                </div>
            </div>
        </div>
    }
}

/// A grid's worth of card placeholders while listings load.
#[component]
pub fn ItemGridSkeleton(#[prop(default = 8)] count: usize) -> impl IntoView {
    view! {
        <div class="item-grid" role="status" aria-label="Loading listings">
            {(0..count).map(|_| view! { <ItemCardSkeleton /> }).collect::<Vec<_>>()}
        </div>
    }
}
