use bz_api_types::ApiItem;
use bz_core::config::DisplayConfig;
use bz_core::listing::{online_label, BadgeVariant, ItemCardModel};
use leptos::prelude::*;

const STAR_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="12" height="12" viewBox="0 0 24 24" fill="currentColor" stroke="currentColor" stroke-width="2" stroke-linejoin="round"><polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/></svg>"#;
const CLOCK_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="12" height="12" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/></svg>"#;

/// Listing card linking to the item page.
///
/// `rating_variant` maps the AI price-rating label to a badge style; without
/// it the default mapping from `bz_core::listing` is used.
#[component]
pub fn ItemCard(
    item: ApiItem,
    #[prop(optional, into)] rating_variant: Option<Callback<String, BadgeVariant>>,
    #[prop(optional)] display: Option<DisplayConfig>,
) -> impl IntoView {
    let display = display.unwrap_or_default();
    let model = match rating_variant {
        Some(cb) => ItemCardModel::new(&item, &display, |r| cb.run(r.to_string())),
        None => ItemCardModel::with_default_rating(&item, &display),
    };
    let ItemCardModel {
        href,
        name,
        photo,
        price_rating,
        price,
        condition,
        category,
        seller_name,
        seller_initial,
        seller_verified,
        seller_rating,
        seller_online,
        seller_badges,
    } = model;

    let media = match photo {
        Some(src) => view! {
            <img src=src alt=name.clone() class="item-card-photo" loading="lazy" />
        }
        .into_any(),
        None => view! { <div class="item-card-no-image">"No Image"</div> }.into_any(),
    };

    let presence = if seller_online {
        view! {
            <span class="presence presence-online">
                <span class="presence-dot"></span>
                {online_label(true)}
            </span>
        }
        .into_any()
    } else {
        view! {
            <span class="presence presence-offline">
                <span class="presence-icon" inner_html=CLOCK_ICON></span>
                {online_label(false)}
            </span>
        }
        .into_any()
    };

    let has_badges = !seller_badges.is_empty();
    let badge_views = seller_badges
        .into_iter()
        .map(|b| view! { <span class="seller-badge">{b}</span> })
        .collect::<Vec<_>>();

    view! {
        <a href=href class="item-card-link">
            <div class="card item-card">
                <div class="item-card-media">
                    {media}
                    {price_rating.map(|(label, variant)| view! {
                        <span class=format!("{} item-card-rating", variant.css_class())>{label}</span>
                    })}
                </div>
                <div class="card-header item-card-header">
                    <h3 class="card-title item-card-title">{name}</h3>
                    <span class="item-card-price">{price}</span>
                </div>
                <div class="card-content">
                    <div class="item-card-tags">
                        <span class=BadgeVariant::Outline.css_class()>{condition}</span>
                        <span class=BadgeVariant::Outline.css_class()>{category}</span>
                    </div>
                    <div class="item-card-seller">
                        <div class="item-card-seller-info">
                            <span class="avatar avatar-sm">
                                <span class="avatar-fallback">{seller_initial}</span>
                            </span>
                            <div>
                                <div class="item-card-seller-name">
                                    <span class="seller-name">{seller_name}</span>
                                    {seller_verified.then(|| view! {
                                        <span class="verified-mark" title="Verified seller">"\u{2713}"</span>
                                    })}
                                </div>
                                <div class="item-card-seller-rating">
                                    <span class="star-icon" inner_html=STAR_ICON></span>
                                    {seller_rating}
                                </div>
                            </div>
                        </div>
                        <div class="item-card-presence">{presence}</div>
                    </div>
                    {has_badges.then(|| view! {
                        <div class="item-card-badges">{badge_views}</div>
                    })}
                </div>
            </div>
        </a>
    }
}
