use bz_api_types::ApiItem;
use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;

// ── Badge ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
    Success,
}

impl BadgeVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge badge-default",
            BadgeVariant::Secondary => "badge badge-secondary",
            BadgeVariant::Destructive => "badge badge-destructive",
            BadgeVariant::Outline => "badge badge-outline",
            BadgeVariant::Success => "badge badge-success",
        }
    }
}

/// Mapping used when the caller does not provide one.
pub fn default_price_rating_variant(rating: &str) -> BadgeVariant {
    let lower = rating.to_lowercase();
    if lower.contains("great") || lower.contains("good") || lower.contains("below") {
        BadgeVariant::Success
    } else if lower.contains("over") || lower.contains("high") || lower.contains("above") {
        BadgeVariant::Destructive
    } else {
        BadgeVariant::Secondary
    }
}

// ── Formatting ──

pub fn format_price(currency_symbol: &str, price: f64) -> String {
    format!("{currency_symbol}{price:.2}")
}

pub fn format_rating(avg_rating: f64) -> String {
    format!("{avg_rating:.1}")
}

/// Avatar fallback: first character of the seller name, uppercased.
pub fn seller_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_default()
}

pub fn item_href(id: &str) -> String {
    format!("/item/{id}")
}

pub fn visible_badges(badges: &[String], limit: usize) -> &[String] {
    &badges[..badges.len().min(limit)]
}

pub fn online_label(is_online: bool) -> &'static str {
    if is_online { "Online" } else { "Offline" }
}

// ── Card model ──

/// Everything an item card renders, precomputed from an [`ApiItem`].
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCardModel {
    pub href: String,
    pub name: String,
    pub photo: Option<String>,
    /// Rating label and the badge variant chosen for it.
    pub price_rating: Option<(String, BadgeVariant)>,
    pub price: String,
    pub condition: String,
    pub category: String,
    pub seller_name: String,
    pub seller_initial: String,
    pub seller_verified: bool,
    pub seller_rating: String,
    pub seller_online: bool,
    pub seller_badges: Vec<String>,
}

impl ItemCardModel {
    pub fn new(
        item: &ApiItem,
        display: &DisplayConfig,
        rating_variant: impl Fn(&str) -> BadgeVariant,
    ) -> Self {
        let seller = &item.seller;
        Self {
            href: item_href(&item.id),
            name: item.name.clone(),
            photo: item.photo.clone().filter(|p| !p.is_empty()),
            price_rating: item
                .ai_price_rating
                .as_deref()
                .filter(|r| !r.is_empty())
                .map(|r| (r.to_string(), rating_variant(r))),
            price: format_price(&display.currency_symbol, item.price),
            condition: item.condition.clone(),
            category: item.category.clone(),
            seller_name: seller.name.clone(),
            seller_initial: seller_initial(&seller.name),
            seller_verified: seller.is_verified(),
            seller_rating: format_rating(seller.avg_rating),
            seller_online: seller.is_online,
            seller_badges: visible_badges(&seller.badges, display.max_seller_badges).to_vec(),
        }
    }

    pub fn with_default_rating(item: &ApiItem, display: &DisplayConfig) -> Self {
        Self::new(item, display, default_price_rating_variant)
    }
}
