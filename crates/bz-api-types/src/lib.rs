//! Shared API response types for the bazaar marketplace UI.
//!
//! These mirror the JSON the catalog backend returns (camelCase keys). The UI
//! treats them as read-only display records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seller verification status that earns the check mark on a card.
pub const VERIFIED: &str = "VERIFIED";

// ── Listing ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub ai_price_rating: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub seller: ApiSeller,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSeller {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub verification_status: String,
    #[serde(default)]
    pub trust_score: f64,
    #[serde(default)]
    pub avg_rating: f64,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub is_online: bool,
}

impl ApiSeller {
    pub fn is_verified(&self) -> bool {
        self.verification_status == VERIFIED
    }
}

// ── Collections ──

/// Paged listing response from `GET /api/items`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiItemPage {
    #[serde(default)]
    pub items: Vec<ApiItem>,
    #[serde(default)]
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_deserializes_camel_case() {
        let json = r#"{
            "id": "it-1",
            "name": "Road bike",
            "price": 12500.5,
            "photo": null,
            "condition": "Used",
            "aiPriceRating": "Great Deal",
            "category": "Sports",
            "createdAt": "2026-03-01T10:00:00Z",
            "seller": {
                "id": "s-1",
                "name": "asha",
                "verificationStatus": "VERIFIED",
                "trustScore": 92.0,
                "avgRating": 4.7,
                "badges": ["Fast shipper"],
                "isOnline": true
            }
        }"#;
        let item: ApiItem = serde_json::from_str(json).expect("ApiItem deserialization failed");
        assert_eq!(item.ai_price_rating.as_deref(), Some("Great Deal"));
        assert!(item.created_at.is_some());
        assert!(item.seller.is_verified());
        assert!(item.seller.is_online);
        assert_eq!(item.seller.badges, vec!["Fast shipper".to_string()]);
    }

    #[test]
    fn item_minimal_uses_defaults() {
        let item: ApiItem = serde_json::from_str(r#"{"id": "x"}"#).expect("minimal item");
        assert_eq!(item.name, "");
        assert_eq!(item.photo, None);
        assert_eq!(item.ai_price_rating, None);
        assert!(!item.seller.is_verified());
        assert!(item.seller.badges.is_empty());
    }

    #[test]
    fn page_defaults_to_empty() {
        let page: ApiItemPage = serde_json::from_str("{}").expect("empty page");
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }
}
