use bz_api_types::{ApiItem, ApiSeller};

fn seller(id: &str, name: &str, verified: bool, avg_rating: f64, badges: &[&str], online: bool) -> ApiSeller {
    ApiSeller {
        id: id.to_string(),
        name: name.to_string(),
        photo: None,
        verification_status: if verified { "VERIFIED" } else { "PENDING" }.to_string(),
        trust_score: avg_rating * 20.0,
        avg_rating,
        badges: badges.iter().map(|b| b.to_string()).collect(),
        is_online: online,
    }
}

fn item(
    id: &str,
    name: &str,
    price: f64,
    condition: &str,
    category: &str,
    rating: Option<&str>,
    seller: ApiSeller,
) -> ApiItem {
    ApiItem {
        id: id.to_string(),
        name: name.to_string(),
        price,
        photo: None,
        condition: condition.to_string(),
        ai_price_rating: rating.map(str::to_string),
        category: category.to_string(),
        created_at: None,
        seller,
    }
}

/// Listings shown when the catalog API is unreachable.
pub fn demo_items() -> Vec<ApiItem> {
    vec![
        item(
            "demo-1",
            "Hybrid road bike, 21 speed",
            12_500.0,
            "Used",
            "Sports",
            Some("Great Deal"),
            seller("s-1", "Asha", true, 4.8, &["Top Seller", "Fast Shipper", "Since 2021"], true),
        ),
        item(
            "demo-2",
            "Walnut bookshelf",
            4_999.5,
            "Like New",
            "Furniture",
            Some("Fair Price"),
            seller("s-2", "Rohan", false, 4.1, &["Local Pickup"], false),
        ),
        item(
            "demo-3",
            "Noise-cancelling headphones",
            8_200.0,
            "Used",
            "Electronics",
            Some("Overpriced"),
            seller("s-3", "Meera", true, 3.9, &[], true),
        ),
        item(
            "demo-4",
            "Cast iron skillet",
            899.0,
            "New",
            "Home",
            None,
            seller("s-4", "Kabir", false, 5.0, &["Eco Packaging", "Quick Replies"], false),
        ),
    ]
}
