use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::features::listings::models::{BuyTerms, Listing, ListingKind};

fn listing(title: &str, kind: ListingKind) -> Listing {
    Listing {
        id: Uuid::new_v4(),
        title: title.to_string(),
        brand: "Volkswagen".to_string(),
        model: String::new(),
        status: String::new(),
        fuel: None,
        transmission: None,
        body_type: None,
        color: None,
        traction: None,
        steering_wheel_position: None,
        currency: None,
        year: None,
        mileage: None,
        engine_capacity: None,
        horse_power: None,
        tags: Vec::new(),
        coordinates: None,
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
        kind,
    }
}

pub fn sell_listing(title: &str, price: &str) -> Listing {
    listing(
        title,
        ListingKind::Sell {
            price: price.to_string(),
        },
    )
}

pub fn buy_listing(title: &str, terms: BuyTerms) -> Listing {
    listing(title, ListingKind::Buy(terms))
}
