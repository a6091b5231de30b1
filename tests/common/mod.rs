#![allow(dead_code)]

use serde_json::{Value, json};
use uuid::Uuid;
use vehicle_market::features::listings::models::Listing;

/// Build a listing from the fields that matter to a test; the rest get defaults.
pub fn listing(fields: Value) -> Listing {
    let mut value = json!({
        "id": Uuid::new_v4(),
        "title": "Untitled",
        "brand": "Volkswagen",
        "createdAt": "2024-03-01T10:00:00Z",
    });

    if let (Some(base), Value::Object(extra)) = (value.as_object_mut(), fields) {
        base.extend(extra);
    }

    serde_json::from_value(value).unwrap()
}

pub fn titles(listings: &[Listing]) -> Vec<&str> {
    listings
        .iter()
        .map(|listing| listing.title.as_str())
        .collect()
}

/// One listing of every category, spread over Uzbekistan.
pub fn market() -> Vec<Listing> {
    vec![
        listing(json!({
            "id": "0f8fad5b-d9cb-469f-a165-70867728950e",
            "title": "Golf VII",
            "category": "sell",
            "price": "15.000",
            "year": "2017",
            "mileage": "98.500",
            "fuel": "diesel",
            "color": "white",
            "coordinates": {"lat": 41.2995, "lng": 69.2401},
            "createdAt": "2024-05-02T09:15:00Z",
        })),
        listing(json!({
            "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "title": "Wanted: family SUV",
            "brand": "Toyota",
            "category": "buy",
            "minPrice": "20.000",
            "maxPrice": "32.000",
            "maxMileage": "80.000",
            "fuel": "hybrid",
            "coordinates": {"lat": 41.2995, "lng": 69.2401},
            "createdAt": "2024-06-20T08:00:00Z",
        })),
        listing(json!({
            "id": "9b2e4c1a-3f5d-4e8a-b7c6-1d2e3f4a5b6c",
            "title": "Kia K5 daily rent",
            "brand": "Kia",
            "category": "rent",
            "price": "650",
            "year": 2022,
            "fuel": "petrol",
            "color": "black",
            "coordinates": {"lat": 39.6542, "lng": 66.9597},
            "createdAt": "2024-07-01T12:00:00Z",
        })),
        listing(json!({
            "id": "c56a4180-65aa-42ec-a945-5fd21dec0538",
            "title": "W124 collector",
            "brand": "Mercedes-Benz",
            "category": "auction",
            "startingBid": "7.500",
            "year": "1994",
            "fuel": "petrol",
            "createdAt": "2024-07-20T16:30:00Z",
        })),
    ]
}
