use serde::{Deserialize, Serialize};

use crate::features::listings::models::Listing;

// -- =====================
// -- OUT
// -- =====================
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub listings: Vec<Listing>,
    pub total_count: usize,
    pub has_more: bool,
    pub page: usize,
    pub page_size: usize,
    /// Canonical bookmark for this search.
    pub query: String,
}

#[derive(Serialize, Deserialize, Default, PartialEq, Debug)]
pub struct CategoryCounts {
    pub sell: usize,
    pub buy: usize,
    pub rent: usize,
    pub auction: usize,
}

#[derive(Serialize, Deserialize, Default, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListingStats {
    pub total_listings: usize,
    pub by_category: CategoryCounts,
}
