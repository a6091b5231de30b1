use shared::{
    schemas::{DEFAULT_PAGE, PageResult},
    utilities::errors::AppError,
};
use tracing::debug;
use uuid::Uuid;

use crate::features::{
    listings::{
        models::{Category, Listing},
        schemas::{CategoryCounts, ListingStats},
    },
    schemas::ListingQuery,
    search::pipeline,
};

pub fn get_many_listings(
    listings: &[Listing],
    listing_query: &ListingQuery,
) -> PageResult<Listing> {
    let ListingQuery {
        pagination,
        search_params,
    } = listing_query;

    debug!(
        "Searching {} listings, page {} of size {}",
        listings.len(),
        pagination.page.max(DEFAULT_PAGE),
        pagination.page_size
    );

    pipeline::run(listings, search_params, pagination)
}

pub fn get_one_listing(listings: &[Listing], listing_id: &Uuid) -> Result<Listing, AppError> {
    listings
        .iter()
        .find(|listing| listing.id == *listing_id)
        .cloned()
        .ok_or_else(|| AppError::NotFoundError(format!("Listing {listing_id} not found")))
}

pub fn get_listing_stats(listings: &[Listing]) -> ListingStats {
    let mut by_category = CategoryCounts::default();

    for listing in listings {
        let count = match listing.category() {
            Category::Sell => &mut by_category.sell,
            Category::Buy => &mut by_category.buy,
            Category::Rent => &mut by_category.rent,
            Category::Auction => &mut by_category.auction,
        };
        *count += 1;
    }

    ListingStats {
        total_listings: listings.len(),
        by_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::listings::models::BuyTerms;
    use crate::test_support::{buy_listing, sell_listing};

    #[test]
    fn test_get_one_listing() {
        let listings = vec![sell_listing("Golf", "1"), sell_listing("Polo", "2")];

        let found = get_one_listing(&listings, &listings[1].id).unwrap();
        assert_eq!(found.title, "Polo");

        assert!(matches!(
            get_one_listing(&listings, &Uuid::new_v4()),
            Err(AppError::NotFoundError(_))
        ));
    }

    #[test]
    fn test_stats_count_each_category() {
        let listings = vec![
            sell_listing("Golf", "1"),
            sell_listing("Polo", "2"),
            buy_listing("Wanted", BuyTerms::default()),
        ];

        let stats = get_listing_stats(&listings);

        assert_eq!(stats.total_listings, 3);
        assert_eq!(
            stats.by_category,
            CategoryCounts {
                sell: 2,
                buy: 1,
                rent: 0,
                auction: 0
            }
        );
    }
}
