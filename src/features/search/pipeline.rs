use shared::schemas::{PageResult, Pagination};
use tracing::debug;

use crate::features::{
    listings::models::Listing,
    schemas::SearchParams,
    search::{category, geo, paginate::paginate, range, sort::sort},
};

/// Filter, order and page `records`.
///
/// Stages run in a fixed order: categorical filters (tab, text, sets), numeric
/// ranges, proximity, sort, paginate. The function is pure; identical inputs give
/// identical pages.
pub fn run(
    records: &[Listing],
    search_params: &SearchParams,
    pagination: &Pagination,
) -> PageResult<Listing> {
    let SearchParams {
        q,
        category,
        filters,
        sort: sort_state,
        location,
    } = search_params;

    let matched: Vec<&Listing> = records
        .iter()
        .filter(|listing| category::matches(listing, filters, q, *category))
        .filter(|listing| range::matches_ranges(listing, filters))
        .filter(|listing| geo::matches(listing, location))
        .collect();

    debug!(
        "Search matched {} of {} listings",
        matched.len(),
        records.len()
    );

    let ordered = sort(matched, sort_state);

    paginate(ordered, pagination).map(Listing::clone)
}
