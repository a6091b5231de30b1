use axum::{
    Json,
    extract::{Path, RawQuery, State},
    response::IntoResponse,
};
use shared::{
    schemas::DEFAULT_PAGE,
    utilities::{config::Config, errors::AppError},
};
use tracing::debug;
use uuid::Uuid;

use crate::{
    features::{
        listings::{
            repository::{get_listing_stats, get_many_listings, get_one_listing},
            schemas::ListingResponse,
        },
        search::query_string::{from_query_string, to_query_string},
    },
    services::database::Database,
};

pub async fn get_stats_handler(
    State(database): State<Database>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(get_listing_stats(&database.listings)))
}

pub async fn get_many_listings_handler(
    State(database): State<Database>,
    State(config): State<Config>,
    RawQuery(raw_query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let listing_query = from_query_string(raw_query.as_deref().unwrap_or_default())?;

    listing_query
        .pagination
        .validate_with_limit(config.max_page_size)?;

    let query = to_query_string(&listing_query);
    debug!("listing query: {query}");

    let page = get_many_listings(&database.listings, &listing_query);

    Ok(Json(ListingResponse {
        listings: page.items,
        total_count: page.total_count,
        has_more: page.has_more,
        page: listing_query.pagination.page.max(DEFAULT_PAGE),
        page_size: listing_query.pagination.page_size,
        query,
    }))
}

pub async fn get_one_listing_handler(
    State(database): State<Database>,
    Path(listing_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let listing = get_one_listing(&database.listings, &listing_id)?;

    Ok(Json(listing))
}
