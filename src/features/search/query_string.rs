//! Bookmarkable search URLs.
//!
//! Every filter, sort and location field maps to one query key; set filters
//! repeat their key. Values equal to their defaults are left out, so decoding a
//! generated string and encoding it again yields the same string.

use shared::{
    schemas::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE},
    utilities::errors::AppError,
};
use url::form_urlencoded;

use crate::features::{
    listings::models::Coordinates,
    schemas::{FilterState, ListingQuery, SortKey},
    search::range::RangeField,
};

fn set_filters(filters: &FilterState) -> [(&'static str, &Vec<String>); 6] {
    [
        ("fuel", &filters.fuel),
        ("transmission", &filters.transmission),
        ("bodyType", &filters.body_type),
        ("color", &filters.color),
        ("traction", &filters.traction),
        ("currency", &filters.price_currency),
    ]
}

pub fn to_query_string(listing_query: &ListingQuery) -> String {
    let ListingQuery {
        pagination,
        search_params,
    } = listing_query;
    let filters = &search_params.filters;

    let mut serializer = form_urlencoded::Serializer::new(String::new());

    let q = search_params.q.trim();
    if !q.is_empty() {
        serializer.append_pair("q", q);
    }
    if let Some(category) = search_params.category {
        serializer.append_pair("category", category.as_str());
    }
    for (key, value) in [
        ("status", &filters.status),
        ("brand", &filters.brand),
        ("steeringWheel", &filters.steering_wheel_position),
    ] {
        append_text(&mut serializer, key, value);
    }

    for (key, values) in set_filters(filters) {
        for value in values {
            append_text(&mut serializer, key, value);
        }
    }

    for (field, range) in filters.active_ranges() {
        serializer.append_pair(
            &format!("{}Min", field.query_key()),
            &bound_text(range.low, f64::NEG_INFINITY),
        );
        serializer.append_pair(
            &format!("{}Max", field.query_key()),
            &bound_text(range.high, f64::INFINITY),
        );
    }

    for key in SortKey::PRIORITY {
        if let Some(direction) = search_params.sort.get(key) {
            serializer.append_pair(key.query_key(), direction.as_str());
        }
    }

    if let Some(center) = search_params.location.center {
        serializer.append_pair("lat", &center.lat.to_string());
        serializer.append_pair("lng", &center.lng.to_string());
        serializer.append_pair("radius", &search_params.location.radius_km.to_string());
    }

    let page = pagination.page.max(DEFAULT_PAGE);
    if page != DEFAULT_PAGE {
        serializer.append_pair("page", &page.to_string());
    }
    if pagination.page_size != DEFAULT_PAGE_SIZE {
        serializer.append_pair("pageSize", &pagination.page_size.to_string());
    }

    serializer.finish()
}

/// Text values are compared trimmed, so surrounding whitespace is not part of the bookmark.
fn append_text(serializer: &mut form_urlencoded::Serializer<'_, String>, key: &str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        serializer.append_pair(key, value);
    }
}

/// A `NaN` bound never excludes anything, same as an unbounded side.
fn bound_text(bound: f64, unbounded: f64) -> String {
    if bound.is_nan() {
        unbounded.to_string()
    } else {
        bound.to_string()
    }
}

pub fn from_query_string(raw: &str) -> Result<ListingQuery, AppError> {
    let mut listing_query = ListingQuery::default();
    let (mut lat, mut lng) = (None, None);

    {
        let ListingQuery {
            pagination,
            search_params,
        } = &mut listing_query;
        let filters = &mut search_params.filters;

        for (key, value) in form_urlencoded::parse(raw.trim_start_matches('?').as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            match &*key {
                "q" => search_params.q = value.to_string(),
                "category" => search_params.category = Some(value.parse()?),
                "status" => filters.status = value.to_string(),
                "brand" => filters.brand = value.to_string(),
                "steeringWheel" => filters.steering_wheel_position = value.to_string(),
                "fuel" => filters.fuel.push(value.to_string()),
                "transmission" => filters.transmission.push(value.to_string()),
                "bodyType" => filters.body_type.push(value.to_string()),
                "color" => filters.color.push(value.to_string()),
                "traction" => filters.traction.push(value.to_string()),
                "currency" => filters.price_currency.push(value.to_string()),
                "sortPrice" => search_params.sort.price = Some(value.parse()?),
                "sortYear" => search_params.sort.year = Some(value.parse()?),
                "sortMileage" => search_params.sort.mileage = Some(value.parse()?),
                "sortDate" => search_params.sort.date = Some(value.parse()?),
                "lat" => lat = Some(parse_number(&key, value)?),
                "lng" => lng = Some(parse_number(&key, value)?),
                "radius" => {
                    let radius = parse_number(&key, value)?;
                    if radius < 0.0 {
                        return Err(AppError::ValidationError(
                            "Radius cannot be negative".to_string(),
                        ));
                    }
                    search_params.location.radius_km = radius;
                }
                "page" => pagination.page = parse_count(&key, value)?,
                "pageSize" => pagination.page_size = parse_count(&key, value)?,
                other => {
                    if let Some((field, is_min)) = range_key(other) {
                        let bound = parse_bound(&key, value)?;
                        let range = filters.range_mut(field);
                        if is_min {
                            range.low = bound;
                        } else {
                            range.high = bound;
                        }
                    }
                }
            }
        }

        search_params.location.center = match (lat, lng) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
            (None, None) => None,
            _ => {
                return Err(AppError::ValidationError(
                    "Location needs both lat and lng".to_string(),
                ));
            }
        };
    }

    Ok(listing_query)
}

/// `priceMin` → `(Price, true)`, `horsePowerMax` → `(HorsePower, false)`.
fn range_key(key: &str) -> Option<(RangeField, bool)> {
    RangeField::ALL.into_iter().find_map(|field| {
        let rest = key.strip_prefix(field.query_key())?;
        match rest {
            "Min" => Some((field, true)),
            "Max" => Some((field, false)),
            _ => None,
        }
    })
}

fn parse_number(key: &str, value: &str) -> Result<f64, AppError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| AppError::ValidationError(format!("Invalid number '{value}' for {key}")))
}

/// Range bounds may be open-ended (`inf`, `-inf`) but never `NaN`.
fn parse_bound(key: &str, value: &str) -> Result<f64, AppError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|n| !n.is_nan())
        .ok_or_else(|| AppError::ValidationError(format!("Invalid bound '{value}' for {key}")))
}

fn parse_count(key: &str, value: &str) -> Result<usize, AppError> {
    value
        .parse::<usize>()
        .map_err(|_| AppError::ValidationError(format!("Invalid count '{value}' for {key}")))
}
