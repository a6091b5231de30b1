use crate::features::{
    listings::models::{Category, Listing},
    schemas::FilterState,
};

/// Categorical part of the filter: tab, status, brand, free text and the set filters.
pub fn matches(
    listing: &Listing,
    filters: &FilterState,
    search_query: &str,
    active_category: Option<Category>,
) -> bool {
    if let Some(category) = active_category
        && listing.category() != category
    {
        return false;
    }

    if !exact(&filters.status, Some(listing.status.as_str()))
        || !exact(
            &filters.steering_wheel_position,
            listing.steering_wheel_position.as_deref(),
        )
    {
        return false;
    }

    contains_ignore_case(&listing.brand, &filters.brand)
        && matches_search_query(listing, search_query)
        && in_set(&filters.fuel, listing.fuel.as_deref())
        && in_set(&filters.transmission, listing.transmission.as_deref())
        && in_set(&filters.body_type, listing.body_type.as_deref())
        && in_set(&filters.color, listing.color.as_deref())
        && in_set(&filters.traction, listing.traction.as_deref())
        && in_set(&filters.price_currency, listing.currency.as_deref())
}

fn matches_search_query(listing: &Listing, search_query: &str) -> bool {
    let needle = search_query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    listing.title.to_lowercase().contains(&needle)
        || listing.brand.to_lowercase().contains(&needle)
        || listing
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Blank filter matches everything; surrounding whitespace in the filter is ignored.
fn exact(wanted: &str, value: Option<&str>) -> bool {
    let wanted = wanted.trim();
    wanted.is_empty() || value == Some(wanted)
}

/// Empty set lets everything through; an unset value never matches a non-empty set.
/// Blank entries in the set are ignored.
fn in_set(allowed: &[String], value: Option<&str>) -> bool {
    let mut allowed = allowed
        .iter()
        .map(|candidate| candidate.trim())
        .filter(|candidate| !candidate.is_empty())
        .peekable();

    if allowed.peek().is_none() {
        return true;
    }

    match value {
        Some(value) if !value.is_empty() => allowed.any(|candidate| candidate == value),
        _ => false,
    }
}
