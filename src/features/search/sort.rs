use std::{borrow::Borrow, cmp::Ordering};

use crate::features::{
    listings::models::Listing,
    schemas::{SortDirection, SortKey, SortState},
    search::range::{Interval, RangeField, resolve_interval},
};

/// Stable sort by the highest-priority directive in `sort_state`.
///
/// Only one directive orders the result; lower-priority ones are not used as
/// tie-breakers. With no directive the input order is returned unchanged.
pub fn sort<L: Borrow<Listing>>(mut listings: Vec<L>, sort_state: &SortState) -> Vec<L> {
    let Some((key, direction)) = sort_state.active() else {
        return listings;
    };

    match key {
        SortKey::Date => listings.sort_by(|a, b| {
            apply(
                a.borrow().created_at.cmp(&b.borrow().created_at),
                direction,
            )
        }),
        SortKey::Price => sort_numeric(&mut listings, RangeField::Price, direction),
        SortKey::Year => sort_numeric(&mut listings, RangeField::Year, direction),
        SortKey::Mileage => sort_numeric(&mut listings, RangeField::Mileage, direction),
    }

    listings
}

fn sort_numeric<L: Borrow<Listing>>(listings: &mut [L], field: RangeField, direction: SortDirection) {
    listings.sort_by(|a, b| {
        compare_numbers(
            sort_value(a.borrow(), field),
            sort_value(b.borrow(), field),
            direction,
        )
    });
}

/// Lower end of the listing's interval; a buy request sorts by its minimum.
fn sort_value(listing: &Listing, field: RangeField) -> f64 {
    resolve_interval(listing, field, Interval::UNBOUNDED).low
}

/// `NaN` goes last regardless of direction.
fn compare_numbers(a: f64, b: f64, direction: SortDirection) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => apply(a.partial_cmp(&b).unwrap_or(Ordering::Equal), direction),
    }
}

fn apply(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}
