use serde::{Deserialize, Serialize};

use crate::features::{
    listings::models::{Listing, ListingKind},
    schemas::FilterState,
    search::normalize::normalize,
};

/// Closed numeric interval `[low, high]`.
#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Debug)]
pub struct Interval {
    pub low: f64,
    pub high: f64,
}

impl Interval {
    pub const UNBOUNDED: Interval = Interval::new(f64::NEG_INFINITY, f64::INFINITY);

    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub const fn point(value: f64) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }

    pub fn has_nan(&self) -> bool {
        self.low.is_nan() || self.high.is_nan()
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "camelCase")]
pub enum RangeField {
    Price,
    Year,
    Mileage,
    EngineCapacity,
    HorsePower,
}

impl RangeField {
    /// Evaluation order of the range stage.
    pub const ALL: [RangeField; 5] = [
        RangeField::Price,
        RangeField::Year,
        RangeField::Mileage,
        RangeField::EngineCapacity,
        RangeField::HorsePower,
    ];

    /// Full range offered by the filter UI. A filter equal to it is inactive.
    pub const fn default_interval(&self) -> Interval {
        match self {
            RangeField::Price => Interval::new(0.0, 1_000_000.0),
            RangeField::Year => Interval::new(1900.0, 2100.0),
            RangeField::Mileage => Interval::new(0.0, 1_000_000.0),
            RangeField::EngineCapacity => Interval::new(0.0, 10_000.0),
            RangeField::HorsePower => Interval::new(0.0, 2_000.0),
        }
    }

    pub fn query_key(&self) -> &'static str {
        match self {
            RangeField::Price => "price",
            RangeField::Year => "year",
            RangeField::Mileage => "mileage",
            RangeField::EngineCapacity => "engineCapacity",
            RangeField::HorsePower => "horsePower",
        }
    }
}

/// Reduce `listing` to an interval for `field`.
///
/// Buy requests carry their own `[min, max]`; a missing side takes the matching
/// side of `bounds`, so it never narrows the match. Every other variant is a
/// single point.
pub fn resolve_interval(listing: &Listing, field: RangeField, bounds: Interval) -> Interval {
    match &listing.kind {
        ListingKind::Buy(terms) => {
            let (min, max) = terms.bounds(field);
            Interval::new(
                min.map(normalize).unwrap_or(bounds.low),
                max.map(normalize).unwrap_or(bounds.high),
            )
        }
        _ => Interval::point(listing.raw_value(field).map(normalize).unwrap_or(0.0)),
    }
}

/// Interval intersection. Unparseable values never exclude a listing.
pub fn overlaps(entity: Interval, filter: Interval) -> bool {
    if entity.has_nan() {
        return true;
    }

    !(entity.high < filter.low || entity.low > filter.high)
}

/// `true` when `listing` overlaps every active range filter.
pub fn matches_ranges(listing: &Listing, filters: &FilterState) -> bool {
    filters
        .active_ranges()
        .all(|(field, range)| overlaps(resolve_interval(listing, field, range), range))
}
