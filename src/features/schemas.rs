use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use shared::{schemas::Pagination, utilities::errors::AppError};

use crate::features::{
    listings::models::{Category, Coordinates},
    search::range::{Interval, RangeField},
};

pub const DEFAULT_RADIUS_KM: f64 = 50.0;

#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(AppError::ValidationError(format!(
                "Unknown sort direction '{other}', expected asc or desc"
            ))),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Price,
    Year,
    Mileage,
    Date,
}

impl SortKey {
    /// Precedence when several directives are set.
    pub const PRIORITY: [SortKey; 4] = [
        SortKey::Price,
        SortKey::Year,
        SortKey::Mileage,
        SortKey::Date,
    ];

    pub fn query_key(&self) -> &'static str {
        match self {
            SortKey::Price => "sortPrice",
            SortKey::Year => "sortYear",
            SortKey::Mileage => "sortMileage",
            SortKey::Date => "sortDate",
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
#[serde(default)]
pub struct SortState {
    pub price: Option<SortDirection>,
    pub year: Option<SortDirection>,
    pub mileage: Option<SortDirection>,
    pub date: Option<SortDirection>,
}

impl SortState {
    pub fn get(&self, key: SortKey) -> Option<SortDirection> {
        match key {
            SortKey::Price => self.price,
            SortKey::Year => self.year,
            SortKey::Mileage => self.mileage,
            SortKey::Date => self.date,
        }
    }

    pub fn set(&mut self, key: SortKey, direction: Option<SortDirection>) {
        match key {
            SortKey::Price => self.price = direction,
            SortKey::Year => self.year = direction,
            SortKey::Mileage => self.mileage = direction,
            SortKey::Date => self.date = direction,
        }
    }

    /// First non-null directive in [`SortKey::PRIORITY`] order.
    pub fn active(&self) -> Option<(SortKey, SortDirection)> {
        SortKey::PRIORITY
            .into_iter()
            .find_map(|key| self.get(key).map(|direction| (key, direction)))
    }
}

#[derive(Deserialize, Serialize, Clone, PartialEq, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterState {
    pub status: String,
    pub brand: String,
    pub fuel: Vec<String>,
    pub transmission: Vec<String>,
    pub body_type: Vec<String>,
    pub color: Vec<String>,
    pub traction: Vec<String>,
    pub price_currency: Vec<String>,
    pub steering_wheel_position: String,
    pub price_range: Interval,
    pub year_range: Interval,
    pub mileage_range: Interval,
    pub engine_capacity_range: Interval,
    pub horse_power_range: Interval,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            status: String::new(),
            brand: String::new(),
            fuel: Vec::new(),
            transmission: Vec::new(),
            body_type: Vec::new(),
            color: Vec::new(),
            traction: Vec::new(),
            price_currency: Vec::new(),
            steering_wheel_position: String::new(),
            price_range: RangeField::Price.default_interval(),
            year_range: RangeField::Year.default_interval(),
            mileage_range: RangeField::Mileage.default_interval(),
            engine_capacity_range: RangeField::EngineCapacity.default_interval(),
            horse_power_range: RangeField::HorsePower.default_interval(),
        }
    }
}

impl FilterState {
    pub fn range(&self, field: RangeField) -> Interval {
        match field {
            RangeField::Price => self.price_range,
            RangeField::Year => self.year_range,
            RangeField::Mileage => self.mileage_range,
            RangeField::EngineCapacity => self.engine_capacity_range,
            RangeField::HorsePower => self.horse_power_range,
        }
    }

    pub fn range_mut(&mut self, field: RangeField) -> &mut Interval {
        match field {
            RangeField::Price => &mut self.price_range,
            RangeField::Year => &mut self.year_range,
            RangeField::Mileage => &mut self.mileage_range,
            RangeField::EngineCapacity => &mut self.engine_capacity_range,
            RangeField::HorsePower => &mut self.horse_power_range,
        }
    }

    /// Ranges that differ from their default, in evaluation order.
    pub fn active_ranges(&self) -> impl Iterator<Item = (RangeField, Interval)> + '_ {
        RangeField::ALL
            .into_iter()
            .map(|field| (field, self.range(field)))
            .filter(|(field, range)| *range != field.default_interval())
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationFilter {
    pub center: Option<Coordinates>,
    pub radius_km: f64,
}

impl Default for LocationFilter {
    fn default() -> Self {
        Self {
            center: None,
            radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, PartialEq, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchParams {
    pub q: String,
    pub category: Option<Category>,
    pub filters: FilterState,
    pub sort: SortState,
    pub location: LocationFilter,
}

#[derive(Deserialize, Serialize, Clone, PartialEq, Default, Debug)]
pub struct ListingQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(flatten)]
    pub search_params: SearchParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_has_no_active_ranges() {
        assert_eq!(FilterState::default().active_ranges().count(), 0);
    }

    #[test]
    fn test_active_ranges_keep_evaluation_order() {
        let mut filters = FilterState::default();
        filters.horse_power_range = Interval::new(100.0, 300.0);
        filters.price_range = Interval::new(0.0, 20_000.0);

        let fields: Vec<RangeField> = filters.active_ranges().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![RangeField::Price, RangeField::HorsePower]);
    }

    #[test]
    fn test_sort_priority() {
        let mut sort = SortState::default();
        assert_eq!(sort.active(), None);

        sort.date = Some(SortDirection::Desc);
        sort.mileage = Some(SortDirection::Asc);
        assert_eq!(sort.active(), Some((SortKey::Mileage, SortDirection::Asc)));

        sort.price = Some(SortDirection::Desc);
        assert_eq!(sort.active(), Some((SortKey::Price, SortDirection::Desc)));
    }

    #[test]
    fn test_unknown_sort_direction() {
        assert!("sideways".parse::<SortDirection>().is_err());
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
    }
}
