use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use shared::utilities::errors::AppError;
use uuid::Uuid;

use crate::features::search::range::RangeField;

#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sell,
    Buy,
    Rent,
    Auction,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Sell,
        Category::Buy,
        Category::Rent,
        Category::Auction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sell => "sell",
            Category::Buy => "buy",
            Category::Rent => "rent",
            Category::Auction => "auction",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sell" => Ok(Category::Sell),
            "buy" => Ok(Category::Buy),
            "rent" => Ok(Category::Rent),
            "auction" => Ok(Category::Auction),
            other => Err(AppError::ValidationError(format!(
                "Unknown listing category '{other}'"
            ))),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
#[serde(rename_all = "lowercase")]
pub enum RentPeriod {
    #[default]
    Day,
    Week,
    Month,
}

#[serde_as]
#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Debug)]
pub struct Coordinates {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub lat: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// What a buyer is looking for. Every scalar is a range, and either side may be missing.
#[derive(Deserialize, Serialize, Clone, PartialEq, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct BuyTerms {
    #[serde(deserialize_with = "deserialize_raw_number")]
    pub min_price: Option<String>,
    #[serde(deserialize_with = "deserialize_raw_number")]
    pub max_price: Option<String>,
    #[serde(deserialize_with = "deserialize_raw_number")]
    pub min_year: Option<String>,
    #[serde(deserialize_with = "deserialize_raw_number")]
    pub max_year: Option<String>,
    #[serde(deserialize_with = "deserialize_raw_number")]
    pub min_mileage: Option<String>,
    #[serde(deserialize_with = "deserialize_raw_number")]
    pub max_mileage: Option<String>,
    #[serde(deserialize_with = "deserialize_raw_number")]
    pub min_engine_capacity: Option<String>,
    #[serde(deserialize_with = "deserialize_raw_number")]
    pub max_engine_capacity: Option<String>,
    #[serde(deserialize_with = "deserialize_raw_number")]
    pub min_horse_power: Option<String>,
    #[serde(deserialize_with = "deserialize_raw_number")]
    pub max_horse_power: Option<String>,
}

impl BuyTerms {
    /// Raw `(min, max)` bounds for `field`.
    pub fn bounds(&self, field: RangeField) -> (Option<&str>, Option<&str>) {
        let (min, max) = match field {
            RangeField::Price => (&self.min_price, &self.max_price),
            RangeField::Year => (&self.min_year, &self.max_year),
            RangeField::Mileage => (&self.min_mileage, &self.max_mileage),
            RangeField::EngineCapacity => (&self.min_engine_capacity, &self.max_engine_capacity),
            RangeField::HorsePower => (&self.min_horse_power, &self.max_horse_power),
        };
        (min.as_deref(), max.as_deref())
    }
}

#[derive(Deserialize, Serialize, Clone, PartialEq, Debug)]
#[serde(tag = "category", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ListingKind {
    Sell {
        #[serde(default, deserialize_with = "deserialize_price")]
        price: String,
    },
    Buy(BuyTerms),
    Rent {
        #[serde(default, deserialize_with = "deserialize_price")]
        price: String,
        #[serde(default)]
        period: RentPeriod,
    },
    Auction {
        #[serde(default, alias = "startingBid", deserialize_with = "deserialize_price")]
        price: String,
        #[serde(default)]
        ends_at: Option<DateTime<Utc>>,
    },
}

impl ListingKind {
    pub fn category(&self) -> Category {
        match self {
            ListingKind::Sell { .. } => Category::Sell,
            ListingKind::Buy(_) => Category::Buy,
            ListingKind::Rent { .. } => Category::Rent,
            ListingKind::Auction { .. } => Category::Auction,
        }
    }

    /// Single asking price. `None` for buy requests, which carry a price range.
    pub fn price(&self) -> Option<&str> {
        match self {
            ListingKind::Sell { price }
            | ListingKind::Rent { price, .. }
            | ListingKind::Auction { price, .. } => Some(price.as_str()),
            ListingKind::Buy(_) => None,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub fuel: Option<String>,
    #[serde(default)]
    pub transmission: Option<String>,
    #[serde(default)]
    pub body_type: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub traction: Option<String>,
    #[serde(default)]
    pub steering_wheel_position: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "deserialize_raw_number")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "deserialize_raw_number")]
    pub mileage: Option<String>,
    #[serde(default, deserialize_with = "deserialize_raw_number")]
    pub engine_capacity: Option<String>,
    #[serde(default, deserialize_with = "deserialize_raw_number")]
    pub horse_power: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: ListingKind,
}

impl Listing {
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Raw single value of `field` as entered on the form.
    pub fn raw_value(&self, field: RangeField) -> Option<&str> {
        match field {
            RangeField::Price => self.kind.price(),
            RangeField::Year => self.year.as_deref(),
            RangeField::Mileage => self.mileage.as_deref(),
            RangeField::EngineCapacity => self.engine_capacity.as_deref(),
            RangeField::HorsePower => self.horse_power.as_deref(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Form values arrive as strings, imported records sometimes as JSON numbers.
fn deserialize_raw_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<RawNumber>::deserialize(deserializer)?.map(|raw| match raw {
            RawNumber::Text(text) => text,
            RawNumber::Integer(n) => n.to_string(),
            RawNumber::Float(n) => n.to_string(),
        }),
    )
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_raw_number(deserializer)?.unwrap_or_default())
}
