use std::{path::Path, sync::Arc};

use shared::utilities::{config::Config, errors::AppError};
use tokio::fs;
use tracing::{info, warn};

use crate::features::listings::models::Listing;

/// Read-only record set shared by every request.
#[derive(Clone, Default)]
pub struct Database {
    pub listings: Arc<Vec<Listing>>,
}

impl Database {
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let listings = load_listings(&config.listings_path).await?;
        info!(
            "✅ Loaded {} listings from {}",
            listings.len(),
            config.listings_path.display()
        );

        Ok(Self::from_listings(listings))
    }

    pub fn from_listings(listings: Vec<Listing>) -> Self {
        Self {
            listings: Arc::new(listings),
        }
    }
}

/// A missing file is an empty market, not a startup failure.
async fn load_listings(path: &Path) -> Result<Vec<Listing>, AppError> {
    if !fs::try_exists(path).await? {
        warn!("Listings file {} not found, starting empty", path.display());
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).await.map_err(|e| {
        AppError::FileReadError(format!(
            "Failed to read listings at {}, {e}",
            path.display()
        ))
    })?;

    Ok(serde_json::from_str(&content)?)
}
