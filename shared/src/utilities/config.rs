use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use tokio::fs;
use tracing::Level;

use crate::{schemas::DEFAULT_PAGE_SIZE, utilities::errors::AppError};

#[derive(Clone, Debug)]
pub struct Config {
    pub server_address: String,
    pub frontend_endpoint: String,

    pub base_dir: PathBuf,
    pub tracing_level: Level,

    // LISTINGS
    pub listings_path: PathBuf,

    // PAGINATION
    pub max_page_size: usize,
}

impl Config {
    pub async fn init() -> Result<Self, AppError> {
        let server_address = get_config_value(
            "SERVER_ADDRESS",
            Some("SERVER_ADDRESS"),
            None,
            Some("0.0.0.0:8001".to_string()),
        )
        .await?
        .ok_or_else(|| AppError::EnvironmentVariableNotSetError("SERVER_ADDRESS".to_string()))?;

        let frontend_endpoint = get_config_value(
            "FRONTEND_ENDPOINT",
            Some("FRONTEND_ENDPOINT"),
            None,
            Some("http://localhost:5173".to_string()),
        )
        .await?
        .ok_or_else(|| {
            AppError::EnvironmentVariableNotSetError("FRONTEND_ENDPOINT".to_string())
        })?;

        let base_dir = find_project_root().unwrap_or_else(|| PathBuf::from("."));

        let tracing_level = get_config_value(
            "TRACING_LEVEL",
            Some("TRACING_LEVEL"),
            None,
            Some(Level::DEBUG),
        )
        .await?
        .ok_or_else(|| AppError::EnvironmentVariableNotSetError("TRACING_LEVEL".to_string()))?;

        let listings_path = get_config_value(
            "LISTINGS_PATH",
            Some("LISTINGS_PATH"),
            None,
            Some(base_dir.join("data/listings.json")),
        )
        .await?
        .ok_or_else(|| AppError::EnvironmentVariableNotSetError("LISTINGS_PATH".to_string()))?;

        let max_page_size =
            get_config_value("MAX_PAGE_SIZE", Some("MAX_PAGE_SIZE"), None, Some(100))
                .await?
                .ok_or_else(|| {
                    AppError::EnvironmentVariableNotSetError("MAX_PAGE_SIZE".to_string())
                })?;

        if max_page_size < DEFAULT_PAGE_SIZE {
            return Err(AppError::ValidationError(format!(
                "MAX_PAGE_SIZE must be at least {DEFAULT_PAGE_SIZE}"
            )));
        }

        let config = Config {
            server_address,
            frontend_endpoint,
            base_dir,
            tracing_level,
            listings_path,
            max_page_size,
        };

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: "0.0.0.0:8001".to_string(),
            frontend_endpoint: "http://localhost:5173".to_string(),
            base_dir: PathBuf::from("."),
            tracing_level: Level::DEBUG,
            listings_path: PathBuf::from("data/listings.json"),
            max_page_size: 100,
        }
    }
}

fn find_project_root() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        if dir.join("Cargo.toml").exists() {
            return Some(dir);
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// Resolve one setting, first hit wins: `/run/secrets/<secret_name>`, then the
/// `env_name` variable, then the contents of `fallback_path`, then `fallback`.
/// A source whose value does not parse as `T` is skipped.
pub async fn get_config_value<T>(
    secret_name: &str,
    env_name: Option<&str>,
    fallback_path: Option<&PathBuf>,
    fallback: Option<T>,
) -> Result<Option<T>, AppError>
where
    T: FromStr,
{
    let docker_secret = Path::new("/run/secrets").join(secret_name);
    if let Some(parsed) = read_parsed(&docker_secret).await? {
        return Ok(Some(parsed));
    }

    if let Some(env_key) = env_name
        && let Ok(val) = std::env::var(env_key)
        && let Ok(parsed) = T::from_str(val.trim())
    {
        return Ok(Some(parsed));
    }

    if let Some(path) = fallback_path
        && let Some(parsed) = read_parsed(path).await?
    {
        return Ok(Some(parsed));
    }

    Ok(fallback)
}

/// `None` when `path` is absent or its trimmed contents do not parse.
async fn read_parsed<T: FromStr>(path: &Path) -> Result<Option<T>, AppError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).await.map_err(|e| {
        AppError::FileReadError(format!("Failed to read {}, {e}", path.display()))
    })?;

    Ok(T::from_str(content.trim()).ok())
}
