use axum::extract::FromRef;
use shared::utilities::config::Config;

use crate::services::database::Database;

#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub config: Config,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.database.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
