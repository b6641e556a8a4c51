use std::sync::Arc;

use cinecat_db::Catalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory director and movie collections.
    pub catalog: Arc<Catalog>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state with a fresh catalog, seeded or empty per `config`.
    pub fn from_config(config: ServerConfig) -> Self {
        let catalog = if config.seed_fixtures {
            Catalog::seeded()
        } else {
            Catalog::empty()
        };

        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
