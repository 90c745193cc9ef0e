// ============================================================================
// BarterConfig — Runtime configuration
// ============================================================================
// Read from the environment (a .env file is loaded by the binary first):
//   BARTER_SEED_PATH      JSON seed file with items and users (optional)
//   BARTER_SEARCH_RADIUS  default zip search radius in miles (default 10)
//   BARTER_LOG            tracing filter directive (default barter_core=info)
// ============================================================================

use std::path::PathBuf;

use tracing::warn;

use crate::search::DEFAULT_SEARCH_RADIUS;

pub const ENV_SEED_PATH: &str = "BARTER_SEED_PATH";
pub const ENV_SEARCH_RADIUS: &str = "BARTER_SEARCH_RADIUS";
pub const ENV_LOG: &str = "BARTER_LOG";

const DEFAULT_LOG_DIRECTIVE: &str = "barter_core=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarterConfig {
    /// Seed file to load instead of the built-in demo catalog
    pub seed_path: Option<PathBuf>,
    pub search_radius: u32,
    pub log_directive: String,
}

impl Default for BarterConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            search_radius: DEFAULT_SEARCH_RADIUS,
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
        }
    }
}

impl BarterConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let search_radius = match get(ENV_SEARCH_RADIUS) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(
                    "Invalid {} '{}', using {}",
                    ENV_SEARCH_RADIUS, raw, defaults.search_radius
                );
                defaults.search_radius
            }),
            None => defaults.search_radius,
        };

        Self {
            seed_path: get(ENV_SEED_PATH).map(PathBuf::from),
            search_radius,
            log_directive: get(ENV_LOG).unwrap_or(defaults.log_directive),
        }
    }
}
