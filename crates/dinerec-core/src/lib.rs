//! Shared domain values and configuration for the restaurant recommender.

mod app_config;
mod config;
pub mod criteria;
pub mod profile;
pub mod venue;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use criteria::{BudgetBand, CriteriaError, Cuisine, Occasion, PartySize, SearchCriteria};
pub use profile::{load_user_context, Tier, UserContext};
pub use venue::{Narrative, NormalizedVenue, VerifiedRecommendation};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read profile file {path}: {source}")]
    ProfileFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile file: {0}")]
    ProfileFileParse(#[source] serde_yaml::Error),

    #[error("profile validation failed: {0}")]
    Validation(String),
}
