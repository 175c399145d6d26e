//! Error types for the rankings service

use power_rankings::RankingError;
use thiserror::Error;

/// Errors surfaced by the rankings service
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("League data rejected: {0}")]
    Ranking(#[from] RankingError),

    #[error("Upstream failure: {0}")]
    Upstream(String),

    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),
}

impl ServiceError {
    /// Classify a pipeline failure, keeping typed ranking errors distinct
    pub fn from_pipeline(err: anyhow::Error) -> Self {
        match err.downcast_ref::<RankingError>() {
            Some(ranking) => ServiceError::Ranking(ranking.clone()),
            None => ServiceError::Upstream(format!("{err:#}")),
        }
    }

    /// Machine-readable code used in HTTP error bodies
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Config(_) => "CONFIG_ERROR",
            ServiceError::Ranking(RankingError::Parse { .. }) => "INVALID_LEAGUE_DATA",
            ServiceError::Ranking(_) => "FRANCHISE_COUNT_MISMATCH",
            ServiceError::Upstream(_) => "UPSTREAM_UNAVAILABLE",
            ServiceError::Render(_) => "RENDER_FAILED",
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
