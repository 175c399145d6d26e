//! Error types for power ranking computation

use thiserror::Error;

/// Errors that stop a ranking from being computed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankingError {
    #[error(
        "Responses don't have the same number of franchises: roster {roster}, standings {standings}"
    )]
    Parity { roster: usize, standings: usize },

    #[error("League declares {declared} franchises but lists {listed}")]
    DeclaredCount { declared: usize, listed: usize },

    #[error("Invalid {field} value '{value}': {reason}")]
    Parse { field: &'static str, value: String, reason: String },
}

/// Result type for ranking operations
pub type RankingResult<T> = Result<T, RankingError>;

/// Parse a non-negative count such as wins, losses or ties
pub fn parse_count(field: &'static str, value: &str) -> RankingResult<u32> {
    value.trim().parse::<u32>().map_err(|e| RankingError::Parse {
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a finite decimal such as points-for or an all-play percentage
pub fn parse_decimal(field: &'static str, value: &str) -> RankingResult<f64> {
    let parsed = value.trim().parse::<f64>().map_err(|e| RankingError::Parse {
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    if !parsed.is_finite() {
        return Err(RankingError::Parse {
            field,
            value: value.to_string(),
            reason: "value is not finite".to_string(),
        });
    }

    Ok(parsed)
}
