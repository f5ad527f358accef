use thiserror::Error;

/// Input rejected before anything is written to storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be a positive integer, got {value}")]
    NonPositiveId { field: &'static str, value: i64 },

    #[error("{field} {value} is too large")]
    IdOutOfRange { field: &'static str, value: i64 },

    #[error("rating must be between {min} and {max}, got {value}")]
    RatingOutOfRange { value: i64, min: i32, max: i32 },

    #[error(
        "unknown scorecard criterion '{0}' \
         (expected outcome_quality, time_saved, repeatability or use_again)"
    )]
    UnknownCriterion(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("{field} is {len} characters, the limit is {max}")]
    TextTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL must be set to a Postgres connection string")]
    MissingDatabaseUrl,

    #[error("TRACKER_MAX_CONNECTIONS must be a positive integer, got '{0}'")]
    InvalidMaxConnections(String),
}
