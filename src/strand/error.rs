use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrandError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field {0} must be a string")]
    InvalidType(&'static str),

    #[error("Value already exists: {0:?}")]
    Conflict(String),

    #[error("Value not found: {0:?}")]
    NotFound(String),

    #[error("Invalid filter value for {field}: {reason}")]
    InvalidFilterValue {
        field: &'static str,
        reason: String,
    },

    #[error("Could not interpret query: {0:?}")]
    UnparsableQuery(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StrandError {
    /// Whether the request, rather than the store, caused the failure.
    /// Transports map this to their client/server status split.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            StrandError::Io(_) | StrandError::Serialization(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StrandError>;
