//! Error types for the addressmon service

/// Errors that can occur while loading and rendering the address table
#[derive(Debug, thiserror::Error)]
pub enum AddressmonError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("GET {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to parse {document}: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dashboard error: {0}")]
    Dashboard(String),
}

/// Result type alias for addressmon operations
pub type Result<T> = std::result::Result<T, AddressmonError>;
