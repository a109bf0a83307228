//! Error types for monero-tps

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// RPC-related errors
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Date outside the range a daily window can cover
    #[error("Invalid date {date}: {reason}")]
    InvalidDate { date: String, reason: String },
}

/// RPC-specific errors
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Failed to connect to any node")]
    NoReachableNode,

    #[error("Node {url} answered with HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("Invalid response from node: {0}")]
    InvalidResponse(String),

    #[error("Response to {0} has no result field")]
    MissingResult(String),

    #[error("Node returned error {code}: {message}")]
    Remote { code: i64, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config file: {0}")]
    InvalidFile(String),

    #[error("No enabled endpoints configured")]
    NoEndpoints,

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Config file parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err: Error = RpcError::NoReachableNode.into();
        assert_eq!(err.to_string(), "RPC error: Failed to connect to any node");

        let err: Error = RpcError::Remote {
            code: -2,
            message: "Requested block height too big".to_string(),
        }
        .into();
        assert!(err.to_string().contains("-2"));

        let err = Error::InvalidDate {
            date: "2014-01-01".to_string(),
            reason: "before the first block".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date 2014-01-01: before the first block"
        );
    }
}
