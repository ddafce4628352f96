//! Error types for the Datastore client.

use thiserror::Error;

/// Errors returned by [`crate::EntityStore`] implementations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The client could not be set up (missing credentials, bad endpoint).
    #[error("Connection error: {0}")]
    Connection(String),

    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Datastore API error: HTTP {status} {reason}: {message}")]
    Api {
        status: u16,
        reason: String,
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),
}
