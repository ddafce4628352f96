//! Error types for seeding.

use datastore_client::StoreError;
use thiserror::Error;

/// Every variant is fatal: the seeder never retries or skips.
#[derive(Error, Debug)]
pub enum SeedError {
    /// Invalid or empty configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The store client could not be created.
    #[error("Failed to connect to Datastore")]
    Connection(#[source] StoreError),

    /// A batch write failed. Earlier batches are already committed.
    #[error("Batch {batch} (records {start}..{end}) failed")]
    Write {
        batch: u64,
        start: usize,
        end: usize,
        #[source]
        source: StoreError,
    },

    /// The count query failed.
    #[error("Count query failed")]
    Query(#[source] StoreError),

    /// Keys and records went out of step while preparing a write.
    #[error("Internal error: {keys} keys for {records} records")]
    Inconsistent { keys: usize, records: usize },
}
