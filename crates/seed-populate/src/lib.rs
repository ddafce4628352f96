//! Seed a Datastore kind with synthetic records and verify the result.
//!
//! The pipeline has three steps, each usable on its own:
//!
//! 1. [`generate_records`] builds `id1..idN` records in memory.
//! 2. [`Populator`] writes them through an [`EntityStore`] in chunks no
//!    larger than [`MAX_BATCH_SIZE`], stopping at the first failure.
//! 3. [`CountVerifier`] counts the entities of the kind in the namespace.
//!
//! ```ignore
//! let records = generate_records(10, "item_kind", "my_namespace");
//! let metrics = Populator::new(&client).populate(&records).await?;
//! let report = CountVerifier::new(&client)
//!     .verify("item_kind", "my_namespace", metrics.rows_inserted)
//!     .await?;
//! println!("Count {}", report.count);
//! ```
//!
//! [`EntityStore`]: datastore_client::EntityStore

pub mod error;
pub mod generator;
pub mod populator;
pub mod verifier;

#[cfg(test)]
mod testing;

pub use error::SeedError;
pub use generator::{generate_records, Record};
pub use populator::{PopulateMetrics, Populator, MAX_BATCH_SIZE};
pub use verifier::{CountReport, CountVerifier};
