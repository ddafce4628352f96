//! Cloud Datastore client for the seeder.
//!
//! [`EntityStore`] is the narrow interface the seeding pipeline depends on:
//! a multi-entity put and a count aggregation. [`DatastoreClient`]
//! implements it over the Datastore v1 REST API, against either the managed
//! service (bearer-token auth) or the local emulator (no auth).
//!
//! # Example
//!
//! ```ignore
//! use datastore_client::{ClientConfig, DatastoreClient, EntityStore, Target};
//!
//! let client = DatastoreClient::connect(ClientConfig {
//!     project_id: "my_project".to_string(),
//!     target: Target::Emulator { host: "localhost:8081".to_string() },
//!     request_timeout: None,
//! })?;
//! let count = client.count("item_kind", "my_namespace").await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod store;

pub use client::{CommitSummary, DatastoreClient, MAX_ENTITIES_PER_COMMIT};
pub use config::{ClientConfig, Target, DEFAULT_ENDPOINT};
pub use error::StoreError;
pub use store::EntityStore;

pub use datastore_types::{Entity, Key, Value};
