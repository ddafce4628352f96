//! Data model of the Cloud Datastore v1 REST API.
//!
//! Only the subset used by the seeder is modelled: name-keyed entities in a
//! namespace partition, and the scalar values the seeded records carry.
//! All types serialize to the JSON shapes accepted by `projects.commit` and
//! returned by `projects.runAggregationQuery`.
//!
//! ```rust
//! use datastore_types::{Entity, Key, Value};
//!
//! let key = Key::name_key("item_kind", "id1", "my_namespace");
//! let entity = Entity::new(key)
//!     .with_property("email", Value::string("id1@email.com").unindexed());
//! assert_eq!(entity.properties.len(), 1);
//! ```

pub mod entity;
pub mod key;
pub mod value;

pub use entity::Entity;
pub use key::{Key, PartitionId, PathElement};
pub use value::{Value, ValueKind};
