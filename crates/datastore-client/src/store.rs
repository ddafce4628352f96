use crate::StoreError;
use async_trait::async_trait;
use datastore_types::Entity;

/// The operations the seeder needs from a document store.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Write all `entities` in one call, overwriting any existing entity
    /// with the same key.
    async fn put_multi(&self, entities: &[Entity]) -> Result<(), StoreError>;

    /// Count the entities of `kind` in `namespace` without fetching them.
    async fn count(&self, kind: &str, namespace: &str) -> Result<u64, StoreError>;
}
