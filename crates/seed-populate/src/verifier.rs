//! Count verification.

use crate::error::SeedError;
use datastore_client::EntityStore;
use tracing::{info, warn};

/// Outcome of a count check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountReport {
    pub kind: String,
    pub namespace: String,
    /// Entities present at query time.
    pub count: u64,
    /// Records written by this run.
    pub expected: u64,
}

impl CountReport {
    pub fn matches(&self) -> bool {
        self.count == self.expected
    }
}

pub struct CountVerifier<'a, S: EntityStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: EntityStore + ?Sized> CountVerifier<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Count entities of `kind` in `namespace`.
    pub async fn count(&self, kind: &str, namespace: &str) -> Result<u64, SeedError> {
        self.store
            .count(kind, namespace)
            .await
            .map_err(SeedError::Query)
    }

    /// Count and compare against `expected`.
    ///
    /// A mismatch is reported, not raised: the namespace may already have
    /// held entities before this run.
    pub async fn verify(
        &self,
        kind: &str,
        namespace: &str,
        expected: u64,
    ) -> Result<CountReport, SeedError> {
        let count = self.count(kind, namespace).await?;
        let report = CountReport {
            kind: kind.to_string(),
            namespace: namespace.to_string(),
            count,
            expected,
        };

        if report.matches() {
            info!("Verified {count} entities of kind '{kind}' in namespace '{namespace}'");
        } else {
            warn!(
                "Kind '{kind}' in namespace '{namespace}' holds {count} entities, expected {expected}"
            );
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_records;
    use crate::populator::Populator;
    use crate::testing::RecordingStore;

    #[tokio::test]
    async fn test_count_after_populate() {
        let store = RecordingStore::new();
        let records = generate_records(10, "item_kind", "my_namespace");
        Populator::new(&store).populate(&records).await.unwrap();

        let report = CountVerifier::new(&store)
            .verify("item_kind", "my_namespace", 10)
            .await
            .unwrap();

        assert_eq!(report.count, 10);
        assert!(report.matches());
    }

    #[tokio::test]
    async fn test_count_is_scoped_to_kind_and_namespace() {
        let store = RecordingStore::new();
        let populator = Populator::new(&store);
        populator
            .populate(&generate_records(4, "item_kind", "ns_a"))
            .await
            .unwrap();
        populator
            .populate(&generate_records(6, "item_kind", "ns_b"))
            .await
            .unwrap();
        populator
            .populate(&generate_records(2, "other_kind", "ns_a"))
            .await
            .unwrap();

        let verifier = CountVerifier::new(&store);
        assert_eq!(verifier.count("item_kind", "ns_a").await.unwrap(), 4);
        assert_eq!(verifier.count("item_kind", "ns_b").await.unwrap(), 6);
        assert_eq!(verifier.count("other_kind", "ns_a").await.unwrap(), 2);
        assert_eq!(verifier.count("missing", "ns_a").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_rerun_upserts_same_keys() {
        let store = RecordingStore::new();
        let populator = Populator::new(&store);
        populator
            .populate(&generate_records(10, "item_kind", "ns"))
            .await
            .unwrap();
        populator
            .populate(&generate_records(10, "item_kind", "ns"))
            .await
            .unwrap();

        let report = CountVerifier::new(&store)
            .verify("item_kind", "ns", 10)
            .await
            .unwrap();
        assert_eq!(report.count, 10);
    }

    #[tokio::test]
    async fn test_mismatch_is_reported() {
        let store = RecordingStore::new();
        Populator::new(&store)
            .populate(&generate_records(12, "item_kind", "ns"))
            .await
            .unwrap();

        let report = CountVerifier::new(&store)
            .verify("item_kind", "ns", 10)
            .await
            .unwrap();
        assert_eq!(report.count, 12);
        assert!(!report.matches());
    }

    #[tokio::test]
    async fn test_query_failure_is_fatal() {
        let store = RecordingStore::failing_count();
        let result = CountVerifier::new(&store).verify("item_kind", "ns", 0).await;
        assert!(matches!(result, Err(SeedError::Query(_))));
    }
}
