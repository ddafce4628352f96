//! In-memory store used by the unit tests.

use async_trait::async_trait;
use datastore_client::{EntityStore, StoreError};
use datastore_types::{Entity, Key};
use std::collections::HashMap;
use std::sync::Mutex;

/// Records every `put_multi` call and keeps upserted entities by key.
#[derive(Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<Vec<Entity>>>,
    entities: Mutex<HashMap<Key, Entity>>,
    /// 1-based call number that fails with an API error.
    fail_on_call: Option<usize>,
    fail_count: bool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on_call(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::default()
        }
    }

    pub fn failing_count() -> Self {
        Self {
            fail_count: true,
            ..Self::default()
        }
    }

    /// Sizes of the chunks received so far, in call order.
    pub fn call_sizes(&self) -> Vec<usize> {
        self.calls.lock().unwrap().iter().map(Vec::len).collect()
    }

    /// Key names of every entity received, in call order.
    pub fn received_names(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .flatten()
            .map(|e| e.key.name().to_string())
            .collect()
    }
}

#[async_trait]
impl EntityStore for RecordingStore {
    async fn put_multi(&self, entities: &[Entity]) -> Result<(), StoreError> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(entities.to_vec());
            calls.len()
        };

        if self.fail_on_call == Some(call) {
            return Err(StoreError::Api {
                status: 500,
                reason: "INTERNAL".to_string(),
                message: format!("call {call} rejected"),
            });
        }

        let mut stored = self.entities.lock().unwrap();
        for entity in entities {
            stored.insert(entity.key.clone(), entity.clone());
        }
        Ok(())
    }

    async fn count(&self, kind: &str, namespace: &str) -> Result<u64, StoreError> {
        if self.fail_count {
            return Err(StoreError::Api {
                status: 503,
                reason: "UNAVAILABLE".to_string(),
                message: "count unavailable".to_string(),
            });
        }

        let stored = self.entities.lock().unwrap();
        Ok(stored
            .keys()
            .filter(|k| k.kind() == kind && k.namespace() == namespace)
            .count() as u64)
    }
}
