//! Batched writes of generated records.

use crate::error::SeedError;
use crate::generator::Record;
use datastore_client::{EntityStore, MAX_ENTITIES_PER_COMMIT};
use datastore_types::Entity;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Largest number of entities Datastore accepts in one commit.
pub const MAX_BATCH_SIZE: usize = MAX_ENTITIES_PER_COMMIT;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of records written.
    pub rows_inserted: u64,
    /// Number of write calls issued.
    pub batch_count: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_inserted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Guard against keys and records falling out of step before any write.
/// Record-to-entity conversion is one-to-one, so this never fails today.
fn check_consistent(keys: usize, records: usize) -> Result<(), SeedError> {
    if keys != records {
        return Err(SeedError::Inconsistent { keys, records });
    }
    Ok(())
}

/// Writes records to a store in contiguous chunks, one chunk at a time.
pub struct Populator<'a, S: EntityStore + ?Sized> {
    store: &'a S,
    batch_size: usize,
}

impl<'a, S: EntityStore + ?Sized> Populator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            batch_size: MAX_BATCH_SIZE,
        }
    }

    /// Set the chunk size. Must be between 1 and [`MAX_BATCH_SIZE`].
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Write `records` in order.
    ///
    /// Each chunk is one `put_multi` call. The first failing chunk ends the
    /// operation: chunks before it stay written, later chunks are not sent.
    pub async fn populate(&self, records: &[Record]) -> Result<PopulateMetrics, SeedError> {
        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            return Err(SeedError::Config(format!(
                "batch size must be between 1 and {MAX_BATCH_SIZE}, got {}",
                self.batch_size
            )));
        }

        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let entities: Vec<Entity> = records.iter().map(Record::to_entity).collect();
        check_consistent(entities.len(), records.len())?;

        info!(
            "Writing {} records (batch size: {})",
            entities.len(),
            self.batch_size
        );

        for (i, chunk) in entities.chunks(self.batch_size).enumerate() {
            let start = i * self.batch_size;
            let end = start + chunk.len();
            let batch = i as u64 + 1;

            self.store
                .put_multi(chunk)
                .await
                .map_err(|source| SeedError::Write {
                    batch,
                    start,
                    end,
                    source,
                })?;

            metrics.rows_inserted += chunk.len() as u64;
            metrics.batch_count = batch;

            debug!(
                "Batch {} complete: {} records written, {} remaining",
                batch,
                chunk.len(),
                entities.len() - end
            );
        }

        metrics.total_duration = start_time.elapsed();

        info!(
            "Population complete: {} records in {} batches ({:?}, {:.2} records/sec)",
            metrics.rows_inserted,
            metrics.batch_count,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}
