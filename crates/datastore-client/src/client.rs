//! REST implementation of [`EntityStore`].

use crate::config::{ClientConfig, Target};
use crate::request::{
    CommitRequest, CommitResponse, ErrorResponse, RunAggregationQueryRequest,
    RunAggregationQueryResponse, COUNT_ALIAS,
};
use crate::{EntityStore, StoreError};
use async_trait::async_trait;
use datastore_types::Entity;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Largest number of mutations Datastore accepts in one commit.
pub const MAX_ENTITIES_PER_COMMIT: usize = 500;

/// Result of a successful commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitSummary {
    pub mutations: usize,
    pub index_updates: i64,
}

/// Datastore client bound to one project.
///
/// Holds a single HTTP connection pool; calls are issued one at a time by
/// the caller.
pub struct DatastoreClient {
    http: Client,
    base_url: String,
    project_id: String,
    access_token: Option<String>,
}

impl DatastoreClient {
    /// Build a client from `config`.
    ///
    /// No request is made here. Fails if the project is empty or if the
    /// managed service is targeted without an access token.
    pub fn connect(config: ClientConfig) -> Result<Self, StoreError> {
        if config.project_id.is_empty() {
            return Err(StoreError::Config("project id is empty".to_string()));
        }

        let base_url = config.target.base_url();
        let access_token = match &config.target {
            Target::Emulator { host } => {
                debug!("Using Datastore emulator at {host}");
                None
            }
            Target::Cloud {
                endpoint,
                access_token,
            } => {
                let token = access_token
                    .as_ref()
                    .filter(|t| !t.is_empty())
                    .ok_or_else(|| {
                        StoreError::Connection(format!(
                            "no access token for {endpoint}; set DATASTORE_ACCESS_TOKEN \
                             or DATASTORE_EMULATOR_HOST"
                        ))
                    })?;
                Some(token.clone())
            }
        };

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| StoreError::Connection(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            project_id: config.project_id,
            access_token,
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/v1/projects/{}:{}", self.base_url, self.project_id, method)
    }

    async fn call<Req, Resp>(&self, method: &str, body: &Req) -> Result<Resp, StoreError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = self.method_url(method);
        debug!("POST {url}");

        let mut request = self.http.post(&url).json(body);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            let (reason, message) = match serde_json::from_str::<ErrorResponse>(&text) {
                Ok(envelope) => (envelope.error.status, envelope.error.message),
                Err(_) => (
                    status.canonical_reason().unwrap_or_default().to_string(),
                    text,
                ),
            };
            return Err(StoreError::Api {
                status: status.as_u16(),
                reason,
                message,
            });
        }

        serde_json::from_str(&text)
            .map_err(|e| StoreError::Decode(format!("invalid {method} response: {e}")))
    }

    /// Upsert `entities` in a single non-transactional commit.
    ///
    /// More than [`MAX_ENTITIES_PER_COMMIT`] entities is rejected locally
    /// without a request.
    pub async fn commit(&self, entities: &[Entity]) -> Result<CommitSummary, StoreError> {
        if entities.len() > MAX_ENTITIES_PER_COMMIT {
            return Err(StoreError::Config(format!(
                "commit of {} entities exceeds the limit of {MAX_ENTITIES_PER_COMMIT}",
                entities.len()
            )));
        }

        let request = CommitRequest::upsert_all(&self.project_id, entities);
        let response: CommitResponse = self.call("commit", &request).await?;

        if response.mutation_results.len() != entities.len() {
            return Err(StoreError::Decode(format!(
                "commit returned {} mutation results for {} entities",
                response.mutation_results.len(),
                entities.len()
            )));
        }

        debug!(
            "Committed {} entities ({} index updates)",
            entities.len(),
            response.index_updates
        );

        Ok(CommitSummary {
            mutations: response.mutation_results.len(),
            index_updates: response.index_updates,
        })
    }

    /// Run a keys-only count aggregation over `kind` in `namespace`.
    pub async fn run_count_query(&self, kind: &str, namespace: &str) -> Result<u64, StoreError> {
        let request = RunAggregationQueryRequest::count(&self.project_id, kind, namespace);
        let response: RunAggregationQueryResponse =
            self.call("runAggregationQuery", &request).await?;

        let count = response.integer(COUNT_ALIAS).ok_or_else(|| {
            StoreError::Decode(format!("aggregation result has no '{COUNT_ALIAS}' value"))
        })?;
        u64::try_from(count).map_err(|_| StoreError::Decode(format!("negative count {count}")))
    }
}

#[async_trait]
impl EntityStore for DatastoreClient {
    async fn put_multi(&self, entities: &[Entity]) -> Result<(), StoreError> {
        if entities.is_empty() {
            return Ok(());
        }
        self.commit(entities).await.map(|_| ())
    }

    async fn count(&self, kind: &str, namespace: &str) -> Result<u64, StoreError> {
        self.run_count_query(kind, namespace).await
    }
}
