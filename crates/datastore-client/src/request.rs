//! Request and response bodies of the REST methods the client calls.

use datastore_types::{Entity, PartitionId, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Commit mode for writes outside a transaction.
pub const NON_TRANSACTIONAL: &str = "NON_TRANSACTIONAL";

/// Property name that selects only the key in a projection.
pub const KEY_PROPERTY: &str = "__key__";

/// Alias under which the count aggregation is returned.
pub const COUNT_ALIAS: &str = "count";

#[derive(Debug, Serialize)]
pub struct CommitRequest {
    pub mode: &'static str,
    pub mutations: Vec<Mutation>,
}

#[derive(Debug, Serialize)]
pub struct Mutation {
    pub upsert: Entity,
}

impl CommitRequest {
    /// Upsert every entity, binding keys without a project to `project_id`.
    pub fn upsert_all(project_id: &str, entities: &[Entity]) -> Self {
        let mutations = entities
            .iter()
            .map(|entity| Mutation {
                upsert: Entity {
                    key: entity.key.in_project(project_id),
                    properties: entity.properties.clone(),
                },
            })
            .collect();
        Self {
            mode: NON_TRANSACTIONAL,
            mutations,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitResponse {
    #[serde(default)]
    pub mutation_results: Vec<serde_json::Value>,
    #[serde(default)]
    pub index_updates: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunAggregationQueryRequest {
    pub partition_id: PartitionId,
    pub aggregation_query: AggregationQuery,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationQuery {
    pub nested_query: Query,
    pub aggregations: Vec<Aggregation>,
}

#[derive(Debug, Serialize)]
pub struct Query {
    pub kind: Vec<KindExpression>,
    pub projection: Vec<Projection>,
}

#[derive(Debug, Serialize)]
pub struct KindExpression {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct Projection {
    pub property: PropertyReference,
}

#[derive(Debug, Serialize)]
pub struct PropertyReference {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct Aggregation {
    pub alias: String,
    pub count: Count,
}

/// Count with no upper bound.
#[derive(Debug, Serialize)]
pub struct Count {}

impl RunAggregationQueryRequest {
    /// Keys-only `COUNT(*)` over one kind in one namespace.
    pub fn count(project_id: &str, kind: &str, namespace: &str) -> Self {
        Self {
            partition_id: PartitionId {
                project_id: project_id.to_string(),
                namespace_id: namespace.to_string(),
            },
            aggregation_query: AggregationQuery {
                nested_query: Query {
                    kind: vec![KindExpression {
                        name: kind.to_string(),
                    }],
                    projection: vec![Projection {
                        property: PropertyReference {
                            name: KEY_PROPERTY.to_string(),
                        },
                    }],
                },
                aggregations: vec![Aggregation {
                    alias: COUNT_ALIAS.to_string(),
                    count: Count {},
                }],
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RunAggregationQueryResponse {
    pub batch: AggregationResultBatch,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationResultBatch {
    #[serde(default)]
    pub aggregation_results: Vec<AggregationResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationResult {
    #[serde(default)]
    pub aggregate_properties: HashMap<String, Value>,
}

impl RunAggregationQueryResponse {
    /// The value of aggregation `alias` in the first result row.
    pub fn integer(&self, alias: &str) -> Option<i64> {
        self.batch
            .aggregation_results
            .first()
            .and_then(|row| row.aggregate_properties.get(alias))
            .and_then(Value::as_integer)
    }
}

/// Google API error envelope.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorStatus,
}

#[derive(Debug, Deserialize)]
pub struct ErrorStatus {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}
