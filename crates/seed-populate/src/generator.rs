//! Synthetic record generation.

use chrono::{DateTime, Duration, Utc};
use datastore_types::{Entity, Key, Value};
use uuid::Uuid;

pub const CREATED_AT: &str = "created_at";
pub const EMAIL: &str = "email";
pub const UUID_VALUE: &str = "uuid_value";
pub const BOOLEAN_VALUE: &str = "boolean_value";

/// Every generated record is stamped this many days before generation.
pub const CREATED_AT_OFFSET_DAYS: i64 = 1;

/// Value of the boolean property on every generated record.
pub const BOOLEAN_FLAG: bool = true;

/// One seeded entity. The key is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    key: Key,
    created_at: DateTime<Utc>,
    email: String,
    uuid_value: String,
    boolean_value: bool,
}

impl Record {
    pub fn new(
        name: &str,
        email: impl Into<String>,
        kind: &str,
        namespace: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            key: Key::name_key(kind, name, namespace),
            created_at,
            email: email.into(),
            uuid_value: Uuid::new_v4().to_string(),
            boolean_value: BOOLEAN_FLAG,
        }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn uuid_value(&self) -> &str {
        &self.uuid_value
    }

    pub fn boolean_value(&self) -> bool {
        self.boolean_value
    }

    /// Datastore form of the record. Only `created_at` is indexed.
    pub fn to_entity(&self) -> Entity {
        Entity::new(self.key.clone())
            .with_property(CREATED_AT, Value::timestamp(self.created_at))
            .with_property(EMAIL, Value::string(&self.email).unindexed())
            .with_property(UUID_VALUE, Value::string(&self.uuid_value).unindexed())
            .with_property(BOOLEAN_VALUE, Value::boolean(self.boolean_value).unindexed())
    }
}

/// Build `count` records named `id1..id{count}` under `kind` and `namespace`.
pub fn generate_records(count: usize, kind: &str, namespace: &str) -> Vec<Record> {
    let created_at = Utc::now() - Duration::days(CREATED_AT_OFFSET_DAYS);

    (1..=count)
        .map(|index| {
            let name = format!("id{index}");
            let email = format!("{name}@email.com");
            Record::new(&name, email, kind, namespace, created_at)
        })
        .collect()
}
