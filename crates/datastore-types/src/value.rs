//! Property values.
//!
//! Datastore encodes a value as a JSON object holding exactly one
//! `<type>Value` member plus optional metadata such as
//! `excludeFromIndexes`. 64-bit integers travel as decimal strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The typed payload of a [`Value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueKind {
    #[serde(with = "rfc3339")]
    TimestampValue(DateTime<Utc>),
    StringValue(String),
    BooleanValue(bool),
    #[serde(with = "int64")]
    IntegerValue(i64),
}

/// A property value together with its indexing setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Value {
    #[serde(flatten)]
    pub kind: ValueKind,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub exclude_from_indexes: bool,
}

impl Value {
    fn indexed(kind: ValueKind) -> Self {
        Self {
            kind,
            exclude_from_indexes: false,
        }
    }

    pub fn timestamp(value: DateTime<Utc>) -> Self {
        Self::indexed(ValueKind::TimestampValue(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::indexed(ValueKind::StringValue(value.into()))
    }

    pub fn boolean(value: bool) -> Self {
        Self::indexed(ValueKind::BooleanValue(value))
    }

    pub fn integer(value: i64) -> Self {
        Self::indexed(ValueKind::IntegerValue(value))
    }

    /// Mark this value as excluded from built-in indexes.
    pub fn unindexed(mut self) -> Self {
        self.exclude_from_indexes = true;
        self
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self.kind {
            ValueKind::IntegerValue(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            ValueKind::StringValue(v) => Some(v),
            _ => None,
        }
    }
}

/// RFC 3339 in UTC with microsecond precision, the resolution Datastore
/// stores timestamps at.
mod rfc3339 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Micros, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

mod int64 {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<i64>().map_err(serde::de::Error::custom)
    }
}
