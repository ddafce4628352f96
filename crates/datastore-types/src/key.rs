//! Entity keys.

use serde::{Deserialize, Serialize};

/// The partition an entity lives in: a project and an optional namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionId {
    /// Empty until the client assigns its own project.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace_id: String,
}

/// One `(kind, name)` step of a key path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathElement {
    pub kind: String,
    pub name: String,
}

/// A complete, name-based entity key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    pub partition_id: PartitionId,
    pub path: Vec<PathElement>,
}

impl Key {
    /// Build a root key from a kind, a name and a namespace.
    ///
    /// The project is left unset; the client fills in the project it is
    /// bound to when the key is sent.
    pub fn name_key(
        kind: impl Into<String>,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            partition_id: PartitionId {
                project_id: String::new(),
                namespace_id: namespace.into(),
            },
            path: vec![PathElement {
                kind: kind.into(),
                name: name.into(),
            }],
        }
    }

    /// Return a copy of this key bound to `project_id`, unless it already
    /// names a project.
    pub fn in_project(&self, project_id: &str) -> Self {
        let mut key = self.clone();
        if key.partition_id.project_id.is_empty() {
            key.partition_id.project_id = project_id.to_string();
        }
        key
    }

    pub fn namespace(&self) -> &str {
        &self.partition_id.namespace_id
    }

    /// Kind of the last path element.
    pub fn kind(&self) -> &str {
        self.path.last().map(|p| p.kind.as_str()).unwrap_or_default()
    }

    /// Name of the last path element.
    pub fn name(&self) -> &str {
        self.path.last().map(|p| p.name.as_str()).unwrap_or_default()
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}/{}", self.namespace(), self.kind(), self.name())
    }
}
