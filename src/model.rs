use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// An author record from `authors.json`. Only the id matters here;
/// any other fields in the record are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub id: String,
}

/// A commit record as it appears in `commits.json`, before validation.
/// Field presence is checked by [`crate::window::sort_commits`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawCommit {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub files: Option<Vec<String>>,
}

/// A validated commit. Immutable once built; every core stage reads it as-is.
#[derive(Debug, Clone)]
pub struct Commit {
    pub id: Option<serde_json::Value>,
    pub timestamp: i64,
    pub author_id: String,
    pub files: Vec<String>,
}

/// Undirected co-modification graph over authors: symmetric adjacency,
/// no self-loops, every known author present as a key. Ordered containers
/// keep the serialized form stable across runs.
pub type InteractionGraph = BTreeMap<String, BTreeSet<String>>;

/// One output record per window. Field names and the `YYYY-MM-DD` date
/// form match the existing on-disk format and must not change.
#[derive(Debug, Clone, Serialize)]
pub struct GraphRecord {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
    pub code_author_interaction: InteractionGraph,
}
