//! Resource models: kinds, records, lookup queries and create requests

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Prefix marking an explicit ID lookup instead of a name lookup
pub const ID_PREFIX: &str = "id:";

/// Resource collections the resolver knows how to look up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Target,
    Policy,
    Application,
    Integration,
    Scenario,
}

impl ResourceKind {
    /// API collection path (without base URL)
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Target => "/targets",
            ResourceKind::Policy => "/policies",
            ResourceKind::Application => "/applications",
            ResourceKind::Integration => "/environments",
            ResourceKind::Scenario => "/scenarios",
        }
    }

    /// CLI subcommand that manages this kind
    pub fn command(&self) -> &'static str {
        match self {
            ResourceKind::Target => "target",
            ResourceKind::Policy => "policy",
            ResourceKind::Application => "app",
            ResourceKind::Integration => "integration",
            ResourceKind::Scenario => "scenario",
        }
    }

    /// Body field that carries the parent resource ID on create
    pub fn parent_field(&self) -> Option<&'static str> {
        match self {
            ResourceKind::Target => Some("environmentId"),
            ResourceKind::Policy => Some("targetId"),
            ResourceKind::Application | ResourceKind::Integration | ResourceKind::Scenario => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResourceKind::Target => "Target",
            ResourceKind::Policy => "Policy",
            ResourceKind::Application => "Application",
            ResourceKind::Integration => "Integration",
            ResourceKind::Scenario => "Scenario",
        };
        f.write_str(label)
    }
}

/// How listed names are compared against the query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Whole name, ignoring case
    #[default]
    ExactCaseInsensitive,
    /// Name contains the query, ignoring case. "Foo" also matches "FooBar".
    Substring,
}

impl MatchMode {
    /// Check a candidate name against the query under this mode
    pub fn matches(&self, candidate: &str, query: &str) -> bool {
        let candidate = candidate.to_lowercase();
        let query = query.to_lowercase();
        match self {
            MatchMode::ExactCaseInsensitive => candidate == query,
            MatchMode::Substring => candidate.contains(&query),
        }
    }
}

/// How a query identifies its resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier<'a> {
    Name(&'a str),
    Id(&'a str),
}

/// A single lookup request, built per call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceQuery {
    pub kind: ResourceKind,
    pub name_or_id: String,
    pub match_mode: MatchMode,
}

impl ResourceQuery {
    /// Create a query using exact, case-insensitive matching.
    pub fn new(kind: ResourceKind, name_or_id: impl Into<String>) -> Self {
        Self {
            kind,
            name_or_id: name_or_id.into(),
            match_mode: MatchMode::default(),
        }
    }

    /// Set the match mode.
    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Split `id:<ID>` from a plain name.
    pub fn identifier(&self) -> Identifier<'_> {
        match self.name_or_id.strip_prefix(ID_PREFIX) {
            Some(id) => Identifier::Id(id.trim()),
            None => Identifier::Name(self.name_or_id.as_str()),
        }
    }
}

/// Resource record as returned by list/get/create endpoints.
///
/// Some collections put the name at the top level, others nest it under `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RecordData>,
}

/// Nested `data` block of a resource record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
}

impl ResourceRecord {
    /// Resource name, preferring `data.name`
    pub fn display_name(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|d| d.name.as_deref())
            .or(self.name.as_deref())
            .unwrap_or("")
    }

    /// Parent resource ID, if the record carries one
    pub fn parent_id(&self) -> Option<&str> {
        let data = self.data.as_ref()?;
        data.environment_id.as_deref().or(data.target_id.as_deref())
    }
}

/// Metadata element of a list response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    #[serde(default)]
    pub count: Option<usize>,

    #[serde(default)]
    pub total_count: Option<usize>,
}

impl ListMeta {
    /// Total number of matches on the server
    pub fn total(&self) -> Option<usize> {
        self.total_count.or(self.count)
    }
}

/// Resolved resource identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMatch {
    pub id: String,
    pub name: String,
}

impl ResourceMatch {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<&ResourceRecord> for ResourceMatch {
    fn from(record: &ResourceRecord) -> Self {
        Self::new(record.id.clone(), record.display_name())
    }
}

/// Fields for creating a resource when a lookup finds nothing
#[derive(Debug, Clone)]
pub struct CreateSpec {
    pub kind: ResourceKind,
    pub name: String,
    pub parent_id: Option<String>,
    pub attributes: Map<String, Value>,
}

impl CreateSpec {
    pub fn new(kind: ResourceKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            parent_id: None,
            attributes: Map::new(),
        }
    }

    /// Set the parent resource (integration for targets, target for policies).
    pub fn parent(mut self, id: impl Into<String>) -> Self {
        self.parent_id = Some(id.into());
        self
    }

    /// Add a body attribute.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// JSON body for the create call.
    ///
    /// `name` and the parent field always win over same-named attributes.
    pub fn to_body(&self) -> Value {
        let mut body = self.attributes.clone();
        body.insert("name".to_string(), Value::String(self.name.clone()));
        if let (Some(field), Some(parent)) = (self.kind.parent_field(), &self.parent_id) {
            body.insert(field.to_string(), Value::String(parent.clone()));
        }
        Value::Object(body)
    }
}
