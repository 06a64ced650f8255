//! Resource display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{or_dash, truncate_string};
use crate::client::models::{ResourceMatch, ResourceRecord};

/// Resource record display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ResourceDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    /// Integration (targets) or target (policies) the resource belongs to
    #[tabled(rename = "PARENT")]
    pub parent: String,

    #[tabled(rename = "TYPE")]
    pub resource_type: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<ResourceRecord> for ResourceDisplay {
    fn from(record: ResourceRecord) -> Self {
        let data = record.data.clone().unwrap_or_default();
        Self {
            name: record.display_name().to_string(),
            parent: or_dash(record.parent_id()),
            id: record.id,
            resource_type: or_dash(data.environment_type.as_deref()),
            description: data
                .description
                .map(|d| truncate_string(&d, 60))
                .unwrap_or_else(|| "--".to_string()),
        }
    }
}

/// Resolved resource display model (`get` by id or name, `ensure`).
#[derive(Debug, Clone, PartialEq, Eq, Tabled, Serialize)]
pub struct MatchDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,
}

impl From<ResourceMatch> for MatchDisplay {
    fn from(m: ResourceMatch) -> Self {
        Self {
            id: m.id,
            name: m.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::RecordData;

    #[test]
    fn test_resource_display_nested_data() {
        let record = ResourceRecord {
            id: "t-1".to_string(),
            name: None,
            data: Some(RecordData {
                name: Some("web".to_string()),
                environment_id: Some("env-9".to_string()),
                environment_type: Some("github".to_string()),
                ..Default::default()
            }),
        };

        let display = ResourceDisplay::from(record);

        assert_eq!(display.id, "t-1");
        assert_eq!(display.name, "web");
        assert_eq!(display.parent, "env-9");
        assert_eq!(display.resource_type, "github");
        assert_eq!(display.description, "--");
    }

    #[test]
    fn test_resource_display_top_level_name() {
        let record = ResourceRecord {
            id: "s-1".to_string(),
            name: Some("SAST".to_string()),
            data: None,
        };

        let display = ResourceDisplay::from(record);

        assert_eq!(display.name, "SAST");
        assert_eq!(display.parent, "--");
    }

    #[test]
    fn test_match_display() {
        let display = MatchDisplay::from(ResourceMatch::new("a-1", "shop"));
        assert_eq!(display.id, "a-1");
        assert_eq!(display.name, "shop");
    }
}
