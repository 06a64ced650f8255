//! Resource lookup argument types

use clap::Args;

use crate::client::models::{MatchMode, ResourceKind, ResourceQuery};

/// Positional resource reference plus matching policy.
#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    /// Resource name, or id:<ID> to look up by ID
    pub name: String,

    /// Match names containing NAME instead of exact (case-insensitive) names
    #[arg(long)]
    pub substring: bool,
}

impl LookupArgs {
    pub fn match_mode(&self) -> MatchMode {
        if self.substring {
            MatchMode::Substring
        } else {
            MatchMode::ExactCaseInsensitive
        }
    }

    pub fn query(&self, kind: ResourceKind) -> ResourceQuery {
        ResourceQuery::new(kind, self.name.clone()).match_mode(self.match_mode())
    }
}

/// Parse a `KEY=VALUE` pair.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{}'", s));
    }

    Ok((key.to_string(), value.to_string()))
}
