use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

use crate::core::endpoint::{Changes, Endpoint};
use crate::error::Error;

/// The contract an orchestrator drives: report what exists, apply a diff.
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &str;
    async fn list_endpoints(&self) -> Result<Vec<Endpoint>, Error>;
    async fn apply_changes(&self, changes: &Changes) -> Result<ApplyReport, Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    Create,
    Update,
    Delete,
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChangeAction::Create => "create",
            ChangeAction::Update => "update",
            ChangeAction::Delete => "delete",
        })
    }
}

/// One registrar operation, performed or (in dry-run) planned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedChange {
    pub action: ChangeAction,
    pub zone: String,
    /// Name relative to `zone`; empty for the apex.
    pub name: String,
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
    pub record_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    pub dry_run: bool,
    pub changes: Vec<PlannedChange>,
}
