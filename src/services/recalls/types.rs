//! Recall record types

use serde::Serialize;
use std::fmt;

/// Recall severity, serialized by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        };
        f.write_str(name)
    }
}

/// A single recall campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecallRecord {
    /// Campaign identifier, e.g. `HND-2023-001`
    pub campaign_id: &'static str,
    /// Short description of the defect
    pub issue: &'static str,
    pub severity: Severity,
}
