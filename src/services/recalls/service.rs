//! Static recall lookup

use super::types::{RecallRecord, Severity};
use tracing::{debug, info};

/// Known recalls keyed by manufacturer token
pub const RECALL_TABLE: &[(&str, &[RecallRecord])] = &[
    (
        "Honda",
        &[RecallRecord {
            campaign_id: "HND-2023-001",
            issue: "Airbag inflator may rupture",
            severity: Severity::High,
        }],
    ),
    (
        "Ford",
        &[RecallRecord {
            campaign_id: "FRD-2022-014",
            issue: "Brake fluid leakage",
            severity: Severity::Medium,
        }],
    ),
];

/// Recall lookup over [`RECALL_TABLE`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RecallService;

impl RecallService {
    /// Create a new recall service
    pub fn new() -> Self {
        info!("Recall service initialized with {} manufacturers", RECALL_TABLE.len());
        Self
    }

    /// Recalls for `manufacturer`; exact, case-sensitive match
    ///
    /// Unknown manufacturers yield an empty slice.
    pub fn check_recalls(&self, manufacturer: &str) -> &'static [RecallRecord] {
        let recalls = RECALL_TABLE
            .iter()
            .find(|(token, _)| *token == manufacturer)
            .map(|(_, recalls)| *recalls)
            .unwrap_or(&[]);

        if recalls.is_empty() {
            debug!("No recalls found for manufacturer: {}", manufacturer);
        } else {
            info!(
                "Found {} recall(s) for manufacturer: {}",
                recalls.len(),
                manufacturer
            );
        }

        recalls
    }
}
