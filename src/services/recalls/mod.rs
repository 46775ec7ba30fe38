//! Recall lookup service
//!
//! Maps a manufacturer token (the first word of a decoded manufacturer name)
//! to the recall campaigns known for it. Backed by a static table.

mod service;
mod types;


pub use service::{RECALL_TABLE, RecallService};
pub use types::{RecallRecord, Severity};
