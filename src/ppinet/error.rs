use thiserror::Error;

use crate::types::ProteinId;

pub type Result<T> = std::result::Result<T, PpinetError>;

/// Hard failures that abort the current query. Recoverable misses
/// (an id with no gene record, an orthogroup co-member outside both
/// subnetworks) are `Option` returns, not errors.
#[derive(Error, Debug)]
pub enum PpinetError {
    #[error("protein not found in the interaction network: {protein_id}")]
    UnknownProtein { protein_id: ProteinId },

    #[error("malformed record in {source_name} line {line}: {detail}")]
    MalformedRecord {
        source_name: String,
        line: u64,
        detail: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
