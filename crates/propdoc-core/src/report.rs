//! Batch extraction report: collected metadata, per-file failures, counters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::metadata::ComponentMetadata;

/// Result of extracting a set of source files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractReport {
    pub metadata: Vec<ComponentMetadata>,
    pub errors: Vec<ExtractError>,
    pub stats: ExtractStats,
}

/// A file that could not be turned into metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractError {
    pub file_path: String,
    pub message: String,
    /// One-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// One-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractStats {
    /// Every input handed to the batch, accepted or not.
    pub files_scanned: u32,
    /// Inputs that parsed and went through the engine.
    pub files_processed: u32,
    pub components_found: u32,
    pub duration_ms: u64,
}
