//! Parse-and-extract boundary for single sources and batches.
//!
//! The engine never fails; this layer is where parse failures surface and
//! where the configured [`ErrorHandling`] policy decides what happens to
//! them.

use std::time::Instant;

use propdoc_config::ExtractConfig;
use propdoc_core::{ComponentMetadata, ErrorHandling, ExtractReport};
use serde::{Deserialize, Serialize};

use crate::error::ParserError;
use crate::extract;
use crate::parser::{detect_language, ensure_parsed, parse_source};

/// One caller-supplied input. Reading it from disk is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
}

impl SourceFile {
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Parse `source` and extract its components.
///
/// # Errors
/// - `ParserError::UnsupportedLanguage` when the extension maps to no grammar
/// - `ParserError::ParseFailed` when the tree contains syntax errors
pub fn extract_source(
    path: &str,
    source: &str,
    config: &ExtractConfig,
) -> Result<Vec<ComponentMetadata>, ParserError> {
    let lang =
        detect_language(path).ok_or_else(|| ParserError::UnsupportedLanguage(path.to_string()))?;
    let tree = parse_source(source, lang);
    ensure_parsed(&tree, path)?;
    Ok(extract::extract(&tree, lang, path, config))
}

/// Extract every accepted input in order.
///
/// Inputs whose extension is not configured are counted as scanned and
/// skipped. Per-file failures follow `config.error_handling`.
///
/// # Errors
/// Returns `ParserError::Batch` for the first failing file under
/// [`ErrorHandling::Throw`]; the other policies never fail.
pub fn extract_sources(
    inputs: &[SourceFile],
    config: &ExtractConfig,
) -> Result<ExtractReport, ParserError> {
    let start = Instant::now();
    let mut report = ExtractReport::default();

    for input in inputs {
        report.stats.files_scanned += 1;
        if !config.accepts(&input.path) {
            tracing::trace!(path = %input.path, "skipped: extension not configured");
            continue;
        }

        match extract_source(&input.path, &input.content, config) {
            Ok(components) => {
                report.stats.files_processed += 1;
                report.stats.components_found +=
                    u32::try_from(components.len()).unwrap_or(u32::MAX);
                report.metadata.extend(components);
            }
            Err(err) => match config.error_handling {
                ErrorHandling::Throw => {
                    return Err(ParserError::Batch {
                        path: input.path.clone(),
                        source: Box::new(err),
                    });
                }
                ErrorHandling::Collect => {
                    tracing::warn!(path = %input.path, error = %err, "extraction failed");
                    report.errors.push(err.to_extract_error(&input.path));
                }
                ErrorHandling::Ignore => {
                    tracing::warn!(path = %input.path, error = %err, "extraction failed, ignored");
                }
            },
        }
    }

    report.stats.duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::debug!(
        scanned = report.stats.files_scanned,
        processed = report.stats.files_processed,
        components = report.stats.components_found,
        errors = report.errors.len(),
        "batch extraction finished"
    );
    Ok(report)
}
