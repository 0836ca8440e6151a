//! Parser error types for propdoc-parser.

use propdoc_core::ExtractError;

/// Errors raised at the parse/batch boundary.
///
/// The extraction engine itself never fails; every partial-information case
/// degrades to a defined output. Only turning text into a tree can fail.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed for {path} at {line}:{column}: {message}")]
    ParseFailed {
        path: String,
        /// One-based.
        line: u32,
        /// One-based.
        column: u32,
        message: String,
    },

    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("Extraction aborted at {path}: {source}")]
    Batch {
        path: String,
        #[source]
        source: Box<ParserError>,
    },
}

impl ParserError {
    /// Convert into the report record collected by a batch run.
    #[must_use]
    pub fn to_extract_error(&self, file_path: &str) -> ExtractError {
        match self {
            Self::ParseFailed {
                line,
                column,
                message,
                ..
            } => ExtractError {
                file_path: file_path.to_string(),
                message: message.clone(),
                line: Some(*line),
                column: Some(*column),
            },
            Self::UnsupportedLanguage(_) => ExtractError {
                file_path: file_path.to_string(),
                message: self.to_string(),
                line: None,
                column: None,
            },
            Self::Batch { source, .. } => source.to_extract_error(file_path),
        }
    }
}
