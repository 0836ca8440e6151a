//! Enums shared by the metadata records and the batch configuration.
//!
//! All enums serialize as lowercase strings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ExportKind
// ---------------------------------------------------------------------------

/// How a component leaves its module.
///
/// Components that are not exported at all are reported as `Named`; only a
/// default export (direct or re-exported) flips the kind.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    #[default]
    Named,
    Default,
}

impl ExportKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Named => "named",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ErrorHandling
// ---------------------------------------------------------------------------

/// What a batch run does when a single file cannot be parsed.
///
/// ```text
/// collect → record the failure, keep going
/// throw   → abort the batch on the first failure
/// ignore  → drop the failure silently
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ErrorHandling {
    #[default]
    Collect,
    Throw,
    Ignore,
}

impl ErrorHandling {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Collect => "collect",
            Self::Throw => "throw",
            Self::Ignore => "ignore",
        }
    }
}

impl fmt::Display for ErrorHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_kind_display_matches_serde() {
        assert_eq!(ExportKind::Named.to_string(), "named");
        assert_eq!(ExportKind::Default.to_string(), "default");
    }

    #[test]
    fn error_handling_defaults_to_collect() {
        assert_eq!(ErrorHandling::default(), ErrorHandling::Collect);
        assert_eq!(ErrorHandling::Ignore.as_str(), "ignore");
    }
}
