//! Extraction settings (`[extract]` section).

use propdoc_core::ErrorHandling;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_extensions() -> Vec<String> {
    ["tsx", "jsx", "ts", "js"].map(String::from).to_vec()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractConfig {
    /// Rewrite prop examples into JSX usage strings (`<Button label="x" />`).
    #[serde(default)]
    pub usage_snippets: bool,

    /// What a batch run does with files that fail to parse.
    #[serde(default)]
    pub error_handling: ErrorHandling,

    /// File extensions (without the dot) handed to the engine.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            usage_snippets: false,
            error_handling: ErrorHandling::default(),
            extensions: default_extensions(),
        }
    }
}

impl ExtractConfig {
    /// Whether `path` has one of the configured extensions.
    #[must_use]
    pub fn accepts(&self, path: &str) -> bool {
        let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        let Some((_, ext)) = file_name.rsplit_once('.') else {
            return false;
        };
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Check invariants figment cannot express.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for an empty extension list or an
    /// extension written with its leading dot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "extract.extensions".into(),
                reason: "at least one extension is required".into(),
            });
        }
        if let Some(bad) = self
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.starts_with('.'))
        {
            return Err(ConfigError::InvalidValue {
                field: "extract.extensions".into(),
                reason: format!("'{bad}' must be a bare extension such as \"tsx\""),
            });
        }
        Ok(())
    }
}
