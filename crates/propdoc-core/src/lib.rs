//! # propdoc-core
//!
//! Output types shared across the propdoc crates.
//!
//! This crate provides the records produced by the extraction engine and
//! consumed by downstream documentation tooling:
//! - [`ComponentMetadata`] / [`PropMetadata`] per detected component
//! - Export and deprecation enums
//! - Batch report types (errors and statistics for a multi-file run)
//! - The per-file error handling policy

pub mod enums;
pub mod metadata;
pub mod report;

pub use enums::{ErrorHandling, ExportKind};
pub use metadata::{ComponentMetadata, Deprecation, PropMetadata};
pub use report::{ExtractError, ExtractReport, ExtractStats};
