//! # propdoc-parser
//!
//! ast-grep-based component metadata extraction for TSX/React sources.
//!
//! Given one parsed file, the engine finds every UI component declared in
//! it and describes its props:
//! - **Component detection**: upper-case name + a return path that yields
//!   markup, through `memo` / `forwardRef` wrappers and default exports
//! - **Props**: derived from the first parameter's destructuring pattern and
//!   type annotation, with file-local aliases and interfaces resolved
//! - **Types and defaults**: rendered as canonical display strings
//! - **Examples**: deterministic representative values per prop
//! - **Documentation**: `JSDoc` blocks attached to components and props
//!
//! The engine itself is infallible and free of I/O. [`extract_source`] and
//! [`extract_sources`] wrap it with parsing, syntax-error detection and the
//! configured per-file error policy.

pub mod batch;
pub mod error;
pub mod examples;
pub mod extract;
pub mod jsdoc;
pub mod parser;
pub mod props;
pub mod registry;
pub mod serialize;
pub mod syntax;

pub use batch::{SourceFile, extract_source, extract_sources};
pub use error::ParserError;
pub use extract::extract;
pub use jsdoc::ParsedComment;
pub use parser::{AstTree, detect_language, ensure_parsed, parse_source};
pub use props::{PropsExtraction, extract_props};
pub use registry::TypeRegistry;
pub use serialize::{serialize_type, serialize_type_or_any, serialize_value};
