//! Core types for the record-forge generator.
//!
//! This crate provides the foundational types shared by the generator and
//! the command-line tool:
//!
//! - [`FieldSpec`] - Validated field type, parsed from a type string like `t:4-6w`
//! - [`Model`] - Ordered field declarations describing one record's shape
//! - [`Value`] / [`Record`] - Generated values, kept in model order
//! - [`ModelFile`] - Model plus settings loaded from YAML or JSON
//! - [`WORD_POOL`] - Corpus for all generated text
//!
//! # Architecture
//!
//! ```text
//! record-core (this crate)
//!    │
//!    └─── record-generator  (turns a Model into Records)
//!            │
//!            └─── record-forge  (CLI, output writers)
//! ```
//!
//! # Example
//!
//! ```rust
//! use record_core::{FieldSpec, Model};
//!
//! let model = Model::parse([("id", "i:1-100"), ("title", "t:4-6w")]).unwrap();
//! assert_eq!(model.field_names(), vec!["id", "title"]);
//!
//! let spec: FieldSpec = "p:400*300".parse().unwrap();
//! assert_eq!(spec.to_string(), "p:400*300");
//!
//! assert!(Model::parse([("id", "i:5-1")]).is_err());
//! ```

pub mod model;
pub mod model_file;
pub mod spec;
pub mod values;
pub mod words;

// Re-exports for convenience
pub use model::{Model, DEFAULT_MODEL};
pub use model_file::{ModelFile, ModelFileError};
pub use spec::{
    parse_type, Amount, CountRange, FieldSpec, FloatSpec, ImageSpec, IntSpec, SpecError,
    TextSpec, TextUnit, MAX_TEXT_AMOUNT,
};
pub use values::{Record, Value};
pub use words::{is_pool_word, WORD_POOL, WORD_POOL_SIZE};
