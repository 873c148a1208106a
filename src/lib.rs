//! record-forge library
//!
//! Generates random records from compact field type declarations, standing in
//! for a real data source during development and testing.
//!
//! # Crates
//!
//! - `record_core` - Type string parser, models, records and the word pool
//! - `record_generator` - Value generators, record assembly and object mapping
//!
//! This crate adds what the command-line tool needs on top: configuration
//! resolution ([`config`]), record writers ([`output`]) and model reports
//! ([`check`]).
//!
//! # CLI Usage
//!
//! ```bash
//! # 20 records of the default model as a JSON array
//! record-forge generate
//!
//! # Reproducible JSON Lines from a model file
//! record-forge generate --model model.yaml --seed 42 --format jsonl -o out.jsonl
//!
//! # Inline fields
//! record-forge generate --field id=i:1-100 --field title=t:4-6w -n 5
//!
//! # Validate a model and show setter names
//! record-forge check --model model.yaml
//! ```

pub mod check;
pub mod config;
pub mod output;

// Re-export the core crates for convenience
pub use record_core;
pub use record_generator;

pub use config::{GenerateOpts, ModelOpts, ResolvedModel};
pub use output::{write_records, OutputFormat, OutputMetrics};
