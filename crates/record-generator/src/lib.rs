//! Random record generator for record-forge.
//!
//! This crate provides the [`RecordGenerator`] which produces random records
//! shaped by a [`Model`](record_core::Model). Seed the generator for
//! reproducible output; without a seed it draws its seed from the OS.
//!
//! # Architecture
//!
//! ```text
//! Model (field -> FieldSpec)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ RecordGenerator  │
//! │                  │
//! │  - model         │
//! │  - volume        │
//! │  - rng (StdRng)  │
//! └────────┬─────────┘
//!          │
//!          ├──▶ Record            (fetch / fetch_all)
//!          │
//!          └──▶ ObjectMapper<T>   (fetch_obj / fetch_all_obj)
//! ```
//!
//! # Example
//!
//! ```rust
//! use record_generator::RecordGenerator;
//!
//! let mut generator = RecordGenerator::from_types(
//!     [("id", "i:1-10"), ("title", "t:4-6w"), ("image", "p:400*300")],
//!     5,
//! )
//! .unwrap();
//!
//! let records = generator.fetch_all();
//! assert_eq!(records.len(), 5);
//! assert_eq!(records[0].field_names(), vec!["id", "title", "image"]);
//! ```
//!
//! # Generators
//!
//! - `i` - Random integers in an inclusive range
//! - `f` - Random floats in a half-open range
//! - `t` - Pool words or capitalized pseudo sentences of 4 to 17 words
//! - `p` - `https://picsum.photos/{width}/{height}?image={id}` with `id` in `0..=1000`

pub mod generator;
pub mod generators;
pub mod mapping;

// Re-exports for convenience
pub use generator::{GeneratorError, RecordGenerator, DEFAULT_VOLUME};
pub use generators::{generate_value, ValueGenerator};
pub use mapping::{setter_name, MappingError, ObjectMapper, Setter, SetterTable, SetterTarget};
