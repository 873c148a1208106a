//! Individual value generators for each field kind.
//!
//! This module provides the generation logic for each [`FieldSpec`] variant.
//! Specs are validated when parsed, so every generator here is infallible.

pub mod image;
pub mod numeric;
pub mod text;

use rand::Rng;
use record_core::{FieldSpec, FloatSpec, ImageSpec, IntSpec, TextSpec, Value};

/// Trait for generating values.
pub trait ValueGenerator {
    /// Generate one value using the given RNG.
    fn generate<R: Rng>(&self, rng: &mut R) -> Value;
}

impl ValueGenerator for IntSpec {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        numeric::generate_int_range(rng, self.min(), self.max())
    }
}

impl ValueGenerator for FloatSpec {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        numeric::generate_float_range(rng, self.min(), self.max())
    }
}

impl ValueGenerator for TextSpec {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        text::generate_text(rng, self)
    }
}

impl ValueGenerator for ImageSpec {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        image::generate_image_url(rng, self.width(), self.height())
    }
}

impl ValueGenerator for FieldSpec {
    fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        match self {
            FieldSpec::Int(spec) => spec.generate(rng),
            FieldSpec::Float(spec) => spec.generate(rng),
            FieldSpec::Text(spec) => spec.generate(rng),
            FieldSpec::Image(spec) => spec.generate(rng),
        }
    }
}

/// Generate a value for the given field spec.
pub fn generate_value<R: Rng>(spec: &FieldSpec, rng: &mut R) -> Value {
    spec.generate(rng)
}
