//! Numeric value generators.

use rand::Rng;
use record_core::Value;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> Value {
    Value::Int(rng.random_range(min..=max))
}

/// Generate a random float in `[min, max)`.
///
/// A degenerate range (`min == max`) always yields `min`.
pub fn generate_float_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> Value {
    if min >= max {
        return Value::Float(min);
    }
    Value::Float(rng.random_range(min..max))
}
