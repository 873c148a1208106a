//! Placeholder image URL generator.

use rand::Rng;
use record_core::Value;

/// Highest picture id requested from the placeholder service (inclusive).
pub const PICSUM_MAX_ID: u32 = 1000;

/// Generate `https://picsum.photos/{width}/{height}?image={id}`.
pub fn generate_image_url<R: Rng>(rng: &mut R, width: &str, height: &str) -> Value {
    let id = rng.random_range(0..=PICSUM_MAX_ID);
    Value::Text(format!("https://picsum.photos/{width}/{height}?image={id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_image_url() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let value = generate_image_url(&mut rng, "400", "300");
            let url = value.as_str().unwrap();
            let id = url
                .strip_prefix("https://picsum.photos/400/300?image=")
                .unwrap_or_else(|| panic!("Unexpected url {url}"));

            let id: u32 = id.parse().unwrap();
            assert!(id <= PICSUM_MAX_ID);
        }
    }

    #[test]
    fn test_zero_dimensions_are_copied_verbatim() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_image_url(&mut rng, "0", "0");
        assert!(value
            .as_str()
            .unwrap()
            .starts_with("https://picsum.photos/0/0?image="));

        let value = generate_image_url(&mut rng, "0400", "4294967296");
        assert!(value
            .as_str()
            .unwrap()
            .starts_with("https://picsum.photos/0400/4294967296?image="));
    }
}
