//! Pseudo-natural-language text generator.
//!
//! Words are drawn uniformly, with replacement, from the fixed word pool.
//! Sentences hold 4 to 17 words, start with an upper-case letter and end
//! with a period.

use rand::Rng;
use record_core::{Amount, TextSpec, TextUnit, Value, WORD_POOL};
use std::ops::RangeInclusive;

/// Number of words in each generated sentence (inclusive).
pub const SENTENCE_WORDS: RangeInclusive<usize> = 4..=17;

/// Generate words or sentences according to the spec.
pub fn generate_text<R: Rng>(rng: &mut R, spec: &TextSpec) -> Value {
    let amount = resolve_amount(rng, spec.amount);
    let text = match spec.unit {
        TextUnit::Words => generate_words(rng, amount),
        TextUnit::Sentences => generate_sentences(rng, amount),
    };
    Value::Text(text)
}

/// Pick the concrete count: the fixed number, or a uniform draw from the range.
fn resolve_amount<R: Rng>(rng: &mut R, amount: Amount) -> usize {
    match amount {
        Amount::Fixed(n) => n,
        Amount::Range(range) => rng.random_range(range.min()..=range.max()),
    }
}

/// `count` pool words joined by single spaces, lowercase and unpunctuated.
pub fn generate_words<R: Rng>(rng: &mut R, count: usize) -> String {
    let mut words = Vec::with_capacity(count);
    for _ in 0..count {
        words.push(WORD_POOL[rng.random_range(0..WORD_POOL.len())]);
    }
    words.join(" ")
}

/// `count` sentences joined by single spaces.
pub fn generate_sentences<R: Rng>(rng: &mut R, count: usize) -> String {
    let mut sentences = Vec::with_capacity(count);
    for _ in 0..count {
        let length = rng.random_range(SENTENCE_WORDS);
        let mut sentence = capitalize_first(&generate_words(rng, length));
        sentence.push('.');
        sentences.push(sentence);
    }
    sentences.join(" ")
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use record_core::{is_pool_word, CountRange};

    fn words_spec(amount: Amount) -> TextSpec {
        TextSpec {
            unit: TextUnit::Words,
            amount,
        }
    }

    #[test]
    fn test_fixed_words() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = generate_text(&mut rng, &words_spec(Amount::Fixed(5)));
            let text = value.as_str().unwrap();
            let tokens: Vec<&str> = text.split_whitespace().collect();

            assert_eq!(tokens.len(), 5);
            assert!(tokens.iter().all(|t| is_pool_word(t)), "{text}");
            assert!(!text.contains("  "));
            assert!(!text.ends_with('.'));
        }
    }

    #[test]
    fn test_word_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let spec = words_spec(Amount::Range(CountRange::new(4, 6).unwrap()));
        let mut seen = [false; 3];

        for _ in 0..1000 {
            let value = generate_text(&mut rng, &spec);
            let count = value.as_str().unwrap().split_whitespace().count();
            assert!((4..=6).contains(&count));
            seen[count - 4] = true;
        }

        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_zero_words_is_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_text(&mut rng, &words_spec(Amount::Fixed(0)));
        assert_eq!(value, Value::Text(String::new()));
    }

    #[test]
    fn test_fixed_sentences() {
        let mut rng = StdRng::seed_from_u64(42);
        let spec = TextSpec {
            unit: TextUnit::Sentences,
            amount: Amount::Fixed(3),
        };

        for _ in 0..100 {
            let value = generate_text(&mut rng, &spec);
            let text = value.as_str().unwrap();
            assert!(text.ends_with('.'));

            let sentences: Vec<&str> = text.split(". ").collect();
            assert_eq!(sentences.len(), 3, "{text}");

            for sentence in sentences {
                let sentence = sentence.trim_end_matches('.');
                let first = sentence.chars().next().unwrap();
                assert!(first.is_uppercase(), "{sentence}");

                let words: Vec<&str> = sentence.split(' ').collect();
                assert!(SENTENCE_WORDS.contains(&words.len()), "{sentence}");
                assert!(is_pool_word(&words[0].to_lowercase()));
                assert!(words[1..].iter().all(|w| is_pool_word(w)));
            }
        }
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("bacon ipsum"), "Bacon ipsum");
        assert_eq!(capitalize_first("t-bone"), "T-bone");
        assert_eq!(capitalize_first(""), "");
    }
}
