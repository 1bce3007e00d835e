//! Password generation.
//!
//! Two strategies are supported:
//! - **Characters**: `length` symbols drawn uniformly, with replacement, from
//!   ASCII letters and digits, optionally extended with ASCII punctuation.
//! - **Passphrase**: three dictionary words, each capitalized, joined with no
//!   separator.
//!
//! The minimum-length check runs before the strategy is chosen, so an invalid
//! length rejects passphrase requests as well. Character passwords are also
//! capped at a configured maximum, and the buffer is reserved fallibly so an
//! oversized request fails on its own instead of aborting the process.
//! Randomness is supplied by the caller.

mod words;

pub use words::{WordList, WordListError, WordSource};

use std::sync::Arc;

use rand::Rng;
use serde_json::{Map, Value};

use crate::config::{DEFAULT_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, PASSPHRASE_WORD_COUNT};

/// ASCII letters followed by digits
const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// The 32 printable ASCII punctuation characters
pub const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    #[error("Password length must be an integer greater than 8.")]
    Validation,

    #[error("Password length must not exceed {0}.")]
    TooLong(usize),
}

/// Options accepted by [`PasswordGenerator::generate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    pub allow_special_chars: bool,
    pub use_passphrase: bool,
    pub length: i64,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            allow_special_chars: false,
            use_passphrase: false,
            length: DEFAULT_PASSWORD_LENGTH,
        }
    }
}

impl PasswordOptions {
    /// Build options from a JSON request object.
    ///
    /// Missing keys take their defaults and unknown keys are ignored. A
    /// `length` that is present but not an integer fails validation; integers
    /// beyond `i64::MAX` saturate so they hit the maximum-length check.
    pub fn from_params(params: &Map<String, Value>) -> Result<Self, PasswordError> {
        let mut options = Self::default();

        if let Some(value) = params.get("allow_special_chars") {
            options.allow_special_chars = truthy(value);
        }
        if let Some(value) = params.get("use_passphrase") {
            options.use_passphrase = truthy(value);
        }
        if let Some(value) = params.get("length") {
            options.length = value
                .as_i64()
                .or_else(|| value.as_u64().map(|_| i64::MAX))
                .ok_or(PasswordError::Validation)?;
        }

        Ok(options)
    }
}

/// JSON truthiness: null, false, zero, and empty strings/arrays/objects are false
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Stateless password generator backed by a word source for passphrases.
#[derive(Clone)]
pub struct PasswordGenerator {
    words: Arc<dyn WordSource>,
    max_length: usize,
}

impl PasswordGenerator {
    pub fn new(words: Arc<dyn WordSource>, max_length: usize) -> Self {
        Self { words, max_length }
    }

    /// Generate a password according to `options`.
    pub fn generate<R: Rng>(
        &self,
        options: &PasswordOptions,
        rng: &mut R,
    ) -> Result<String, PasswordError> {
        if options.length < MIN_PASSWORD_LENGTH {
            return Err(PasswordError::Validation);
        }

        if options.use_passphrase {
            return Ok(self.passphrase(rng));
        }

        let too_long = PasswordError::TooLong(self.max_length);
        let length = usize::try_from(options.length).map_err(|_| too_long.clone())?;
        if length > self.max_length {
            return Err(too_long);
        }

        let mut password = String::new();
        password
            .try_reserve_exact(length)
            .map_err(|_| too_long.clone())?;

        let charset = allowed_chars(options.allow_special_chars);
        password.extend(
            (0..length).map(|_| charset[rng.random_range(0..charset.len())] as char),
        );
        Ok(password)
    }

    fn passphrase<R: Rng>(&self, rng: &mut R) -> String {
        (0..PASSPHRASE_WORD_COUNT)
            .map(|_| capitalize(self.words.random_word(rng)))
            .collect()
    }
}

/// The pool of symbols character passwords are sampled from
pub fn allowed_chars(allow_special_chars: bool) -> Vec<u8> {
    let mut charset = ALPHANUMERIC.to_vec();
    if allow_special_chars {
        charset.extend_from_slice(PUNCTUATION);
    }
    charset
}

/// Uppercase the first character and lowercase the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn generator() -> PasswordGenerator {
        let words = WordList::new(vec!["apple".into(), "BANANA".into(), "cherry".into()]).unwrap();
        PasswordGenerator::new(Arc::new(words), 1024)
    }

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn options(length: i64) -> PasswordOptions {
        PasswordOptions {
            length,
            ..PasswordOptions::default()
        }
    }

    #[test]
    fn test_default_password_is_eight_alphanumerics() {
        let mut rng = StdRng::seed_from_u64(1);
        let password = generator()
            .generate(&PasswordOptions::default(), &mut rng)
            .unwrap();
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_lengths_are_exact_and_alphanumeric() {
        let mut rng = StdRng::seed_from_u64(7);
        let generator = generator();
        for length in [8, 9, 16, 64, 257] {
            let password = generator.generate(&options(length), &mut rng).unwrap();
            assert_eq!(password.chars().count(), length as usize);
            assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_length_boundary_is_inclusive() {
        let mut rng = StdRng::seed_from_u64(2);
        assert!(generator().generate(&options(8), &mut rng).is_ok());
        assert_eq!(
            generator().generate(&options(7), &mut rng),
            Err(PasswordError::Validation)
        );
    }

    #[test]
    fn test_negative_and_zero_lengths_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        for length in [0, -1, i64::MIN] {
            assert_eq!(
                generator().generate(&options(length), &mut rng),
                Err(PasswordError::Validation)
            );
        }
    }

    #[test]
    fn test_length_above_maximum_rejected() {
        let mut rng = StdRng::seed_from_u64(8);
        let generator = generator();
        assert_eq!(generator.generate(&options(1024), &mut rng).unwrap().len(), 1024);
        assert_eq!(
            generator.generate(&options(1025), &mut rng),
            Err(PasswordError::TooLong(1024))
        );
        assert_eq!(
            generator.generate(&options(i64::MAX), &mut rng),
            Err(PasswordError::TooLong(1024))
        );
    }

    #[test]
    fn test_unallocatable_length_is_an_error() {
        let words = WordList::new(vec!["apple".into()]).unwrap();
        let unbounded = PasswordGenerator::new(Arc::new(words), usize::MAX);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            unbounded.generate(&options(i64::MAX), &mut rng),
            Err(PasswordError::TooLong(usize::MAX))
        );
    }

    #[test]
    fn test_passphrase_ignores_maximum_length() {
        let mut rng = StdRng::seed_from_u64(9);
        let opts = PasswordOptions {
            use_passphrase: true,
            length: i64::MAX,
            ..PasswordOptions::default()
        };
        assert!(generator().generate(&opts, &mut rng).is_ok());
    }

    #[test]
    fn test_validation_message() {
        assert_eq!(
            PasswordError::Validation.to_string(),
            "Password length must be an integer greater than 8."
        );
    }

    #[test]
    fn test_special_chars_drawn_from_extended_set() {
        let mut rng = StdRng::seed_from_u64(4);
        let opts = PasswordOptions {
            allow_special_chars: true,
            length: 20,
            ..PasswordOptions::default()
        };
        let generator = generator();
        let charset = allowed_chars(true);

        let mut saw_punctuation = false;
        for _ in 0..50 {
            let password = generator.generate(&opts, &mut rng).unwrap();
            assert_eq!(password.len(), 20);
            assert!(password.bytes().all(|b| charset.contains(&b)));
            saw_punctuation |= password.bytes().any(|b| PUNCTUATION.contains(&b));
        }
        assert!(saw_punctuation);
    }

    #[test]
    fn test_allowed_chars_sizes() {
        assert_eq!(allowed_chars(false).len(), 62);
        assert_eq!(allowed_chars(true).len(), 94);
        assert_eq!(PUNCTUATION.len(), 32);
    }

    #[test]
    fn test_same_seed_same_password() {
        let generator = generator();
        let a = generator
            .generate(&options(32), &mut StdRng::seed_from_u64(99))
            .unwrap();
        let b = generator
            .generate(&options(32), &mut StdRng::seed_from_u64(99))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_passphrase_is_three_capitalized_words() {
        let mut rng = StdRng::seed_from_u64(5);
        let opts = PasswordOptions {
            use_passphrase: true,
            allow_special_chars: true,
            length: 100,
        };
        let generator = generator();
        for _ in 0..20 {
            let passphrase = generator.generate(&opts, &mut rng).unwrap();
            assert!(is_three_words(&passphrase), "unexpected passphrase {passphrase}");
        }
    }

    fn is_three_words(passphrase: &str) -> bool {
        let mut rest = passphrase;
        for _ in 0..3 {
            match ["Apple", "Banana", "Cherry"]
                .iter()
                .find(|word| rest.starts_with(*word))
            {
                Some(word) => rest = &rest[word.len()..],
                None => return false,
            }
        }
        rest.is_empty()
    }

    #[test]
    fn test_passphrase_still_validates_length() {
        let mut rng = StdRng::seed_from_u64(6);
        let opts = PasswordOptions {
            use_passphrase: true,
            length: 3,
            ..PasswordOptions::default()
        };
        assert_eq!(
            generator().generate(&opts, &mut rng),
            Err(PasswordError::Validation)
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("apple"), "Apple");
        assert_eq!(capitalize("bANANA"), "Banana");
        assert_eq!(capitalize("é"), "É");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_from_params_defaults() {
        let opts = PasswordOptions::from_params(&Map::new()).unwrap();
        assert_eq!(opts, PasswordOptions::default());
    }

    #[test]
    fn test_from_params_reads_all_fields_and_ignores_unknown() {
        let opts = PasswordOptions::from_params(&params(json!({
            "allow_special_chars": true,
            "use_passphrase": false,
            "length": 12,
            "flavour": "mint"
        })))
        .unwrap();
        assert!(opts.allow_special_chars);
        assert!(!opts.use_passphrase);
        assert_eq!(opts.length, 12);
    }

    #[test]
    fn test_from_params_rejects_non_integer_length() {
        for length in [json!(8.5), json!("12"), json!(true), json!(null), json!([8])] {
            assert_eq!(
                PasswordOptions::from_params(&params(json!({ "length": length }))),
                Err(PasswordError::Validation)
            );
        }
    }

    #[test]
    fn test_from_params_saturates_huge_integers() {
        let opts = PasswordOptions::from_params(&params(json!({ "length": u64::MAX }))).unwrap();
        assert_eq!(opts.length, i64::MAX);
        assert_eq!(
            generator().generate(&opts, &mut StdRng::seed_from_u64(10)),
            Err(PasswordError::TooLong(1024))
        );
    }

    #[test]
    fn test_from_params_truthiness() {
        let opts = PasswordOptions::from_params(&params(json!({
            "allow_special_chars": 1,
            "use_passphrase": ""
        })))
        .unwrap();
        assert!(opts.allow_special_chars);
        assert!(!opts.use_passphrase);

        let opts =
            PasswordOptions::from_params(&params(json!({ "use_passphrase": null }))).unwrap();
        assert!(!opts.use_passphrase);
    }
}
