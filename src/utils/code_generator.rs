//! Short code generation and validation utilities.
//!
//! Provides cryptographically secure random code generation and validation
//! for custom user-provided codes.

use crate::domain::entities::MAX_CODE_LENGTH;
use crate::error::LinkError;
use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};
use std::sync::{Mutex, PoisonError};

/// Length of generated short codes.
pub const GENERATED_LENGTH: usize = 8;

/// Symbols generated codes are drawn from.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Characters that would break the `/r/{code}` path segment.
const FORBIDDEN_CODE_CHARS: &[char] = &['/', '?', '#'];

/// Source of candidate short codes.
///
/// Generators do not talk to storage and make no uniqueness promise; the
/// allocator retries on collision.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Draws [`GENERATED_LENGTH`] symbols independently and uniformly from
/// [`ALPHABET`].
///
/// The default instance uses [`StdRng`] seeded from the operating system, a
/// CSPRNG, so codes cannot be predicted from previously issued ones. Tests can
/// supply a seeded RNG through [`RandomCodeGenerator::from_rng`].
///
/// # Examples
///
/// ```ignore
/// let generator = RandomCodeGenerator::new();
/// let code = generator.generate();
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub struct RandomCodeGenerator<R = StdRng> {
    rng: Mutex<R>,
}

impl RandomCodeGenerator<StdRng> {
    /// Creates a generator backed by an OS-seeded [`StdRng`].
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }
}

impl Default for RandomCodeGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> RandomCodeGenerator<R> {
    /// Creates a generator that draws from the given RNG.
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl<R: RngCore + Send> CodeGenerator for RandomCodeGenerator<R> {
    fn generate(&self) -> String {
        // A panic while holding the lock cannot leave the RNG in an unusable state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        (0..GENERATED_LENGTH)
            .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
            .collect()
    }
}

/// Validates a trimmed, non-empty custom short code.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - No whitespace or control characters
/// - None of `/`, `?`, `#`
///
/// # Errors
///
/// Returns [`LinkError::InvalidCode`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), LinkError> {
    if code.is_empty() {
        return Err(LinkError::InvalidCode("code must not be empty".to_string()));
    }

    let length = code.chars().count();
    if length > MAX_CODE_LENGTH {
        return Err(LinkError::InvalidCode(format!(
            "code must be at most {MAX_CODE_LENGTH} characters, got {length}"
        )));
    }

    if let Some(c) = code
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || FORBIDDEN_CODE_CHARS.contains(c))
    {
        return Err(LinkError::InvalidCode(format!(
            "code contains forbidden character {c:?}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_62_unique_symbols() {
        let unique: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), 62);
        assert!(ALPHABET.iter().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = RandomCodeGenerator::new().generate();
        assert_eq!(code.len(), GENERATED_LENGTH);
    }

    #[test]
    fn test_generate_code_alphanumeric_characters() {
        let generator = RandomCodeGenerator::new();

        for _ in 0..200 {
            let code = generator.generate();
            assert_eq!(code.len(), 8);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let generator = RandomCodeGenerator::new();
        let codes: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_seeded_generators_are_deterministic() {
        let a = RandomCodeGenerator::from_rng(StdRng::seed_from_u64(42));
        let b = RandomCodeGenerator::from_rng(StdRng::seed_from_u64(42));

        for _ in 0..10 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = RandomCodeGenerator::from_rng(StdRng::seed_from_u64(1));
        let b = RandomCodeGenerator::from_rng(StdRng::seed_from_u64(2));

        let from_a: Vec<String> = (0..5).map(|_| a.generate()).collect();
        let from_b: Vec<String> = (0..5).map(|_| b.generate()).collect();
        assert_ne!(from_a, from_b);
    }

    #[test]
    fn test_generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomCodeGenerator>();
    }

    #[test]
    fn test_validate_simple_code() {
        assert!(validate_custom_code("mycode").is_ok());
        assert!(validate_custom_code("x").is_ok());
        assert!(validate_custom_code("My-Code_2024.v1").is_ok());
    }

    #[test]
    fn test_validate_maximum_length() {
        assert!(validate_custom_code(&"a".repeat(64)).is_ok());

        let err = validate_custom_code(&"a".repeat(65)).unwrap_err();
        assert!(matches!(err, LinkError::InvalidCode(_)));
        assert!(err.to_string().contains("at most 64"));
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        assert!(validate_custom_code(&"é".repeat(64)).is_ok());
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(validate_custom_code("").is_err());
    }

    #[test]
    fn test_validate_interior_whitespace() {
        assert!(validate_custom_code("my code").is_err());
        assert!(validate_custom_code("my\tcode").is_err());
    }

    #[test]
    fn test_validate_path_breaking_characters() {
        for code in ["a/b", "what?", "frag#ment"] {
            assert!(
                validate_custom_code(code).is_err(),
                "'{code}' should be invalid"
            );
        }
    }
}
