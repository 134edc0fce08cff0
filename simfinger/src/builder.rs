//! Construction of fingerprints from token sequences.
use hashbrown::HashMap;

use crate::digest::HashAlgorithm;
use crate::errors::{Result, SimfingerError};
use crate::fingerprint::{Fingerprint, MAX_WIDTH};
use crate::tokenize;

/// Builder of [`Fingerprint`]s from token sequences or raw text.
///
/// Defaults to a 64-bit width and SHA-1 token digests. The builder is
/// reusable: fingerprints compared against each other must come from the
/// same configuration.
///
/// ```
/// use simfinger::FingerprintBuilder;
///
/// let builder = FingerprintBuilder::new().width(32);
/// let a = builder.build_from_tokens(["hi", "how", "are", "you"]).unwrap();
/// let b = builder.build_from_tokens(["hi", "how", "are", "you", "darling"]).unwrap();
/// assert_eq!(a.distsim(&b), 96.875);
/// ```
pub struct FingerprintBuilder {
    width: usize,
    algorithm: HashAlgorithm,
    weights: HashMap<Vec<u8>, i64>,
}

impl FingerprintBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            width: 64,
            algorithm: HashAlgorithm::Sha1,
            weights: HashMap::new(),
        }
    }

    /// Sets the fingerprint width in bits (valid range `1..=128`).
    ///
    /// The width is validated when building; more bits are more sensitive
    /// but cost proportionally more accumulation work.
    pub const fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the hash algorithm used to digest each token.
    pub const fn algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Resolves and sets the hash algorithm from its name.
    ///
    /// An unsupported name is a configuration error.
    pub fn algorithm_name(self, name: &str) -> Result<Self> {
        Ok(self.algorithm(HashAlgorithm::from_name(name)?))
    }

    /// Assigns a weight to every occurrence of a token.
    ///
    /// Tokens without an assigned weight count 1 per occurrence. Weighting
    /// scales each token's contribution to the per-bit accumulators without
    /// changing the accumulation itself: weight 2 is equivalent to the
    /// token appearing twice.
    pub fn token_weight<T>(mut self, token: T, weight: i64) -> Self
    where
        T: AsRef<[u8]>,
    {
        self.weights.insert(token.as_ref().to_vec(), weight);
        self
    }

    /// Assigns weights to tokens in bulk. See [`FingerprintBuilder::token_weight`].
    pub fn token_weights<I, T>(mut self, weights: I) -> Self
    where
        I: IntoIterator<Item = (T, i64)>,
        T: AsRef<[u8]>,
    {
        for (token, weight) in weights {
            self.weights.insert(token.as_ref().to_vec(), weight);
        }
        self
    }

    /// Builds a fingerprint from a token sequence.
    ///
    /// Each token is digested with the configured algorithm, and each digest
    /// bit below the fingerprint width adds the token's weight to (bit set)
    /// or subtracts it from (bit clear) a per-position accumulator. Bit `i`
    /// of the result is set iff accumulator `i` ends `>= 0`.
    ///
    /// An empty sequence is valid: every accumulator stays 0, so the `>= 0`
    /// tie-break sets every bit and the fingerprint is `2^width - 1`.
    ///
    /// # Errors
    ///
    /// A width outside `1..=128`.
    pub fn build_from_tokens<I, T>(&self, tokens: I) -> Result<Fingerprint>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        if self.width == 0 || self.width > MAX_WIDTH {
            return Err(SimfingerError::configuration(
                "fingerprint width must be in 1..=128 bits",
            ));
        }
        let mut v = vec![0i64; self.width];
        let mut token_count = 0;
        for token in tokens {
            let token = token.as_ref();
            let weight = self.weights.get(token).copied().unwrap_or(1);
            let digest = self.algorithm.digest(token);
            for (i, acc) in v.iter_mut().enumerate() {
                if digest.bit(i) {
                    *acc += weight;
                } else {
                    *acc -= weight;
                }
            }
            token_count += 1;
        }
        let mut value = 0;
        for (i, &acc) in v.iter().enumerate() {
            if acc >= 0 {
                value |= 1u128 << i;
            }
        }
        Ok(Fingerprint::from_tokens(value, self.width, token_count))
    }

    /// Builds a fingerprint from raw text.
    ///
    /// The text is split on runs of ASCII whitespace and the resulting
    /// tokens are fed to [`FingerprintBuilder::build_from_tokens`]. Callers
    /// with their own tokenization should call that method directly.
    pub fn build_from_text<S>(&self, text: S) -> Result<Fingerprint>
    where
        S: AsRef<str>,
    {
        self.build_from_tokens(tokenize::whitespace_tokens(text.as_ref()))
    }
}

impl Default for FingerprintBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand_xoshiro::rand_core::{RngCore, SeedableRng};
    use rand_xoshiro::SplitMix64;

    use super::*;

    #[test]
    fn test_determinism() {
        let builder = FingerprintBuilder::new();
        let a = builder.build_from_tokens(["hi", "how", "are", "you"]).unwrap();
        let b = builder.build_from_tokens(["hi", "how", "are", "you"]).unwrap();
        assert_eq!(a.value(), b.value());
        assert_eq!(a.distance(&b), 0);
    }

    #[test]
    fn test_pinned_sha1_w32() {
        let builder = FingerprintBuilder::new().width(32);
        let a = builder.build_from_tokens(["hi", "how", "are", "you"]).unwrap();
        let b = builder
            .build_from_tokens(["hi", "how", "are", "you", "darling"])
            .unwrap();

        assert_eq!(a.value(), 0xbbdc3f52);
        assert_eq!(b.value(), 0xbbdc3b52);
        assert_eq!(a.token_count(), Some(4));
        assert_eq!(b.token_count(), Some(5));

        assert_eq!(a.distance(&b), 1);
        assert_eq!(a.distsim(&b), 96.875);
        assert!(a.distsim(&b) > 0. && a.distsim(&b) < 100.);

        assert_eq!(a.similarity(&b), 3151772498. / 3151773522. * 100.);
        assert_eq!(a.normalized_distsim(&b), 100. - 1. / 5. * 100.);
    }

    #[test]
    fn test_pinned_other_algorithms() {
        let fp = FingerprintBuilder::new()
            .width(16)
            .algorithm(HashAlgorithm::Sha256)
            .build_from_tokens(["alpha", "beta"])
            .unwrap();
        assert_eq!(fp.value(), 0x27fb);

        let fp = FingerprintBuilder::new()
            .width(32)
            .algorithm_name("md5")
            .unwrap()
            .build_from_tokens(["alpha"])
            .unwrap();
        assert_eq!(fp.value(), 0xf069f9f9);
    }

    #[test]
    fn test_empty_tokens() {
        let fp = FingerprintBuilder::new()
            .build_from_tokens(std::iter::empty::<&[u8]>())
            .unwrap();
        assert_eq!(fp.value(), (1u128 << 64) - 1);
        assert_eq!(fp.token_count(), Some(0));

        let fp = FingerprintBuilder::new()
            .width(128)
            .build_from_tokens(std::iter::empty::<&[u8]>())
            .unwrap();
        assert_eq!(fp.value(), u128::MAX);
    }

    #[test]
    fn test_single_token_equals_masked_digest() {
        // With one token, every accumulator is +1 or -1, so the fingerprint
        // is exactly the digest masked to the width.
        let fp = FingerprintBuilder::new().build_from_tokens(["a"]).unwrap();
        assert_eq!(fp.value(), 0xb9eaeaea377667b8);
    }

    #[test]
    fn test_invalid_width() {
        let builder = FingerprintBuilder::new().width(0);
        assert!(builder.build_from_tokens(["a"]).is_err());

        let builder = FingerprintBuilder::new().width(129);
        assert!(builder.build_from_tokens(["a"]).is_err());
    }

    #[test]
    fn test_unknown_algorithm_name() {
        assert!(FingerprintBuilder::new().algorithm_name("crc32").is_err());
    }

    #[test]
    fn test_weight_equals_duplication() {
        let weighted = FingerprintBuilder::new()
            .width(32)
            .token_weight("hi", 2)
            .build_from_tokens(["hi", "you"])
            .unwrap();
        let duplicated = FingerprintBuilder::new()
            .width(32)
            .build_from_tokens(["hi", "hi", "you"])
            .unwrap();
        assert_eq!(weighted.value(), duplicated.value());
        assert_eq!(weighted.value(), 0xbde6a42);
    }

    #[test]
    fn test_text_matches_tokens() {
        let builder = FingerprintBuilder::new().width(32);
        let from_text = builder.build_from_text("Hi, how are you ?").unwrap();
        let from_tokens = builder
            .build_from_tokens(["Hi,", "how", "are", "you", "?"])
            .unwrap();
        assert_eq!(from_text.value(), from_tokens.value());
        assert_eq!(from_text.value(), 0xb9dcbf9c);
        assert_eq!(from_text.token_count(), Some(5));
    }

    #[test]
    fn test_pinned_text_pair() {
        let builder = FingerprintBuilder::new().width(32);
        let a = builder.build_from_text("Hi, how are you ?").unwrap();
        let b = builder.build_from_text("Hi, how are you darling ??").unwrap();
        assert_eq!(b.value(), 0xbfd9ffdc);
        assert_eq!(a.distance(&b), 6);
        assert_eq!(a.distsim(&b), 81.25);
    }

    #[test]
    fn test_city64_deterministic() {
        let builder = FingerprintBuilder::new()
            .width(64)
            .algorithm(HashAlgorithm::City64);
        let a = builder.build_from_tokens(["hi", "how", "are", "you"]).unwrap();
        let b = builder.build_from_tokens(["hi", "how", "are", "you"]).unwrap();
        assert_eq!(a.value(), b.value());
    }

    #[test]
    fn test_appended_noise_degrades_distsim() {
        const TRIALS: usize = 200;

        let builder = FingerprintBuilder::new();
        let base_tokens = [
            "the", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog",
        ];
        let base = builder.build_from_tokens(base_tokens).unwrap();
        let baseline = base.distsim(&base);

        let mut rng = SplitMix64::seed_from_u64(42);
        let mut mean_distsim = |num_noise: usize| {
            let mut total = 0.;
            for _ in 0..TRIALS {
                let mut tokens: Vec<Vec<u8>> = base_tokens
                    .iter()
                    .map(|t| t.as_bytes().to_vec())
                    .collect();
                for _ in 0..num_noise {
                    tokens.push(rng.next_u64().to_string().into_bytes());
                }
                let noisy = builder.build_from_tokens(&tokens).unwrap();
                total += base.distsim(&noisy);
            }
            total / TRIALS as f64
        };

        let light = mean_distsim(2);
        let heavy = mean_distsim(24);
        assert!(light <= baseline);
        assert!(heavy <= baseline);
        // Unrelated tokens drown out the shared ones as they accumulate.
        assert!(heavy < light);
    }
}
