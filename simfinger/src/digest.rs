//! Named hash algorithms for per-token digests.
use std::str::FromStr;

use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::errors::{Result, SimfingerError};

/// Hash function used to digest each token before bit accumulation.
///
/// The digest is interpreted as one big unsigned integer, independently of
/// the fingerprint width: bit positions beyond the digest's native width
/// test as zero, and digest bits beyond the fingerprint width are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// MD5 (128-bit digest).
    Md5,
    /// SHA-1 (160-bit digest). The default.
    Sha1,
    /// SHA-224 (224-bit digest).
    Sha224,
    /// SHA-256 (256-bit digest).
    Sha256,
    /// SHA-384 (384-bit digest).
    Sha384,
    /// SHA-512 (512-bit digest).
    Sha512,
    /// CityHash64 (64-bit digest), a fast non-cryptographic option.
    City64,
}

impl HashAlgorithm {
    /// Resolves an algorithm from its lower-case name.
    ///
    /// Supported names are `md5`, `sha1`, `sha224`, `sha256`, `sha384`,
    /// `sha512`, and `city64`. Any other name is a configuration error.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "md5" => Ok(Self::Md5),
            "sha1" => Ok(Self::Sha1),
            "sha224" => Ok(Self::Sha224),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            "city64" => Ok(Self::City64),
            _ => Err(SimfingerError::configuration(
                "unsupported hash algorithm name",
            )),
        }
    }

    /// Gets the algorithm name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::City64 => "city64",
        }
    }

    pub(crate) fn digest(self, token: &[u8]) -> TokenDigest {
        let bytes = match self {
            Self::Md5 => md5::compute(token).0.to_vec(),
            Self::Sha1 => Sha1::digest(token).to_vec(),
            Self::Sha224 => Sha224::digest(token).to_vec(),
            Self::Sha256 => Sha256::digest(token).to_vec(),
            Self::Sha384 => Sha384::digest(token).to_vec(),
            Self::Sha512 => Sha512::digest(token).to_vec(),
            Self::City64 => fasthash::city::hash64(token).to_be_bytes().to_vec(),
        };
        TokenDigest { bytes }
    }
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        Self::Sha1
    }
}

impl FromStr for HashAlgorithm {
    type Err = SimfingerError;

    fn from_str(name: &str) -> Result<Self> {
        Self::from_name(name)
    }
}

/// A token digest whose bytes form one big unsigned big-endian integer.
pub(crate) struct TokenDigest {
    bytes: Vec<u8>,
}

impl TokenDigest {
    /// Tests bit `i` of the digest integer, counting from the least
    /// significant bit. Positions at or beyond the digest width are zero.
    #[inline(always)]
    pub(crate) fn bit(&self, i: usize) -> bool {
        let byte = i / 8;
        if byte >= self.bytes.len() {
            return false;
        }
        self.bytes[self.bytes.len() - 1 - byte] >> (i % 8) & 1 == 1
    }
}
