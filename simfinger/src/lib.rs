//! Locality-sensitive fingerprints (simhash) for near-duplicate detection.
//!
//! A fingerprint is built by digesting each token of a document, summing a
//! signed weight into one accumulator per bit position, and keeping the sign
//! of each accumulator as the final bit. Documents sharing many tokens get
//! fingerprints with a small Hamming distance, which [`Fingerprint::distsim`]
//! turns into a percentage score.
#![deny(missing_docs)]

/// Fingerprint construction.
pub mod builder;
/// Digest algorithms used to hash tokens.
pub mod digest;
/// Error types returned by this crate.
pub mod errors;
/// Fingerprint type and similarity scoring.
pub mod fingerprint;

pub(crate) mod tokenize;

pub use builder::FingerprintBuilder;
pub use digest::HashAlgorithm;
pub use errors::{Result, SimfingerError};
pub use fingerprint::{Fingerprint, Operand, MAX_WIDTH};
