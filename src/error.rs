//! Errors produced by this crate
//!
//! Every failure here is a programmer error (wrong sizes, a domain that
//! isn't a power of two, a trusted setup that is too small) rather than an
//! ordinary negative outcome. The one ordinary negative outcome, a failed
//! verification, is reported as `false` (or `Ok(false)`) by the `verify_*`
//! functions and never as a [`KzgError`].
use thiserror::Error;

/// An error that the KZG / sharding core can end up producing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum KzgError {
    /// A requested FFT/roots-of-unity size is not a power of two, or does
    /// not divide `r - 1`.
    #[error("domain size {size} is invalid: must be a nonzero power of two dividing r - 1")]
    InvalidDomain { size: usize },

    /// Two paired sequences (MSM points/scalars, polynomial division
    /// operands, interpolation nodes/values) have incompatible lengths.
    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// A commitment or multiproof needs a higher power of the secret than
    /// the loaded trusted setup provides.
    #[error("trusted setup too small: need {needed} powers, have {available}")]
    SetupTooSmall { needed: usize, available: usize },

    /// The coset shift is zero, or the requested coset size is not a power
    /// of two.
    #[error("invalid coset: {reason}")]
    InvalidCoset { reason: String },

    /// A trusted-setup JSON document was malformed: a non-decimal
    /// coordinate, a point off the curve, or a point outside the prime
    /// subgroup. Not part of the core polynomial/FFT/KZG error taxonomy —
    /// this is the ambient "bad config input" case for [`crate::setup`].
    #[error("invalid trusted setup data: {reason}")]
    InvalidSetupData { reason: String },
}
