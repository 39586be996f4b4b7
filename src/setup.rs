//! Loading and building KZG trusted setups
//!
//! A trusted setup is two sequences of powers of a secret `τ`, `S¹ = (τ^i
//! · G1)` and `S² = (τ^i · G2)`, produced once by a multi-party ceremony and
//! never again exposing `τ`. This crate never generates a production
//! setup; it only loads one (a JSON document of decimal-string coordinates)
//! or, for tests, builds an insecure one from a known secret.
use ark_bls12_381::{Fq, Fq2, G1Affine, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{One, Zero};
use ark_std::rand::RngCore;
use ark_std::UniformRand;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::KzgError;
use crate::field::Scalar;

/// The public parameters used to commit polynomials and open proofs
/// against them.
///
/// `g1[i] = τ^i · G1` and `g2[i] = τ^i · G2`, for the same secret `τ`.
/// `g1` must have at least as many elements as the highest polynomial
/// degree this setup will be used to commit, plus one; `g2` only ever
/// needs its first two elements (`G2` and `τ · G2`) for single-point
/// proofs, though a full-length `g2` is accepted to match the reference
/// JSON format.
#[derive(Clone, Debug)]
pub struct TrustedSetup {
    pub g1: Vec<G1Affine>,
    pub g2: Vec<G2Affine>,
}

#[derive(Deserialize)]
struct RawSetupG1 {
    #[serde(rename = "setup_G1")]
    setup_g1: Vec<[String; 2]>,
}

#[derive(Deserialize)]
struct RawSetupG2 {
    #[serde(rename = "setup_G2")]
    setup_g2: Vec<[[String; 2]; 2]>,
}

impl TrustedSetup {
    /// Parses the reference JSON format: `g1_json` is `{"setup_G1":
    /// [[x, y], ...]}` and `g2_json` is `{"setup_G2": [[[x0, x1], [y0,
    /// y1]], ...]}`, every coordinate a base-10 decimal string.
    ///
    /// Validates that every point lies on the curve and in the correct
    /// prime-order subgroup, failing with [`KzgError::InvalidSetupData`]
    /// otherwise.
    pub fn from_json(g1_json: &str, g2_json: &str) -> Result<Self, KzgError> {
        let raw_g1: RawSetupG1 = serde_json::from_str(g1_json)
            .map_err(|e| KzgError::InvalidSetupData { reason: e.to_string() })?;
        let raw_g2: RawSetupG2 = serde_json::from_str(g2_json)
            .map_err(|e| KzgError::InvalidSetupData { reason: e.to_string() })?;

        info!(
            g1_len = raw_g1.setup_g1.len(),
            g2_len = raw_g2.setup_g2.len(),
            "loading trusted setup from JSON"
        );

        let g1 = raw_g1
            .setup_g1
            .iter()
            .map(|[x, y]| g1_point(x, y))
            .collect::<Result<Vec<_>, _>>()?;
        let g2 = raw_g2
            .setup_g2
            .iter()
            .map(|[x, y]| g2_point(x, y))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(g1 = g1.len(), g2 = g2.len(), "trusted setup loaded");
        Ok(Self { g1, g2 })
    }

    /// Builds a toy setup of the given size from a known secret scalar.
    ///
    /// Useful only for tests, since anyone who knows `secret` can forge
    /// proofs against this setup.
    pub fn insecure(secret: Scalar, size: usize) -> Self {
        let powers = powers_of(secret, size);
        let g1 = powers
            .iter()
            .map(|&p| (G1Affine::generator() * p).into_affine())
            .collect();
        let g2 = powers
            .iter()
            .map(|&p| (G2Affine::generator() * p).into_affine())
            .collect();
        Self { g1, g2 }
    }

    /// Builds a toy setup from a freshly sampled random secret, never
    /// exposing it to the caller. For tests only, same caveat as
    /// [`TrustedSetup::insecure`].
    pub fn random(size: usize, rng: &mut impl RngCore) -> Self {
        Self::insecure(Scalar::rand(rng), size)
    }

    /// Number of powers of `τ` available on G1 (the maximum committable
    /// degree plus one).
    pub fn max_g1_powers(&self) -> usize {
        self.g1.len()
    }
}

fn powers_of(secret: Scalar, size: usize) -> Vec<Scalar> {
    let mut powers = Vec::with_capacity(size);
    let mut current = Scalar::one();
    for _ in 0..size {
        powers.push(current);
        current *= secret;
    }
    powers
}

fn g1_point(x: &str, y: &str) -> Result<G1Affine, KzgError> {
    let x = parse_decimal_fq(x)?;
    let y = parse_decimal_fq(y)?;
    let point = G1Affine::new_unchecked(x, y);
    if point.is_zero() {
        return Ok(point);
    }
    if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(KzgError::InvalidSetupData {
            reason: "G1 point is not on the curve or not in the prime-order subgroup"
                .to_string(),
        });
    }
    Ok(point)
}

fn g2_point(x: &[String; 2], y: &[String; 2]) -> Result<G2Affine, KzgError> {
    let x = Fq2::new(parse_decimal_fq(&x[0])?, parse_decimal_fq(&x[1])?);
    let y = Fq2::new(parse_decimal_fq(&y[0])?, parse_decimal_fq(&y[1])?);
    let point = G2Affine::new_unchecked(x, y);
    if point.is_zero() {
        return Ok(point);
    }
    if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(KzgError::InvalidSetupData {
            reason: "G2 point is not on the curve or not in the prime-order subgroup"
                .to_string(),
        });
    }
    Ok(point)
}

/// Parses a base-10 digit string into `Fq` by repeated multiply-accumulate,
/// avoiding a dependency on a big-integer crate the rest of the stack
/// doesn't otherwise need.
fn parse_decimal_fq(s: &str) -> Result<Fq, KzgError> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(KzgError::InvalidSetupData {
            reason: format!("not a base-10 integer: {s:?}"),
        });
    }
    let ten = Fq::from(10u64);
    let mut acc = Fq::zero();
    for byte in s.bytes() {
        let digit = (byte - b'0') as u64;
        acc = acc * ten + Fq::from(digit);
    }
    Ok(acc)
}
