//! KZG commitments, single-point proofs, and multi-point ("coset") proofs
//!
//! Every verifier here reduces to one pairing product followed by a single
//! final exponentiation ([`ark_ec::pairing::Pairing::multi_pairing`]),
//! rather than two separate pairings compared for equality: the first
//! argument is negated so the whole check collapses to "does this product
//! equal the identity of `G_T`".
use ark_bls12_381::{Bls12_381, G1Affine, G1Projective, G2Affine};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::{One, Zero};
use tracing::debug;

use crate::domain::{self, Domain};
use crate::error::KzgError;
use crate::field::{self, Scalar};
use crate::msm;
use crate::polynomial;
use crate::setup::TrustedSetup;

/// Commits to `p`: `Σ pᵢ · S¹_i`.
///
/// Fails with [`KzgError::SetupTooSmall`] if `p` has more coefficients than
/// the setup has G1 powers.
pub fn commit(setup: &TrustedSetup, p: &[Scalar]) -> Result<G1Affine, KzgError> {
    if p.len() > setup.g1.len() {
        return Err(KzgError::SetupTooSmall {
            needed: p.len(),
            available: setup.g1.len(),
        });
    }
    msm::lincomb_affine::<Scalar, G1Projective>(&setup.g1[..p.len()], p)
}

/// Recovers the coefficient-form polynomial underlying a blob: `n`
/// evaluations given in reverse-bit order on the canonical domain of size
/// `n`.
///
/// `domain` must be the domain of size `n = blob.len()` (typically
/// [`crate::constants::FIELD_ELEMENTS_PER_BLOB`]). The rbo permutation is
/// the convention by which truncating a blob to its first `n/2` entries
/// yields a valid sub-blob for a half-size polynomial.
pub fn blob_to_polynomial(domain: &Domain, blob: &[Scalar]) -> Result<Vec<Scalar>, KzgError> {
    if domain.size() != blob.len() {
        return Err(KzgError::LengthMismatch {
            expected: domain.size(),
            found: blob.len(),
        });
    }
    let natural_order = field::rbo_permute(blob)?;
    crate::fft::fft(&natural_order, &domain.roots, true)
}

/// Commits to a blob directly: `commit(blob_to_polynomial(domain, blob))`.
pub fn blob_to_commitment(
    setup: &TrustedSetup,
    domain: &Domain,
    blob: &[Scalar],
) -> Result<G1Affine, KzgError> {
    let p = blob_to_polynomial(domain, blob)?;
    commit(setup, &p)
}

/// Creates a single-point opening proof: `commit((p(X) - p(z)) / (X - z))`.
///
/// The subtraction of `p(z)` is absorbed by [`polynomial::div_polys`],
/// since `(p(X) - p(z)) / (X - z)` divides exactly for any `z`.
pub fn create_proof(setup: &TrustedSetup, p: &[Scalar], z: Scalar) -> Result<G1Affine, KzgError> {
    let divisor = [-z, Scalar::one()];
    let q = polynomial::div_polys(p, &divisor)?;
    commit(setup, &q)
}

/// Verifies a single-point opening: does `commitment` open to `y` at `z`
/// under `proof`?
///
/// Checks `e(-(C - y·G1), G2) · e(π, S²_1 - z·G2) = 1_{G_T}`.
pub fn verify_proof(
    setup: &TrustedSetup,
    commitment: G1Affine,
    z: Scalar,
    y: Scalar,
    proof: G1Affine,
) -> Result<bool, KzgError> {
    if setup.g2.len() < 2 {
        return Err(KzgError::SetupTooSmall {
            needed: 2,
            available: setup.g2.len(),
        });
    }

    let g1_gen = G1Affine::generator();
    let g2_gen = G2Affine::generator();

    let lhs = -(commitment.into_group() - g1_gen * y);
    let rhs = setup.g2[1].into_group() - g2_gen * z;

    let check = Bls12_381::multi_pairing([lhs.into_affine(), proof], [g2_gen, rhs.into_affine()]);
    debug!(accepted = check.is_zero(), "single-point proof checked");
    Ok(check.is_zero())
}

/// Creates a multi-point opening proof for the coset `C_h = { h·ω_M^i : 0
/// ≤ i < M }`, whose vanishing polynomial is `Z(X) = X^M - h^M`.
///
/// Fails with [`KzgError::InvalidCoset`] if `h = 0` or `m` is not a power
/// of two, and with [`KzgError::SetupTooSmall`] if the setup can't cover
/// degree `m`.
pub fn create_multiproof(
    setup: &TrustedSetup,
    p: &[Scalar],
    h: Scalar,
    m: usize,
) -> Result<G1Affine, KzgError> {
    let divisor = coset_vanishing_polynomial(h, m)?;
    if m + 1 > setup.g2.len() {
        return Err(KzgError::SetupTooSmall {
            needed: m + 1,
            available: setup.g2.len(),
        });
    }
    let q = polynomial::div_polys(p, &divisor)?;
    commit(setup, &q)
}

/// Verifies a multi-point opening: do `ys[i] = p(h·ω_M^i)` for `M =
/// len(ys)`, in natural coset order?
///
/// 1. Interpolates `ys` back to subgroup coefficients via inverse FFT.
/// 2. Shifts those coefficients onto the coset (`I[i] *= inv(h^i)`).
/// 3. Checks `e(-(C - commit(I')), G2) · e(π, S²_M - h^M·G2) = 1_{G_T}`.
pub fn verify_multiproof(
    setup: &TrustedSetup,
    commitment: G1Affine,
    h: Scalar,
    ys: &[Scalar],
    proof: G1Affine,
) -> Result<bool, KzgError> {
    if h.is_zero() {
        return Err(KzgError::InvalidCoset {
            reason: "coset shift h must be nonzero".to_string(),
        });
    }
    let m = ys.len();
    if !field::is_power_of_two(m) {
        return Err(KzgError::InvalidCoset {
            reason: format!("sample size {m} must be a power of two"),
        });
    }
    if m + 1 > setup.g2.len() {
        return Err(KzgError::SetupTooSmall {
            needed: m + 1,
            available: setup.g2.len(),
        });
    }

    let roots_m = domain::roots_of_unity(m)?;
    let mut shifted = crate::fft::fft(ys, &roots_m, true)?;
    let mut h_power = Scalar::one();
    for coeff in shifted.iter_mut() {
        *coeff *= field::inv(h_power);
        h_power *= h;
    }
    let commit_shifted = commit(setup, &shifted)?;

    let h_m = field::pow_mod(h, m as u64);
    let g2_gen = G2Affine::generator();

    let lhs = -(commitment.into_group() - commit_shifted.into_group());
    let rhs = setup.g2[m].into_group() - g2_gen * h_m;

    let check = Bls12_381::multi_pairing([lhs.into_affine(), proof], [g2_gen, rhs.into_affine()]);
    debug!(m, accepted = check.is_zero(), "multiproof checked");
    Ok(check.is_zero())
}

/// The vanishing polynomial of the coset `C_h` of size `m`: `X^m - h^m`,
/// represented with the constant term first.
fn coset_vanishing_polynomial(h: Scalar, m: usize) -> Result<Vec<Scalar>, KzgError> {
    if h.is_zero() {
        return Err(KzgError::InvalidCoset {
            reason: "coset shift h must be nonzero".to_string(),
        });
    }
    if !field::is_power_of_two(m) {
        return Err(KzgError::InvalidCoset {
            reason: format!("sample size {m} must be a power of two"),
        });
    }
    let h_m = field::pow_mod(h, m as u64);
    let mut divisor = vec![Scalar::zero(); m + 1];
    divisor[0] = -h_m;
    divisor[m] = Scalar::one();
    Ok(divisor)
}
