//! Multi-scalar multiplication over G1 / G2
//!
//! Every KZG commitment and proof is a linear combination of trusted-setup
//! points; this module is the one place that calls into arkworks'
//! [`VariableBaseMSM`] to compute one, directly on the curve group rather
//! than through a higher-level polynomial-commitment crate.
use ark_ec::{CurveGroup, VariableBaseMSM};
use ark_ff::PrimeField;

use crate::error::KzgError;

/// Computes `Σ scalars[i] * points[i]`, over the group `G` whose affine
/// representation holds `points`.
///
/// Fails with [`KzgError::LengthMismatch`] unless `points.len() ==
/// scalars.len()`.
pub fn lincomb<F, G>(points: &[G::Affine], scalars: &[F]) -> Result<G, KzgError>
where
    F: PrimeField,
    G: CurveGroup<ScalarField = F> + VariableBaseMSM,
{
    if points.len() != scalars.len() {
        return Err(KzgError::LengthMismatch {
            expected: points.len(),
            found: scalars.len(),
        });
    }

    let bigints: Vec<_> = scalars.iter().map(|s| s.into_bigint()).collect();
    Ok(<G as VariableBaseMSM>::msm_bigint(points, &bigints))
}

/// [`lincomb`], normalized back to affine form.
pub fn lincomb_affine<F, G>(points: &[G::Affine], scalars: &[F]) -> Result<G::Affine, KzgError>
where
    F: PrimeField,
    G: CurveGroup<ScalarField = F> + VariableBaseMSM,
{
    Ok(lincomb::<F, G>(points, scalars)?.into_affine())
}

#[cfg(test)]
mod tests {
    use ark_bls12_381::{Fr, G1Affine, G1Projective};
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::{One, Zero};
    use ark_std::{test_rng, UniformRand};

    use super::*;

    #[test]
    fn lincomb_matches_naive_sum() {
        let rng = &mut test_rng();
        let points: Vec<G1Affine> = (0..6)
            .map(|_| G1Projective::rand(rng).into_affine())
            .collect();
        let scalars: Vec<Fr> = (0..6).map(|_| Fr::rand(rng)).collect();

        let expected = points
            .iter()
            .zip(scalars.iter())
            .fold(G1Projective::zero(), |acc, (p, s)| acc + p.mul_bigint(s.0));

        let got = lincomb::<Fr, G1Projective>(&points, &scalars).unwrap();
        assert_eq!(got, expected);
    }

    #[test]
    fn lincomb_with_unit_scalars_sums_points() {
        let rng = &mut test_rng();
        let points: Vec<G1Affine> = (0..4)
            .map(|_| G1Projective::rand(rng).into_affine())
            .collect();
        let scalars = vec![Fr::one(); 4];

        let expected: G1Projective = points.iter().map(|p| p.into_group()).sum();
        let got = lincomb::<Fr, G1Projective>(&points, &scalars).unwrap();
        assert_eq!(got, expected);
    }

    #[test]
    fn lincomb_rejects_length_mismatch() {
        let rng = &mut test_rng();
        let points: Vec<G1Affine> = (0..3)
            .map(|_| G1Projective::rand(rng).into_affine())
            .collect();
        let scalars = vec![Fr::one(); 2];
        assert!(lincomb::<Fr, G1Projective>(&points, &scalars).is_err());
    }
}
