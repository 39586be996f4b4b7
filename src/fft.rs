//! Radix-2 Cooley–Tukey FFT over the BLS12-381 scalar field
//!
//! [`fft`] evaluates a polynomial (coefficients in `values`) at all `n`
//! roots of a domain in one pass; with `inverse = true` it runs the same
//! algorithm over the inverted roots and rescales by `1/n`, recovering
//! coefficients from evaluations. Both directions share one recursive
//! divide-and-conquer core: split into even/odd halves, recurse on the
//! squared roots, and combine with a single butterfly per level.
use ark_ff::Zero;

use crate::error::KzgError;
use crate::field::{self, Scalar};

/// Runs the (inverse) FFT of `values` over `roots`.
///
/// `roots` must be `[ω⁰, …, ω^{n-1}]` in natural order for the same `n =
/// values.len()`, itself required to be a power of two — i.e. exactly
/// [`crate::domain::Domain::roots`].
pub fn fft(values: &[Scalar], roots: &[Scalar], inverse: bool) -> Result<Vec<Scalar>, KzgError> {
    let n = values.len();
    if !field::is_power_of_two(n) || roots.len() != n {
        return Err(KzgError::LengthMismatch {
            expected: n,
            found: roots.len(),
        });
    }

    if inverse {
        let inv_roots: Vec<Scalar> = roots.iter().map(|&r| field::inv(r)).collect();
        let mut result = fft_core(values, &inv_roots);
        let inv_n = field::inv(Scalar::from(n as u64));
        for v in result.iter_mut() {
            *v *= inv_n;
        }
        Ok(result)
    } else {
        Ok(fft_core(values, roots))
    }
}

fn fft_core(values: &[Scalar], roots: &[Scalar]) -> Vec<Scalar> {
    let n = values.len();
    if n == 1 {
        return values.to_vec();
    }

    let half = n / 2;
    let even: Vec<Scalar> = values.iter().step_by(2).copied().collect();
    let odd: Vec<Scalar> = values.iter().skip(1).step_by(2).copied().collect();
    let roots_squared: Vec<Scalar> = roots.iter().step_by(2).copied().collect();

    let fe = fft_core(&even, &roots_squared);
    let fo = fft_core(&odd, &roots_squared);

    let mut result = vec![Scalar::zero(); n];
    for i in 0..half {
        let twiddled = roots[i] * fo[i];
        result[i] = fe[i] + twiddled;
        result[i + half] = fe[i] - twiddled;
    }
    result
}

#[cfg(test)]
mod tests {
    use ark_std::{test_rng, UniformRand};

    use super::*;
    use crate::domain::Domain;
    use crate::polynomial;

    #[test]
    fn fft_matches_direct_evaluation() {
        let domain = Domain::new(16).unwrap();
        let rng = &mut test_rng();
        let coeffs: Vec<Scalar> = (0..16).map(|_| Scalar::rand(rng)).collect();

        let evals = fft(&coeffs, &domain.roots, false).unwrap();
        for (i, &root) in domain.roots.iter().enumerate() {
            assert_eq!(evals[i], polynomial::evaluate(&coeffs, root));
        }
    }

    #[test]
    fn fft_ifft_round_trips() {
        let domain = Domain::new(64).unwrap();
        let rng = &mut test_rng();
        let coeffs: Vec<Scalar> = (0..64).map(|_| Scalar::rand(rng)).collect();

        let evals = fft(&coeffs, &domain.roots, false).unwrap();
        let back = fft(&evals, &domain.roots, true).unwrap();
        assert_eq!(back, coeffs);
    }

    #[test]
    fn fft_ifft_round_trips_at_blob_scale() {
        use crate::constants::FIELD_ELEMENTS_PER_BLOB;

        let domain = Domain::new(FIELD_ELEMENTS_PER_BLOB).unwrap();
        let rng = &mut test_rng();
        let values: Vec<Scalar> = (0..FIELD_ELEMENTS_PER_BLOB)
            .map(|_| Scalar::rand(rng))
            .collect();

        let coeffs = fft(&values, &domain.roots, true).unwrap();
        let back = fft(&coeffs, &domain.roots, false).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn fft_rejects_non_power_of_two_length() {
        let values = vec![Scalar::zero(); 3];
        let roots = vec![Scalar::zero(); 3];
        assert!(fft(&values, &roots, false).is_err());
    }

    #[test]
    fn fft_rejects_roots_length_mismatch() {
        let domain = Domain::new(8).unwrap();
        let values = vec![Scalar::zero(); 8];
        assert!(fft(&values, &domain.roots[..4], false).is_err());
    }
}
