//! Polynomials in coefficient form
//!
//! All operations here take and return polynomials as `[c₀, c₁, …, c_d]`
//! (little-endian: index `i` is the coefficient of `X^i`). No coefficient
//! normalization (trailing-zero stripping) is performed; callers are
//! expected to preserve lengths themselves.
use ark_ff::{One, Zero};

use crate::error::KzgError;
use crate::field::{self, Scalar};

/// Evaluates `p` at `x` using Horner's method.
pub fn evaluate(p: &[Scalar], x: Scalar) -> Scalar {
    p.iter()
        .rev()
        .fold(Scalar::zero(), |acc, &coefficient| acc * x + coefficient)
}

/// Synthetic long division: `a / b`, assuming the division is exact.
///
/// Requires `len(a) >= len(b)` and `b`'s leading coefficient to be
/// invertible (i.e. nonzero). Returns the quotient only, of length
/// `len(a) - len(b) + 1`; no remainder is computed, since this crate only
/// ever divides when exact divisibility is already known (proof
/// construction).
pub fn div_polys(a: &[Scalar], b: &[Scalar]) -> Result<Vec<Scalar>, KzgError> {
    if b.is_empty() || a.len() < b.len() {
        return Err(KzgError::LengthMismatch {
            expected: b.len(),
            found: a.len(),
        });
    }

    let mut a = a.to_vec();
    let b_degree = b.len() - 1;
    let b_lead_inv = field::inv(b[b_degree]);

    let out_len = a.len() - b.len() + 1;
    let mut quotient = vec![Scalar::zero(); out_len];

    for diff in (0..out_len).rev() {
        let apos = diff + b_degree;
        let q = a[apos] * b_lead_inv;
        quotient[diff] = q;
        for (i, &bi) in b.iter().enumerate() {
            a[diff + i] -= bi * q;
        }
    }

    Ok(quotient)
}

/// The vanishing polynomial `Π (X - xᵢ)`, of length `len(xs) + 1` and
/// leading coefficient `1`.
pub fn zpoly(xs: &[Scalar]) -> Vec<Scalar> {
    let mut root = vec![Scalar::one()];
    for &x in xs {
        root.insert(0, Scalar::zero());
        let len = root.len();
        for j in 0..len - 1 {
            let shifted = root[j + 1] * x;
            root[j] -= shifted;
        }
    }
    root
}

/// Lagrange interpolation: the unique polynomial `p` of degree `< len(xs)`
/// with `p(xᵢ) = yᵢ`, for pairwise distinct `xs`.
pub fn interpolate(xs: &[Scalar], ys: &[Scalar]) -> Result<Vec<Scalar>, KzgError> {
    if xs.len() != ys.len() {
        return Err(KzgError::LengthMismatch {
            expected: xs.len(),
            found: ys.len(),
        });
    }

    let root = zpoly(xs);
    let mut result = vec![Scalar::zero(); ys.len()];

    for (&xi, &yi) in xs.iter().zip(ys.iter()) {
        let numerator = div_polys(&root, &[-xi, Scalar::one()])?;
        let denominator = evaluate(&numerator, xi);
        let scale = yi * field::inv(denominator);
        for (j, &coeff) in numerator.iter().enumerate() {
            result[j] += coeff * scale;
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use ark_std::{test_rng, UniformRand};

    use super::*;

    #[test]
    fn evaluate_constant_and_linear() {
        let p = vec![Scalar::from(3u64)];
        assert_eq!(evaluate(&p, Scalar::from(100u64)), Scalar::from(3u64));

        // p(X) = 1 + 2X
        let p = vec![Scalar::from(1u64), Scalar::from(2u64)];
        assert_eq!(evaluate(&p, Scalar::from(5u64)), Scalar::from(11u64));
    }

    #[test]
    fn div_polys_exact_division() {
        // (X - 3)(X + 2) = X^2 - X - 6
        let a = vec![Scalar::from(-6i64), Scalar::from(-1i64), Scalar::one()];
        let b = vec![Scalar::from(-3i64), Scalar::one()];
        let q = div_polys(&a, &b).unwrap();
        assert_eq!(q, vec![Scalar::from(2u64), Scalar::one()]);
    }

    #[test]
    fn div_polys_rejects_length_mismatch() {
        let a = vec![Scalar::one()];
        let b = vec![Scalar::one(), Scalar::one()];
        assert!(div_polys(&a, &b).is_err());
    }

    #[test]
    fn zpoly_has_expected_roots() {
        let xs = vec![Scalar::from(1u64), Scalar::from(2u64), Scalar::from(3u64)];
        let z = zpoly(&xs);
        assert_eq!(z.len(), xs.len() + 1);
        assert_eq!(*z.last().unwrap(), Scalar::one());
        for &x in &xs {
            assert_eq!(evaluate(&z, x), Scalar::zero());
        }
    }

    #[test]
    fn interpolate_round_trips_through_evaluate() {
        let rng = &mut test_rng();
        let degree = 8;
        let p: Vec<Scalar> = (0..degree).map(|_| Scalar::rand(rng)).collect();

        let xs: Vec<Scalar> = (0..degree as u64).map(|i| Scalar::from(i + 1)).collect();
        let ys: Vec<Scalar> = xs.iter().map(|&x| evaluate(&p, x)).collect();

        let interpolated = interpolate(&xs, &ys).unwrap();
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert_eq!(evaluate(&interpolated, x), y);
        }
    }

    #[test]
    fn interpolate_rejects_length_mismatch() {
        let xs = vec![Scalar::one()];
        let ys = vec![Scalar::one(), Scalar::one()];
        assert!(interpolate(&xs, &ys).is_err());
    }
}
