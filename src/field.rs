//! Scalar-field arithmetic over the BLS12-381 subgroup order `r`
//!
//! The raw field arithmetic (addition, multiplication, Fermat-inverse) is
//! delegated to `arkworks`' [`Fr`], a fixed-width Montgomery-form
//! representation. What lives here are the conventions layered on top:
//! the `inv(0) = 0` convention, bit-reversal, and the reverse-bit-order
//! permutation.
use ark_ff::{Field, One, Zero};

use crate::error::KzgError;

/// An element of the BLS12-381 scalar field, i.e. an integer in `[0, r)`
/// where `r` is the prime subgroup order
/// `52435875175126190479447740508185965837690552500527637822603658699938581184513`.
pub type Scalar = ark_bls12_381::Fr;

/// Computes the modular inverse of `x`.
///
/// Returns `y` such that `x * y ≡ 1 (mod r)`, or `0` when `x = 0` (the
/// convention used throughout this crate; there is no sensible inverse of
/// zero, and callers that could feed zero into a division are expected to
/// reject it earlier with a dedicated error such as [`KzgError::InvalidCoset`]).
///
/// Not constant-time: this crate is a prover, and the pairing cost of
/// verification dominates any side channel here.
pub fn inv(x: Scalar) -> Scalar {
    if x.is_zero() {
        Scalar::zero()
    } else {
        x.inverse().expect("nonzero field elements always have an inverse")
    }
}

/// Right-to-left square-and-multiply exponentiation, `x^k mod r`.
pub fn pow_mod(x: Scalar, k: u64) -> Scalar {
    x.pow([k])
}

/// `n > 0` and `n` is a power of two.
pub const fn is_power_of_two(n: usize) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

/// Reverses the low `log2(n)` bits of `i`.
///
/// Fails with [`KzgError::InvalidDomain`] when `n` is not a power of two.
pub fn reverse_bits(i: usize, n: usize) -> Result<usize, KzgError> {
    if !is_power_of_two(n) {
        return Err(KzgError::InvalidDomain { size: n });
    }
    let bits = n.trailing_zeros();
    if bits == 0 {
        return Ok(0);
    }
    Ok(i.reverse_bits() >> (usize::BITS - bits))
}

/// Permutes `v` into reverse-bit order: `v'[i] = v[reverse_bits(i, len(v))]`.
///
/// Requires `len(v)` to be a power of two. Involutive:
/// `rbo_permute(rbo_permute(v)) == v`.
pub fn rbo_permute<T: Clone>(v: &[T]) -> Result<Vec<T>, KzgError> {
    let n = v.len();
    (0..n)
        .map(|i| reverse_bits(i, n).map(|ri| v[ri].clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use ark_std::{test_rng, UniformRand};

    use super::*;

    #[test]
    fn inv_is_multiplicative_identity() {
        let rng = &mut test_rng();
        for _ in 0..32 {
            let x = Scalar::rand(rng);
            if x.is_zero() {
                continue;
            }
            assert_eq!(x * inv(x), Scalar::one());
        }
        assert_eq!(inv(Scalar::zero()), Scalar::zero());
    }

    #[test]
    fn pow_mod_matches_repeated_multiplication() {
        let x = Scalar::from(3u64);
        let mut expected = Scalar::one();
        for _ in 0..13 {
            expected *= x;
        }
        assert_eq!(pow_mod(x, 13), expected);
    }

    #[test]
    fn power_of_two_detection() {
        assert!(!is_power_of_two(0));
        assert!(is_power_of_two(1));
        assert!(is_power_of_two(2));
        assert!(!is_power_of_two(3));
        assert!(is_power_of_two(4096));
        assert!(!is_power_of_two(4095));
    }

    #[test]
    fn reverse_bits_rejects_non_power_of_two() {
        assert_eq!(
            reverse_bits(0, 6),
            Err(KzgError::InvalidDomain { size: 6 })
        );
    }

    #[test]
    fn reverse_bits_known_values() {
        // n = 8 -> 3 bits
        assert_eq!(reverse_bits(0b001, 8).unwrap(), 0b100);
        assert_eq!(reverse_bits(0b011, 8).unwrap(), 0b110);
        assert_eq!(reverse_bits(0b111, 8).unwrap(), 0b111);
    }

    #[test]
    fn rbo_permute_is_involutive() {
        let v: Vec<Scalar> = (0..16u64).map(Scalar::from).collect();
        let permuted = rbo_permute(&v).unwrap();
        assert_ne!(permuted, v);
        let back = rbo_permute(&permuted).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn rbo_permute_rejects_non_power_of_two_length() {
        let v: Vec<Scalar> = (0..5u64).map(Scalar::from).collect();
        assert!(rbo_permute(&v).is_err());
    }
}
