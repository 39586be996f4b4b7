//! Roots of unity and the evaluation domains built from them
//!
//! A domain of size `n` is the set `{ω⁰, …, ω^{n-1}}` for a primitive `n`-th
//! root of unity `ω`, derived from the fixed primitive root `g = 7` of the
//! BLS12-381 scalar field's multiplicative group by `ω = g^{(r-1)/n} mod r`.
//!
//! Rather than recomputing `(r-1)/n` with big-integer arithmetic, this
//! crate leans on the fact that `g^{(r-1)/2^32}` is exactly `Fr`'s built-in
//! two-adic root of unity (BLS12-381's `Fr` has 2-adicity 32, and arkworks
//! derives that constant from the same generator `7`): raising it to
//! `2^(32 - log2(n))` gives the primitive `n`-th root directly.
use ark_ff::{FftField, Field, One};

use crate::error::KzgError;
use crate::field::{self, Scalar};

/// Computes the primitive `n`-th root of unity for the canonical subgroup
/// of size `n`.
///
/// Fails with [`KzgError::InvalidDomain`] unless `n > 0`, `n` is a power of
/// two, and `n` divides `r - 1`.
pub fn primitive_root_of_unity(n: usize) -> Result<Scalar, KzgError> {
    if n == 0 || !field::is_power_of_two(n) {
        return Err(KzgError::InvalidDomain { size: n });
    }
    let log_n = n.trailing_zeros();
    if log_n > Scalar::TWO_ADICITY {
        return Err(KzgError::InvalidDomain { size: n });
    }
    let exponent: u64 = 1u64 << (Scalar::TWO_ADICITY - log_n);
    Ok(Scalar::TWO_ADIC_ROOT_OF_UNITY.pow([exponent]))
}

/// Computes the ordered sequence `[ω⁰, …, ω^{n-1}]` for the unique subgroup
/// of size `n`.
pub fn roots_of_unity(n: usize) -> Result<Vec<Scalar>, KzgError> {
    let omega = primitive_root_of_unity(n)?;
    let mut roots = Vec::with_capacity(n);
    let mut current = Scalar::one();
    for _ in 0..n {
        roots.push(current);
        current *= omega;
    }
    Ok(roots)
}

/// An evaluation domain: the roots of unity for a given power-of-two size,
/// plus their reverse-bit-order permutation.
///
/// Built once by the caller (typically sized to `FIELD_ELEMENTS_PER_BLOB`)
/// and passed explicitly to every entry point that needs it, rather than
/// kept as a lazily-initialized global, so callers can use more than one
/// domain size side by side.
#[derive(Clone, Debug)]
pub struct Domain {
    /// `[ω⁰, …, ω^{n-1}]` in natural order.
    pub roots: Vec<Scalar>,
    /// The same roots, permuted into reverse-bit order.
    pub roots_rbo: Vec<Scalar>,
}

impl Domain {
    /// Builds the domain of the given size.
    pub fn new(size: usize) -> Result<Self, KzgError> {
        let roots = roots_of_unity(size)?;
        let roots_rbo = field::rbo_permute(&roots)?;
        Ok(Self { roots, roots_rbo })
    }

    /// The size of the domain (always a power of two).
    pub fn size(&self) -> usize {
        self.roots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_power_of_two() {
        assert!(roots_of_unity(6).is_err());
        assert!(roots_of_unity(0).is_err());
    }

    #[test]
    fn rejects_size_larger_than_two_adicity() {
        assert!(roots_of_unity(1usize << 33).is_err());
    }

    #[test]
    fn root_has_correct_order() {
        for n in [2usize, 4, 8, 4096] {
            let omega = primitive_root_of_unity(n).unwrap();
            assert_eq!(field::pow_mod(omega, n as u64), Scalar::one());
            // It must be primitive: no smaller power collapses to one.
            let mut k = 1;
            while k < n {
                assert_ne!(field::pow_mod(omega, k as u64), Scalar::one());
                k *= 2;
            }
        }
    }

    #[test]
    fn domain_roots_are_rbo_involution() {
        let domain = Domain::new(64).unwrap();
        let back = field::rbo_permute(&domain.roots_rbo).unwrap();
        assert_eq!(back, domain.roots);
    }
}
