//! Compile-time parameters of the sharding matrix
//!
//! The core KZG/FFT/polynomial machinery does not depend on these; only the
//! reference [`crate::sharding::BlobsMatrix`] harness is sized by them.

/// Number of scalar field elements in one blob (one row of the matrix).
pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096;

/// Number of scalar field elements in one sample (one coset-aligned stripe
/// of a blob).
pub const FIELD_ELEMENTS_PER_SAMPLE: usize = 16;

/// Number of rows in the reference sharding matrix.
pub const N_MATRIX_ROWS: usize = 4;

/// Number of columns (samples per row) in the reference sharding matrix.
pub const N_MATRIX_COLUMNS: usize = 4;
