//! KZG polynomial commitments and a row/column sharding matrix for
//! data-availability sampling over BLS12-381
//!
//! The dependency order mirrors the modules below: scalar-field arithmetic
//! and domains underpin polynomial operations and the FFT, which together
//! with MSM and a loaded [`setup::TrustedSetup`] give commitments and
//! proofs ([`kzg`]), and [`sharding`] builds the blob/sample abstraction on
//! top of those.
pub mod constants;
pub mod domain;
pub mod error;
pub mod fft;
pub mod field;
pub mod kzg;
pub mod msm;
pub mod polynomial;
pub mod setup;
pub mod sharding;
