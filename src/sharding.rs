//! The blobs matrix: rows of blobs, each split into coset-aligned samples
//!
//! A [`BlobsMatrix`] is `R` independent blobs (rows); each [`Blob`] is one
//! evaluation domain's worth of scalars, split into `n / M`-many
//! [`Sample`]s of `M` contiguous elements plus a multiproof. `sample_index`
//! is zero-based, and every random selection below uses a half-open range.
use ark_bls12_381::G1Affine;
use ark_std::UniformRand;
use rand::Rng;
use tracing::{debug, info};

use crate::domain::Domain;
use crate::error::KzgError;
use crate::field::{self, Scalar};
use crate::kzg;
use crate::setup::TrustedSetup;

/// A contiguous `M`-element stripe of a blob's evaluations, in the blob's
/// own (reverse-bit-order) storage order, plus the multiproof that it
/// takes these values on its coset.
#[derive(Clone, Debug)]
pub struct Sample {
    /// Index of this sample within its row, `i ∈ [0, n/M)`.
    pub sample_index: usize,
    /// The coset shift `h_i = ω_n^{rbo(i·M)}`: `data_points` is a contiguous
    /// stripe of the blob's reverse-bit-order storage, so the natural-order
    /// root at that position is indexed through the rbo permutation.
    pub coset_shift: Scalar,
    /// The `M` stored evaluations, in blob (rbo) order.
    pub data_points: Vec<Scalar>,
    /// The multiproof that `p_B` takes `rbo_permute(data_points)` on the
    /// coset `C_{h_i}`, in natural order.
    pub proof: G1Affine,
}

impl Sample {
    fn new(
        setup: &TrustedSetup,
        polynomial: &[Scalar],
        blob: &[Scalar],
        domain: &Domain,
        sample_index: usize,
        sample_size: usize,
    ) -> Result<Self, KzgError> {
        let start = sample_index * sample_size;
        let data_points = blob[start..start + sample_size].to_vec();
        // `data_points` is a contiguous stripe of the blob's reverse-bit-order
        // storage, so the coset it lies on is indexed by the rbo root, not
        // the natural-order one.
        let coset_shift = domain.roots_rbo[start];
        let proof = kzg::create_multiproof(setup, polynomial, coset_shift, sample_size)?;
        Ok(Self {
            sample_index,
            coset_shift,
            data_points,
            proof,
        })
    }

    /// Verifies this sample against `commitment`, the commitment of the
    /// row polynomial it was drawn from.
    ///
    /// Applies [`field::rbo_permute`] to the stored data points before
    /// delegating to [`kzg::verify_multiproof`], since `data_points` are
    /// kept in blob (rbo) order.
    pub fn verify_multiproof(
        &self,
        setup: &TrustedSetup,
        commitment: G1Affine,
    ) -> Result<bool, KzgError> {
        let ys = field::rbo_permute(&self.data_points)?;
        kzg::verify_multiproof(setup, commitment, self.coset_shift, &ys, self.proof)
    }
}

/// One row of the matrix: `n` field elements committed as a single
/// polynomial, split into `n / M` samples.
#[derive(Clone, Debug)]
pub struct Blob {
    pub commitment: G1Affine,
    pub samples: Vec<Sample>,
}

impl Blob {
    /// Builds a blob from `data`, `domain.size()` field elements already
    /// given in reverse-bit order, splitting it into samples of
    /// `sample_size` elements each.
    pub fn new(
        setup: &TrustedSetup,
        domain: &Domain,
        data: Vec<Scalar>,
        sample_size: usize,
    ) -> Result<Self, KzgError> {
        if domain.size() != data.len() {
            return Err(KzgError::LengthMismatch {
                expected: domain.size(),
                found: data.len(),
            });
        }
        if !field::is_power_of_two(sample_size) || data.len() % sample_size != 0 {
            return Err(KzgError::InvalidCoset {
                reason: format!(
                    "sample size {sample_size} must be a power of two dividing the blob length {}",
                    data.len()
                ),
            });
        }

        let polynomial = kzg::blob_to_polynomial(domain, &data)?;
        let commitment = kzg::commit(setup, &polynomial)?;

        let samples_per_row = data.len() / sample_size;
        let samples = (0..samples_per_row)
            .map(|i| Sample::new(setup, &polynomial, &data, domain, i, sample_size))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(samples = samples.len(), "constructed blob");
        Ok(Self { commitment, samples })
    }

    pub fn sample(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }
}

/// `R` independent random blobs, addressable by linear index, row, or
/// column.
#[derive(Clone, Debug)]
pub struct BlobsMatrix {
    pub rows: Vec<Blob>,
    pub samples_per_row: usize,
}

impl BlobsMatrix {
    /// Builds a matrix of `rows` independent random blobs over the
    /// canonical domain, each split into samples of `sample_size`
    /// elements.
    pub fn random(
        setup: &TrustedSetup,
        domain: &Domain,
        rows: usize,
        sample_size: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, KzgError> {
        let n = domain.size();
        let samples_per_row = n / sample_size;

        let mut blob_rows = Vec::with_capacity(rows);
        for _ in 0..rows {
            let data: Vec<Scalar> = (0..n).map(|_| Scalar::rand(rng)).collect();
            blob_rows.push(Blob::new(setup, domain, data, sample_size)?);
        }

        info!(rows, samples_per_row, "built random blobs matrix");
        Ok(Self {
            rows: blob_rows,
            samples_per_row,
        })
    }

    /// The sample at `(row, col)` plus the commitment of its row.
    pub fn get_sample(&self, row: usize, col: usize) -> Option<(&Sample, G1Affine)> {
        let blob = self.rows.get(row)?;
        let sample = blob.sample(col)?;
        Some((sample, blob.commitment))
    }

    /// The sample at linear index `r`, mapped to `(r / samples_per_row, r
    /// % samples_per_row)`.
    pub fn get_sample_by_linear_index(&self, index: usize) -> Option<(&Sample, G1Affine)> {
        let row = index / self.samples_per_row;
        let col = index % self.samples_per_row;
        self.get_sample(row, col)
    }

    /// A uniformly random sample, using the half-open range `[0, n)` for
    /// both row and column selection.
    pub fn get_random_sample(&self, rng: &mut impl Rng) -> (&Sample, G1Affine) {
        let row = rng.gen_range(0..self.rows.len());
        let col = rng.gen_range(0..self.samples_per_row);
        self.get_sample(row, col)
            .expect("row and col are always in bounds by construction")
    }

    /// All samples of a given row, plus its commitment.
    pub fn get_row(&self, row: usize) -> Option<(&[Sample], G1Affine)> {
        let blob = self.rows.get(row)?;
        Some((blob.samples.as_slice(), blob.commitment))
    }

    /// A uniformly random row.
    pub fn get_random_row(&self, rng: &mut impl Rng) -> (&[Sample], G1Affine) {
        let row = rng.gen_range(0..self.rows.len());
        self.get_row(row)
            .expect("row is always in bounds by construction")
    }

    /// All samples at a given column, one per row, each paired with its
    /// row's commitment.
    pub fn get_column(&self, col: usize) -> Vec<(&Sample, G1Affine)> {
        self.rows
            .iter()
            .filter_map(|blob| blob.sample(col).map(|s| (s, blob.commitment)))
            .collect()
    }

    /// A uniformly random column.
    pub fn get_random_column(&self, rng: &mut impl Rng) -> Vec<(&Sample, G1Affine)> {
        let col = rng.gen_range(0..self.samples_per_row);
        self.get_column(col)
    }
}
