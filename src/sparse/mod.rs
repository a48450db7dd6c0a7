//! Random-basis sparse sketching.
//!
//! Draws a fresh standard-normal basis and fits the sparsest coefficient
//! vector reconstructing the image under an L1 penalty:
//!
//! `min_x ||y - Ax||_2^2 + alpha * ||x||_1`
//!
//! where y is the flattened image, A the random basis and x the
//! representation.

pub mod solver;

use ndarray::{Array1, Array2, ArrayView2};
use ndarray_rand::rand_distr::StandardNormal;
use ndarray_rand::RandomExt;
use rand::Rng;

use crate::error::{Result, SketchError};
pub use solver::{solve_l1, SolverOptions};

/// A rank-k random-basis approximation of an image.
#[derive(Debug, Clone)]
pub struct SparseSketch {
    pub basis: Array2<f64>,
    pub coefficients: Array1<f64>,
    pub rows: usize,
    pub cols: usize,
}

/// Sketches the image against a fresh unseeded random basis.
///
/// Results differ between calls; use [`sparse_sketch_with_rng`] with a
/// seeded generator when reproducibility matters.
pub fn sparse_sketch(img: &ArrayView2<f64>, k: usize, alpha: f64) -> Result<SparseSketch> {
    sparse_sketch_with_rng(img, k, alpha, &mut rand::thread_rng())
}

/// Sketches the image against a basis drawn from the supplied generator.
pub fn sparse_sketch_with_rng<R: Rng + ?Sized>(
    img: &ArrayView2<f64>,
    k: usize,
    alpha: f64,
    rng: &mut R,
) -> Result<SparseSketch> {
    let (rows, cols) = img.dim();
    let n = rows * cols;
    if n == 0 {
        return Err(SketchError::EmptyImage);
    }
    if k == 0 {
        return Err(SketchError::RankOutOfRange { k, max: n });
    }

    let y = Array1::from_iter(img.iter().copied());
    let basis = Array2::<f64>::random_using((n, k), StandardNormal, rng);
    let coefficients = solve_l1(&basis.view(), &y.view(), alpha, &SolverOptions::default())?;

    Ok(SparseSketch {
        basis,
        coefficients,
        rows,
        cols,
    })
}

impl SparseSketch {
    /// `A x` folded back into the original image shape.
    pub fn reconstruct(&self) -> Array2<f64> {
        self.basis
            .dot(&self.coefficients)
            .into_shape((self.rows, self.cols))
            .expect("pixel count preserved")
    }
}
