//! Truncated Fourier sketching.
//!
//! A sketch keeps the k half-spectrum bins with the largest magnitudes. Each
//! kept bin is turned into a real basis column by inverse-transforming a
//! one-hot half-spectrum, so `basis` spans exactly the k dominant sinusoids
//! of the flattened image.

use ndarray::{Array1, Array2, ArrayView2, Axis};
use rayon::prelude::*;
use rustfft::num_complex::Complex;

use crate::error::{Result, SketchError};
use crate::spectrum::{half_len, irfft, rfft};

/// A rank-k Fourier approximation of an image.
///
/// `basis` is N x k (N = pixel count), `coefficients` holds the complex
/// spectrum values of the selected bins, and `indices` records which bins
/// were kept so the sketch can be inverted exactly.
#[derive(Debug, Clone)]
pub struct FourierSketch {
    pub basis: Array2<f64>,
    pub coefficients: Array1<Complex<f64>>,
    pub indices: Vec<usize>,
    pub rows: usize,
    pub cols: usize,
}

/// Extracts the k Fourier basis vectors with the top projection coefficients.
///
/// Valid ranks are `1..=N/2 + 1`, the length of the non-redundant
/// half-spectrum of the flattened image.
pub fn fourier_sketch(img: &ArrayView2<f64>, k: usize) -> Result<FourierSketch> {
    let (rows, cols) = img.dim();
    let n = rows * cols;
    if n == 0 {
        return Err(SketchError::EmptyImage);
    }

    let flat = Array1::from_iter(img.iter().copied());
    let spectrum = rfft(&flat.view());
    let m = spectrum.len();
    if k == 0 || k > m {
        return Err(SketchError::RankOutOfRange { k, max: m });
    }

    // Stable descending sort on magnitude; ties keep the lower bin first.
    let mut order: Vec<usize> = (0..m).collect();
    order.sort_by(|&a, &b| spectrum[b].norm().total_cmp(&spectrum[a].norm()));
    order.truncate(k);

    let coefficients = Array1::from_iter(order.iter().map(|&i| spectrum[i]));
    log::debug!(
        "fourier sketch: n={}, keeping {}/{} bins, top magnitude {:.3e}",
        n,
        k,
        m,
        coefficients[0].norm()
    );

    let mut basis = Array2::<f64>::zeros((n, k));
    basis
        .axis_iter_mut(Axis(1))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut col)| {
            let mut one_hot = vec![Complex::new(0.0, 0.0); m];
            one_hot[order[i]] = Complex::new(1.0, 0.0);
            col.assign(&irfft(&one_hot, n));
        });

    Ok(FourierSketch {
        basis,
        coefficients,
        indices: order,
        rows,
        cols,
    })
}

impl FourierSketch {
    /// Inverse of the sketch: scatters the kept coefficients back into a
    /// zero half-spectrum and inverse-transforms. Exact round trip when
    /// every bin was kept.
    pub fn reconstruct(&self) -> Array2<f64> {
        let n = self.rows * self.cols;
        let mut spectrum = vec![Complex::new(0.0, 0.0); half_len(n)];
        for (&bin, &value) in self.indices.iter().zip(self.coefficients.iter()) {
            spectrum[bin] = value;
        }
        irfft(&spectrum, n)
            .into_shape((self.rows, self.cols))
            .expect("pixel count preserved")
    }
}
