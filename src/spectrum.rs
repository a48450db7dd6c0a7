//! Real-input FFT helpers on top of `rustfft`.
//!
//! `rustfft` only plans complex transforms, so the real-input forward
//! transform is a complex FFT truncated to its non-redundant half, and the
//! inverse rebuilds the conjugate-symmetric full spectrum before the complex
//! inverse FFT. Semantics match `numpy.fft.rfft` / `numpy.fft.irfft(n=...)`:
//! the output length of [`irfft`] is explicit, so odd lengths round-trip.

use ndarray::{Array1, ArrayView1};
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Number of non-redundant bins of a length-`n` real transform.
#[inline]
pub fn half_len(n: usize) -> usize {
    n / 2 + 1
}

/// Forward real-input DFT. Returns the half-spectrum of length `n/2 + 1`.
pub fn rfft(signal: &ArrayView1<f64>) -> Vec<Complex<f64>> {
    let n = signal.len();
    let mut buf: Vec<Complex<f64>> = signal.iter().map(|&re| Complex::new(re, 0.0)).collect();

    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(n).process(&mut buf);

    buf.truncate(half_len(n));
    buf
}

/// Inverse real DFT of a half-spectrum, producing `n` real samples.
///
/// `spectrum` must have length `n/2 + 1`. The mirrored bins are filled with
/// conjugates, so any imaginary part left in the DC or Nyquist bin is
/// discarded the way `numpy.fft.irfft` discards it.
pub fn irfft(spectrum: &[Complex<f64>], n: usize) -> Array1<f64> {
    debug_assert_eq!(spectrum.len(), half_len(n));
    let m = spectrum.len();

    let mut buf = vec![Complex::new(0.0, 0.0); n];
    for j in 0..n {
        buf[j] = if j < m {
            spectrum[j]
        } else {
            spectrum[n - j].conj()
        };
    }

    let mut planner = FftPlanner::new();
    planner.plan_fft_inverse(n).process(&mut buf);

    // rustfft leaves the inverse unnormalized.
    let scale = 1.0 / n as f64;
    Array1::from_iter(buf.iter().map(|c| c.re * scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn rfft_of_constant_is_dc_only() {
        let x = array![2.0, 2.0, 2.0, 2.0];
        let spec = rfft(&x.view());
        assert_eq!(spec.len(), 3);
        assert_relative_eq!(spec[0].re, 8.0, max_relative = 1e-12);
        for bin in &spec[1..] {
            assert_relative_eq!(bin.norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn round_trip_even_length() {
        let x = array![1.0, -2.5, 3.0, 0.25, -1.0, 4.0];
        let back = irfft(&rfft(&x.view()), x.len());
        assert_relative_eq!(back, x, epsilon = 1e-10);
    }

    #[test]
    fn round_trip_odd_length() {
        let x = array![0.5, 1.5, -3.0, 2.0, 7.25];
        let spec = rfft(&x.view());
        assert_eq!(spec.len(), 3);
        let back = irfft(&spec, x.len());
        assert_relative_eq!(back, x, epsilon = 1e-10);
    }

    #[test]
    fn round_trip_single_sample() {
        let x = array![42.0];
        let back = irfft(&rfft(&x.view()), 1);
        assert_relative_eq!(back, x, epsilon = 1e-12);
    }
}
