//! L1-penalized least squares via accelerated proximal gradient (FISTA).
//!
//! Solves `min_x ||y - Ax||_2^2 + alpha * ||x||_1`. The smooth part has
//! gradient `2 A^T (Ax - y)` with Lipschitz constant `2 lambda_max(A^T A)`,
//! estimated by power iteration on the k x k Gram matrix; the L1 prox is
//! plain soft-thresholding.

use ndarray::{Array1, ArrayView1, ArrayView2};
use num_traits::Float;

use crate::error::{Result, SketchError};

/// Iteration cap and stopping tolerance for [`solve_l1`].
#[derive(Debug, Clone, Copy)]
pub struct SolverOptions {
    pub max_iters: usize,
    /// Stop once the infinity norm of an iterate step falls below this.
    pub tol: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            max_iters: 20_000,
            tol: 1e-11,
        }
    }
}

/// Proximal operator of `thr * |v|`.
#[inline]
pub(crate) fn soft_threshold<F: Float>(v: F, thr: F) -> F {
    if v > thr {
        v - thr
    } else if v < -thr {
        v + thr
    } else {
        F::zero()
    }
}

/// Largest eigenvalue of `A^T A`, by power iteration on the Gram matrix.
fn gram_spectral_bound(a: &ArrayView2<f64>) -> f64 {
    let gram = a.t().dot(a);
    let k = gram.nrows();

    let mut b = Array1::from_elem(k, 1.0 / (k as f64).sqrt());
    for _ in 0..60 {
        let next = gram.dot(&b);
        let norm = next.dot(&next).sqrt();
        if norm < f64::MIN_POSITIVE {
            return 0.0;
        }
        b = next / norm;
    }
    b.dot(&gram.dot(&b))
}

/// Minimizes `||y - Ax||_2^2 + alpha * ||x||_1` over x.
///
/// Returns the converged iterate, or the best iterate found once
/// `opts.max_iters` is exhausted. Divergence (non-finite iterates) and
/// non-finite inputs are errors.
pub fn solve_l1(
    a: &ArrayView2<f64>,
    y: &ArrayView1<f64>,
    alpha: f64,
    opts: &SolverOptions,
) -> Result<Array1<f64>> {
    if !alpha.is_finite() || alpha < 0.0 {
        return Err(SketchError::InvalidPenalty(alpha));
    }
    if y.iter().any(|v| !v.is_finite()) || a.iter().any(|v| !v.is_finite()) {
        return Err(SketchError::NonFiniteInput);
    }

    let k = a.ncols();
    let lambda_max = gram_spectral_bound(a);
    if lambda_max <= f64::EPSILON {
        // A is (numerically) zero: every residual is y, so the penalty
        // makes x = 0 optimal.
        return Ok(Array1::zeros(k));
    }
    let step = 1.0 / (2.0 * lambda_max);

    let mut x = Array1::<f64>::zeros(k);
    let mut z = x.clone();
    let mut t = 1.0;

    for iter in 0..opts.max_iters {
        let grad = a.t().dot(&(a.dot(&z) - y)) * 2.0;
        let x_next = (&z - &(grad * step)).mapv(|v| soft_threshold(v, alpha * step));
        if x_next.iter().any(|v| !v.is_finite()) {
            return Err(SketchError::Diverged);
        }

        let t_next = 0.5 * (1.0 + (1.0 + 4.0 * t * t).sqrt());
        let diff = &x_next - &x;
        let delta = diff.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        z = &x_next + &(diff * ((t - 1.0) / t_next));
        x = x_next;
        t = t_next;

        if delta < opts.tol {
            log::debug!("l1 solver converged after {} iterations", iter + 1);
            return Ok(x);
        }
    }

    log::warn!(
        "l1 solver hit the {}-iteration cap, returning last iterate",
        opts.max_iters
    );
    Ok(x)
}
