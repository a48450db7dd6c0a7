//! # imgsketch
//!
//! Low-rank image sketching routines.
//!
//! Two independent, stateless transforms over a real-valued image array:
//!
//! - [`fourier_sketch`] keeps the k dominant Fourier bins of the flattened
//!   image and materializes their sinusoidal basis vectors.
//! - [`sparse_sketch`] draws a random normal basis and solves the
//!   L1-penalized least-squares program for the sparsest representation.
//!
//! Both return a sketch struct pairing the basis with its coefficients and
//! offering `reconstruct()` back into the original image shape.

pub mod error;
pub mod fourier;
pub mod sparse;
pub mod spectrum;

pub use error::{Result, SketchError};
pub use fourier::{fourier_sketch, FourierSketch};
pub use sparse::{sparse_sketch, sparse_sketch_with_rng, SparseSketch};
