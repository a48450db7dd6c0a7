use approx::assert_relative_eq;
use imgsketch::{fourier_sketch, sparse_sketch_with_rng};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn banded_image(rows: usize, cols: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |(i, j)| {
        let t = (i * cols + j) as f64 / (rows * cols) as f64;
        (t * 6.0 * std::f64::consts::PI).cos() + 0.3
    })
}

#[test]
fn fourier_error_shrinks_as_rank_grows() {
    let img = banded_image(8, 8);
    let mut previous = f64::INFINITY;
    for k in [1, 4, 16, 33] {
        let sketch = fourier_sketch(&img.view(), k).unwrap();
        let err = (&sketch.reconstruct() - &img)
            .iter()
            .map(|v| v * v)
            .sum::<f64>()
            .sqrt();
        assert!(
            err <= previous + 1e-9,
            "reconstruction error grew from {previous} to {err} at k={k}"
        );
        previous = err;
    }
    // k = 33 is the full half-spectrum of 64 pixels.
    assert!(previous < 1e-9);
}

#[test]
fn dominant_cosine_is_captured_by_rank_two() {
    // One pure cosine over the flattened signal concentrates the spectrum
    // in the DC offset and a single pair-of-one bin.
    let img = banded_image(4, 8);
    let sketch = fourier_sketch(&img.view(), 2).unwrap();
    assert!(sketch.indices.contains(&0), "DC bin must be kept");
    assert_relative_eq!(sketch.reconstruct(), img, epsilon = 1e-9);
}

#[test]
fn both_sketches_agree_on_shapes() {
    let img = banded_image(5, 6);
    let fourier = fourier_sketch(&img.view(), 4).unwrap();
    let sparse =
        sparse_sketch_with_rng(&img.view(), 4, 1.0, &mut StdRng::seed_from_u64(17)).unwrap();
    assert_eq!(fourier.basis.dim(), sparse.basis.dim());
    assert_eq!(fourier.coefficients.len(), sparse.coefficients.len());
}
