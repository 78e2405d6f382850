//! Prior samplers for latent-distribution matching
//!
//! The adversarial epochs match the encoder's code distribution against
//! samples drawn here: an isotropic Gaussian, a ring-of-components
//! Gaussian mixture (optionally conditioned on class labels), or a uniform
//! categorical prior for the discrete code.

use ndarray::Array2;
use rand::Rng;

/// Radial offset of each mixture component from the origin
const MIXTURE_SHIFT: f32 = 1.4;

/// Standard normal sample via the Box-Muller transform
fn standard_normal<R: Rng>(rng: &mut R) -> f32 {
    let u1: f64 = rng.random::<f64>().max(1e-10);
    let u2: f64 = rng.random::<f64>();
    ((-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()) as f32
}

/// Isotropic Gaussian prior, shape `(n, dim)`
pub fn diagonal_gaussian<R: Rng>(
    rng: &mut R,
    n: usize,
    dim: usize,
    mean: f32,
    var: f32,
) -> Array2<f32> {
    let std = var.sqrt();
    Array2::from_shape_fn((n, dim), |_| mean + std * standard_normal(rng))
}

/// Gaussian-mixture prior with `n_labels` components on a ring
///
/// Each component is an axis-aligned 2-D Gaussian (`x_var` along the
/// radial axis, `y_var` tangential) rotated by `2π·label/n_labels` and
/// shifted outward; higher code dimensions tile the same 2-D layout per
/// coordinate pair. When `labels` is given each sample is drawn from its
/// label's component, otherwise components are picked uniformly.
///
/// # Panics
///
/// Panics if `n_dim` is odd: the mixture layout is defined on pairs.
pub fn gaussian_mixture<R: Rng>(
    rng: &mut R,
    n: usize,
    n_dim: usize,
    n_labels: usize,
    x_var: f32,
    y_var: f32,
    labels: Option<&[usize]>,
) -> Array2<f32> {
    assert!(n_dim % 2 == 0, "mixture prior needs an even code dimension");

    let x_std = x_var.sqrt();
    let y_std = y_var.sqrt();
    let mut out = Array2::zeros((n, n_dim));

    for i in 0..n {
        let label = match labels {
            Some(ls) => ls[i] % n_labels,
            None => rng.random_range(0..n_labels),
        };
        let r = 2.0 * std::f32::consts::PI * label as f32 / n_labels as f32;
        let (sin_r, cos_r) = r.sin_cos();

        for d in (0..n_dim).step_by(2) {
            let x = x_std * standard_normal(rng);
            let y = y_std * standard_normal(rng);
            out[[i, d]] = x * cos_r - y * sin_r + MIXTURE_SHIFT * cos_r;
            out[[i, d + 1]] = x * sin_r + y * cos_r + MIXTURE_SHIFT * sin_r;
        }
    }
    out
}

/// Uniform categorical prior: one class index per sample
pub fn uniform_categorical<R: Rng>(rng: &mut R, n: usize, n_class: usize) -> Vec<usize> {
    (0..n).map(|_| rng.random_range(0..n_class)).collect()
}
