//! Harmonic curve descriptors: generation and evaluation.
//!
//! A descriptor is a truncated Fourier series. Term `k` is a vector of length
//! `magnitudes[k]` rotating at angular speed `angles[k]`; summing all terms
//! while theta sweeps `[0, 2π)` traces a closed curve in the complex plane.

use crate::config::CurveConfig;
use crate::error::{CurveError, Result};
use crate::random::RandomSource;
use glam::DVec2;
use std::f64::consts::TAU;

/// One control point in coefficient space.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveDescriptor {
    magnitudes: Vec<f64>,
    angles: Vec<f64>,
}

impl CurveDescriptor {
    pub fn from_parts(magnitudes: Vec<f64>, angles: Vec<f64>) -> Result<Self> {
        if magnitudes.len() != angles.len() {
            return Err(CurveError::CoefficientMismatch {
                magnitudes: magnitudes.len(),
                angles: angles.len(),
            });
        }
        Ok(Self { magnitudes, angles })
    }

    /// Build from coefficient pairs, which cannot mismatch.
    pub fn from_terms(terms: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let (magnitudes, angles): (Vec<f64>, Vec<f64>) = terms.into_iter().unzip();
        Self { magnitudes, angles }
    }

    #[inline]
    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    #[inline]
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Iterate `(magnitude, angle)` pairs.
    pub fn terms(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.magnitudes
            .iter()
            .copied()
            .zip(self.angles.iter().copied())
    }
}

/// Magnitude normalisation shared by every term of a generated curve.
#[inline]
pub fn magnitude_scale(steps: u32, dimensions: u32, decay: f64) -> f64 {
    let n = (steps as f64 * dimensions as f64 + 1.0).abs() + 0.5;
    n.powf(decay)
}

/// Random curve with `2 * steps` terms for `i` in `[-steps, steps)`.
///
/// Angles are `i * dimensions + 1` and do not depend on the random stream;
/// magnitudes are standard-normal draws divided by [`magnitude_scale`].
pub fn generate(
    steps: u32,
    dimensions: u32,
    decay: f64,
    rng: &mut impl RandomSource,
) -> CurveDescriptor {
    let scale = magnitude_scale(steps, dimensions, decay);
    let steps = steps as i64;
    let dimensions = dimensions as i64;
    CurveDescriptor::from_terms((-steps..steps).map(|i| {
        let magnitude = rng.standard_normal() / scale;
        let angle = (i * dimensions + 1) as f64;
        (magnitude, angle)
    }))
}

impl CurveConfig {
    pub fn generate(&self, rng: &mut impl RandomSource) -> CurveDescriptor {
        generate(self.steps, self.dimensions, self.decay, rng)
    }
}

/// Point on the curve at `theta`; `x` is the real part, `y` the imaginary.
pub fn evaluate_point(curve: &CurveDescriptor, theta: f64) -> DVec2 {
    curve
        .terms()
        .fold(DVec2::ZERO, |acc, (magnitude, angle)| {
            let (sin, cos) = (angle * theta).sin_cos();
            acc + DVec2::new(magnitude * cos, magnitude * sin)
        })
}

/// Sample the curve at `theta_i = 2π·i / theta_resolution`.
pub fn evaluate_curve(curve: &CurveDescriptor, theta_resolution: usize) -> Vec<DVec2> {
    (0..theta_resolution)
        .map(|i| {
            let theta = TAU * i as f64 / theta_resolution as f64;
            evaluate_point(curve, theta)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;

    #[test]
    fn lengths_follow_steps() {
        let mut rng = RngSource::seeded(9);
        for steps in 1..6 {
            let c = generate(steps, 4, 1.5, &mut rng);
            assert_eq!(c.magnitudes().len(), 2 * steps as usize);
            assert_eq!(c.angles().len(), 2 * steps as usize);
        }
    }

    #[test]
    fn angles_are_deterministic() {
        let mut a = RngSource::seeded(1);
        let mut b = RngSource::seeded(2);
        let ca = generate(3, 7, 1.5, &mut a);
        let cb = generate(3, 7, 1.5, &mut b);
        assert_eq!(ca.angles(), cb.angles());
        for (k, angle) in ca.angles().iter().enumerate() {
            assert_eq!(*angle, ((k as i64 - 3) * 7 + 1) as f64);
        }
        assert_ne!(ca.magnitudes(), cb.magnitudes());
    }

    #[test]
    fn mismatched_parts_are_rejected() {
        let err = CurveDescriptor::from_parts(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert_eq!(
            err,
            CurveError::CoefficientMismatch {
                magnitudes: 2,
                angles: 1
            }
        );
    }

    #[test]
    fn single_term_traces_unit_circle() {
        let c = CurveDescriptor::from_terms([(1.0, 1.0)]);
        for p in evaluate_curve(&c, 64) {
            assert!((p.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn evaluation_is_periodic() {
        let mut rng = RngSource::seeded(5);
        let c = generate(2, 5, 1.5, &mut rng);
        for theta in [0.0, 0.3, 1.7, 4.0] {
            let a = evaluate_point(&c, theta);
            let b = evaluate_point(&c, theta + TAU);
            assert!((a - b).length() < 1e-9, "theta {theta}: {a} vs {b}");
        }
    }

    #[test]
    fn empty_descriptor_evaluates_to_origin() {
        let c = CurveDescriptor::from_terms(std::iter::empty());
        assert!(c.is_empty());
        assert_eq!(evaluate_point(&c, 1.0), DVec2::ZERO);
    }
}
