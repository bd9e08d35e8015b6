//! Blending between control points in coefficient space.
//!
//! Both policies work index-wise on magnitudes and angles. Every descriptor
//! in a window comes from the same configuration, so sequences line up.

use crate::curve::CurveDescriptor;
use smallvec::SmallVec;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InterpolationMode {
    /// Straight blend between two control points. Continuous in position only.
    Linear,
    /// Uniform cubic B-spline over four control points. C² across segments.
    #[default]
    Cubic,
}

impl InterpolationMode {
    /// Control points the policy reads.
    pub const fn window_len(self) -> usize {
        match self {
            Self::Linear => 2,
            Self::Cubic => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Cubic => "cubic",
        }
    }
}

impl FromStr for InterpolationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "cubic" | "bspline" | "b-spline" => Ok(Self::Cubic),
            other => Err(format!("unknown interpolation mode '{other}'")),
        }
    }
}

/// Rolling buffer of control points, oldest first.
///
/// The length never changes after construction: [`ControlWindow::push_evict`]
/// drops the oldest entry for every one it appends.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlWindow {
    points: SmallVec<[CurveDescriptor; 4]>,
}

impl ControlWindow {
    pub fn new(points: impl IntoIterator<Item = CurveDescriptor>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    pub fn push_evict(&mut self, next: CurveDescriptor) -> Option<CurveDescriptor> {
        if self.points.is_empty() {
            return None;
        }
        let evicted = self.points.remove(0);
        self.points.push(next);
        Some(evicted)
    }

    #[inline]
    pub fn points(&self) -> &[CurveDescriptor] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn blend_with(points: &[&CurveDescriptor], weights: &[f64]) -> CurveDescriptor {
    let len = points.iter().map(|p| p.len()).min().unwrap_or(0);
    CurveDescriptor::from_terms((0..len).map(|k| {
        points
            .iter()
            .zip(weights)
            .fold((0.0, 0.0), |(m, a), (p, w)| {
                (m + p.magnitudes()[k] * w, a + p.angles()[k] * w)
            })
    }))
}

/// Linear weights for `t`.
#[inline]
pub fn linear_weights(t: f64) -> [f64; 2] {
    [1.0 - t, t]
}

/// Uniform cubic B-spline basis at `t`, already divided by 6.
///
/// Expanding the power form
/// `(P1+4P2+P3) + t(-3P1+3P3) + t²(3P1-6P2+3P3) + t³(-P1+3P2-3P3+P4)`
/// per control point gives these four polynomials.
#[inline]
pub fn cubic_weights(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        (1.0 - 3.0 * t + 3.0 * t2 - t3) / 6.0,
        (4.0 - 6.0 * t2 + 3.0 * t3) / 6.0,
        (1.0 + 3.0 * t + 3.0 * t2 - 3.0 * t3) / 6.0,
        t3 / 6.0,
    ]
}

pub fn blend_linear(p1: &CurveDescriptor, p2: &CurveDescriptor, t: f64) -> CurveDescriptor {
    blend_with(&[p1, p2], &linear_weights(t))
}

pub fn blend_cubic(
    p1: &CurveDescriptor,
    p2: &CurveDescriptor,
    p3: &CurveDescriptor,
    p4: &CurveDescriptor,
    t: f64,
) -> CurveDescriptor {
    blend_with(&[p1, p2, p3, p4], &cubic_weights(t))
}

/// Blend the newest `mode.window_len()` points of `window` at `t`.
///
/// Returns `None` when the window is too short for the mode.
pub fn blend(mode: InterpolationMode, window: &ControlWindow, t: f64) -> Option<CurveDescriptor> {
    let points = window.points();
    let start = points.len().checked_sub(mode.window_len())?;
    match (mode, &points[start..]) {
        (InterpolationMode::Linear, [p1, p2]) => Some(blend_linear(p1, p2, t)),
        (InterpolationMode::Cubic, [p1, p2, p3, p4]) => Some(blend_cubic(p1, p2, p3, p4, t)),
        _ => None,
    }
}
