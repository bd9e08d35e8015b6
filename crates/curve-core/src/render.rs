//! Scaling curves to a viewport and the drawing surface contract.
//!
//! Front-ends implement [`CurveSurface`] for whatever they paint on; the
//! core only ever asks for a clear, a stroke style and one closed path.
//! Surface coordinates have their origin at the viewport centre.

use crate::constants::*;
use crate::error::{CurveError, Result};
use glam::DVec2;

/// Drawable area in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CurveError::EmptyViewport { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height) as f64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_array(c: [u8; 3]) -> Self {
        Self(c[0], c[1], c[2])
    }

    /// Channels in `[0, 1]`, for GPU clear colours and vertex data.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub background: Rgb,
    pub stroke: Rgb,
    pub line_width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            background: Rgb::from_array(BACKGROUND_RGB),
            stroke: Rgb::from_array(STROKE_RGB),
            line_width: DEFAULT_LINE_WIDTH_PX,
        }
    }
}

/// Something a closed polyline can be painted on.
pub trait CurveSurface {
    /// Current drawable size; an empty surface is an error.
    fn viewport(&self) -> Result<Viewport>;
    fn clear(&mut self, color: Rgb);
    fn set_stroke(&mut self, style: &StrokeStyle);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: DVec2);
    fn line_to(&mut self, p: DVec2);
    fn stroke(&mut self);
}

/// Scale factor mapping the curve's coordinate span onto the viewport.
///
/// The span is taken over x and y together, so aspect is preserved. A
/// degenerate span (all points equal) scales by 1.0.
pub fn scale_factor(points: &[DVec2], viewport: Viewport, padding: f64) -> f64 {
    let (z_min, z_max) = points
        .iter()
        .flat_map(|p| [p.x, p.y])
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    let span = z_max - z_min;
    if !span.is_finite() || span < SCALE_EPSILON {
        return 1.0;
    }
    let scale = (viewport.min_side() - padding) / span;
    if scale.is_finite() {
        scale
    } else {
        1.0
    }
}

pub fn fit_to_viewport(points: &[DVec2], viewport: Viewport, padding: f64) -> Vec<DVec2> {
    let scale = scale_factor(points, viewport, padding);
    points.iter().map(|p| *p * scale).collect()
}

/// Paint the background, then stroke the closed polyline.
///
/// The path starts at the last point and visits every point in order, which
/// closes the loop without repeating a vertex.
pub fn draw_closed_curve<S: CurveSurface + ?Sized>(
    surface: &mut S,
    points: &[DVec2],
    style: &StrokeStyle,
) {
    surface.clear(style.background);
    let Some(last) = points.last() else {
        return;
    };
    surface.set_stroke(style);
    surface.begin_path();
    surface.move_to(*last);
    for p in points {
        surface.line_to(*p);
    }
    surface.stroke();
}
