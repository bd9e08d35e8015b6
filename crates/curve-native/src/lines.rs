//! CPU-side path building for the native renderer.
//!
//! wgpu has no wide lines, so each stroked segment becomes a quad (two
//! triangles) in clip space. [`LineBatch`] collects one frame's worth.

use curve_core::{CurveSurface, Rgb, StrokeStyle, Viewport};
use glam::{DVec2, Vec2};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 3],
}

/// sRGB-encoded channel to linear light, for sRGB swapchains.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub struct LineBatch {
    width: u32,
    height: u32,
    linear_output: bool,
    clear: [f32; 3],
    color: [f32; 3],
    line_width: f64,
    path: Vec<DVec2>,
    vertices: Vec<Vertex>,
}

impl LineBatch {
    pub fn new(width: u32, height: u32, linear_output: bool) -> Self {
        Self {
            width,
            height,
            linear_output,
            clear: [0.0; 3],
            color: [1.0; 3],
            line_width: 1.0,
            path: Vec::new(),
            vertices: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn clear_color(&self) -> [f32; 3] {
        self.clear
    }

    fn encode(&self, color: Rgb) -> [f32; 3] {
        let unit = color.to_unit();
        if self.linear_output {
            unit.map(srgb_to_linear)
        } else {
            unit
        }
    }

    /// Centre-origin pixels (y down) to clip space (y up).
    fn to_clip(&self, p: DVec2) -> Vec2 {
        let half = DVec2::new(self.width as f64 / 2.0, self.height as f64 / 2.0);
        Vec2::new((p.x / half.x) as f32, (-p.y / half.y) as f32)
    }

    fn push_segment(&mut self, a: DVec2, b: DVec2) {
        let dir = (b - a).normalize_or_zero();
        if dir == DVec2::ZERO {
            return;
        }
        let offset = dir.perp() * (self.line_width / 2.0);
        let corners = [a + offset, a - offset, b + offset, b - offset].map(|p| self.to_clip(p));
        for i in [0, 1, 2, 2, 1, 3] {
            self.vertices.push(Vertex {
                pos: corners[i].to_array(),
                color: self.color,
            });
        }
    }
}

impl CurveSurface for LineBatch {
    fn viewport(&self) -> curve_core::Result<Viewport> {
        Viewport::new(self.width, self.height)
    }

    fn clear(&mut self, color: Rgb) {
        self.clear = self.encode(color);
        self.vertices.clear();
        self.path.clear();
    }

    fn set_stroke(&mut self, style: &StrokeStyle) {
        self.color = self.encode(style.stroke);
        self.line_width = style.line_width;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: DVec2) {
        self.path.clear();
        self.path.push(p);
    }

    fn line_to(&mut self, p: DVec2) {
        self.path.push(p);
    }

    fn stroke(&mut self) {
        let path = std::mem::take(&mut self.path);
        for pair in path.windows(2) {
            self.push_segment(pair[0], pair[1]);
        }
        self.path = path;
    }
}
