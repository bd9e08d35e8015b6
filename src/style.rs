use curve_core::Rgb;

/// CSS colour string accepted by `fillStyle`/`strokeStyle`.
#[inline]
pub fn css_rgb(color: Rgb) -> String {
    format!("rgb({}, {}, {})", color.0, color.1, color.2)
}

/// Offset that puts the canvas origin at its centre.
#[inline]
pub fn centre_offset(width: u32, height: u32) -> (f64, f64) {
    (width as f64 / 2.0, height as f64 / 2.0)
}
