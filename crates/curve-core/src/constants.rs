// Shared curve and drawing defaults used by both web and native frontends.

// Curve shape
pub const DEFAULT_STEPS: u32 = 2; // harmonics on each side of the fundamental
pub const DEFAULT_DECAY: f64 = 1.5; // magnitude attenuation exponent
pub const DEFAULT_DIMENSIONS_MIN: u32 = 3; // inclusive range for a random symmetry order
pub const DEFAULT_DIMENSIONS_MAX: u32 = 10;

// Sampling and timing
pub const DEFAULT_THETA_RESOLUTION: usize = 2000; // line segments approximating the curve
pub const DEFAULT_INTERPOLATION_RESOLUTION: u32 = 100; // frames between control points
pub const DEFAULT_INTERPOLATION_TIMESTEP_MS: u32 = 100; // milliseconds between frames

// Drawing
pub const DEFAULT_PADDING_PX: f64 = 20.0; // subtracted from the smaller viewport side
pub const DEFAULT_LINE_WIDTH_PX: f64 = 5.0;
pub const BACKGROUND_RGB: [u8; 3] = [230, 230, 230];
pub const STROKE_RGB: [u8; 3] = [50, 50, 50];

// Coordinate spans below this are treated as a single point when scaling
pub const SCALE_EPSILON: f64 = 1e-12;
