use thiserror::Error;

/// Errors raised while configuring or driving a curve animation.
///
/// Everything after startup is pure arithmetic, so apart from
/// [`CurveError::EmptyViewport`] these only come out of configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("steps must be at least 1, got {0}")]
    InvalidSteps(u32),
    #[error("dimensions must be at least 1, got {0}")]
    InvalidDimensions(u32),
    #[error("dimension range {min}..={max} is empty or starts below 1")]
    InvalidDimensionRange { min: u32, max: u32 },
    #[error("decay must be a finite value above 0, got {0}")]
    InvalidDecay(f64),
    #[error("theta resolution must be at least 3, got {0}")]
    InvalidThetaResolution(usize),
    #[error("interpolation resolution must be at least 1, got {0}")]
    InvalidInterpolationResolution(u32),
    #[error("interpolation timestep must be above 0 ms, got {0}")]
    InvalidTimestep(u32),
    #[error("padding must be a finite value of at least 0, got {0}")]
    InvalidPadding(f64),
    #[error("viewport {width}x{height} has no drawable area")]
    EmptyViewport { width: u32, height: u32 },
    #[error("coefficient sequences differ in length: {magnitudes} magnitudes, {angles} angles")]
    CoefficientMismatch { magnitudes: usize, angles: usize },
}

pub type Result<T> = std::result::Result<T, CurveError>;
