//! Startup configuration.
//!
//! [`CurveSettings`] is what a front-end collects (defaults, flags, URL
//! parameters). Resolving it draws the dimension count when it is random and
//! validates everything, yielding the immutable [`CurveConfig`] that an
//! animation runs with.

use crate::constants::*;
use crate::error::{CurveError, Result};
use crate::interpolate::InterpolationMode;
use crate::random::RandomSource;

/// How the rotational symmetry order is picked at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionChoice {
    Fixed(u32),
    /// Uniform over the inclusive range.
    Uniform { min: u32, max: u32 },
}

impl Default for DimensionChoice {
    fn default() -> Self {
        Self::Uniform {
            min: DEFAULT_DIMENSIONS_MIN,
            max: DEFAULT_DIMENSIONS_MAX,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CurveSettings {
    pub dimensions: DimensionChoice,
    pub steps: u32,
    pub decay: f64,
    pub theta_resolution: usize,
    pub interpolation_resolution: u32,
    pub interpolation_timestep_ms: u32,
    pub mode: InterpolationMode,
    pub padding: f64,
    /// Seed for the curve stream; `None` means entropy.
    pub seed: Option<u64>,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            dimensions: DimensionChoice::default(),
            steps: DEFAULT_STEPS,
            decay: DEFAULT_DECAY,
            theta_resolution: DEFAULT_THETA_RESOLUTION,
            interpolation_resolution: DEFAULT_INTERPOLATION_RESOLUTION,
            interpolation_timestep_ms: DEFAULT_INTERPOLATION_TIMESTEP_MS,
            mode: InterpolationMode::Cubic,
            padding: DEFAULT_PADDING_PX,
            seed: None,
        }
    }
}

impl CurveSettings {
    /// Draw the dimension count if needed and validate the result.
    pub fn resolve(&self, rng: &mut impl RandomSource) -> Result<CurveConfig> {
        let dimensions = match self.dimensions {
            DimensionChoice::Fixed(d) => d,
            DimensionChoice::Uniform { min, max } => {
                if min < 1 || min > max {
                    return Err(CurveError::InvalidDimensionRange { min, max });
                }
                rng.integer(min as i64, max as i64) as u32
            }
        };
        let config = CurveConfig {
            dimensions,
            steps: self.steps,
            decay: self.decay,
            theta_resolution: self.theta_resolution,
            interpolation_resolution: self.interpolation_resolution,
            interpolation_timestep_ms: self.interpolation_timestep_ms,
            mode: self.mode,
            padding: self.padding,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Validated parameters for one animation. Fixed for its lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveConfig {
    pub dimensions: u32,
    pub steps: u32,
    pub decay: f64,
    pub theta_resolution: usize,
    pub interpolation_resolution: u32,
    pub interpolation_timestep_ms: u32,
    pub mode: InterpolationMode,
    pub padding: f64,
}

impl CurveConfig {
    pub fn validate(&self) -> Result<()> {
        if self.steps < 1 {
            return Err(CurveError::InvalidSteps(self.steps));
        }
        if self.dimensions < 1 {
            return Err(CurveError::InvalidDimensions(self.dimensions));
        }
        if !(self.decay.is_finite() && self.decay > 0.0) {
            return Err(CurveError::InvalidDecay(self.decay));
        }
        if self.theta_resolution < 3 {
            return Err(CurveError::InvalidThetaResolution(self.theta_resolution));
        }
        if self.interpolation_resolution < 1 {
            return Err(CurveError::InvalidInterpolationResolution(
                self.interpolation_resolution,
            ));
        }
        if self.interpolation_timestep_ms == 0 {
            return Err(CurveError::InvalidTimestep(self.interpolation_timestep_ms));
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(CurveError::InvalidPadding(self.padding));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;

    fn fixed(dimensions: u32) -> CurveSettings {
        CurveSettings {
            dimensions: DimensionChoice::Fixed(dimensions),
            ..CurveSettings::default()
        }
    }

    #[test]
    fn defaults_resolve() {
        let mut rng = RngSource::seeded(1);
        let config = CurveSettings::default().resolve(&mut rng).unwrap();
        assert!((DEFAULT_DIMENSIONS_MIN..=DEFAULT_DIMENSIONS_MAX).contains(&config.dimensions));
        assert_eq!(config.steps, 2);
        assert_eq!(config.theta_resolution, 2000);
        assert_eq!(config.mode, InterpolationMode::Cubic);
    }

    #[test]
    fn fixed_dimensions_are_used_verbatim() {
        let mut rng = RngSource::seeded(1);
        let config = fixed(5).resolve(&mut rng).unwrap();
        assert_eq!(config.dimensions, 5);
    }

    #[test]
    fn rejects_each_invalid_field() {
        let mut rng = RngSource::seeded(1);
        let cases = [
            (
                CurveSettings { steps: 0, ..fixed(5) },
                CurveError::InvalidSteps(0),
            ),
            (fixed(0), CurveError::InvalidDimensions(0)),
            (
                CurveSettings { decay: 0.0, ..fixed(5) },
                CurveError::InvalidDecay(0.0),
            ),
            (
                CurveSettings { theta_resolution: 2, ..fixed(5) },
                CurveError::InvalidThetaResolution(2),
            ),
            (
                CurveSettings { interpolation_resolution: 0, ..fixed(5) },
                CurveError::InvalidInterpolationResolution(0),
            ),
            (
                CurveSettings { interpolation_timestep_ms: 0, ..fixed(5) },
                CurveError::InvalidTimestep(0),
            ),
            (
                CurveSettings { padding: -1.0, ..fixed(5) },
                CurveError::InvalidPadding(-1.0),
            ),
            (
                CurveSettings {
                    dimensions: DimensionChoice::Uniform { min: 6, max: 4 },
                    ..CurveSettings::default()
                },
                CurveError::InvalidDimensionRange { min: 6, max: 4 },
            ),
        ];
        for (settings, expected) in cases {
            assert_eq!(settings.resolve(&mut rng), Err(expected));
        }
    }

    #[test]
    fn nan_decay_is_rejected() {
        let mut rng = RngSource::seeded(1);
        let settings = CurveSettings { decay: f64::NAN, ..fixed(5) };
        assert!(matches!(
            settings.resolve(&mut rng),
            Err(CurveError::InvalidDecay(_))
        ));
    }
}
