//! Command-line argument parsing.

use clap::Parser;
use curve_core::{
    CurveSettings, DimensionChoice, InterpolationMode, DEFAULT_DECAY,
    DEFAULT_INTERPOLATION_RESOLUTION, DEFAULT_INTERPOLATION_TIMESTEP_MS, DEFAULT_PADDING_PX,
    DEFAULT_STEPS, DEFAULT_THETA_RESOLUTION,
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "curvedrift")]
#[command(about = "Endlessly morphing harmonic curve", long_about = None)]
pub struct Args {
    /// Rotational symmetry order (drawn from 3..=10 when omitted)
    #[arg(long)]
    pub dimensions: Option<u32>,

    /// Harmonics on each side of the fundamental
    #[arg(long, default_value_t = DEFAULT_STEPS)]
    pub steps: u32,

    /// Exponent attenuating harmonic magnitudes
    #[arg(long, default_value_t = DEFAULT_DECAY)]
    pub decay: f64,

    /// Line segments approximating the curve
    #[arg(long, value_name = "SAMPLES", default_value_t = DEFAULT_THETA_RESOLUTION)]
    pub theta_resolution: usize,

    /// Frames spent moving between consecutive control points
    #[arg(long, value_name = "FRAMES", default_value_t = DEFAULT_INTERPOLATION_RESOLUTION)]
    pub interpolation_resolution: u32,

    /// Milliseconds between frames
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_INTERPOLATION_TIMESTEP_MS)]
    pub timestep_ms: u32,

    /// Interpolation between control points: linear or cubic
    #[arg(long, default_value = "cubic")]
    pub mode: InterpolationMode,

    /// Seed for a reproducible curve sequence
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pixels kept clear around the curve
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_PADDING_PX)]
    pub padding: f64,

    /// Initial window width (logical pixels)
    #[arg(long, default_value_t = 900)]
    pub width: u32,

    /// Initial window height (logical pixels)
    #[arg(long, default_value_t = 900)]
    pub height: u32,
}

impl Args {
    pub fn settings(&self) -> CurveSettings {
        CurveSettings {
            dimensions: match self.dimensions {
                Some(d) => DimensionChoice::Fixed(d),
                None => DimensionChoice::default(),
            },
            steps: self.steps,
            decay: self.decay,
            theta_resolution: self.theta_resolution,
            interpolation_resolution: self.interpolation_resolution,
            interpolation_timestep_ms: self.timestep_ms,
            mode: self.mode,
            padding: self.padding,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve_core::{CurveError, RngSource};

    #[test]
    fn defaults_match_core_settings() {
        let args = Args::try_parse_from(["curvedrift"]).unwrap();
        assert_eq!(args.settings(), CurveSettings::default());
    }

    #[test]
    fn flags_override_settings() {
        let args = Args::try_parse_from([
            "curvedrift",
            "--dimensions",
            "4",
            "--mode",
            "linear",
            "--seed",
            "9",
            "--timestep-ms",
            "40",
        ])
        .unwrap();
        let settings = args.settings();
        assert_eq!(settings.dimensions, DimensionChoice::Fixed(4));
        assert_eq!(settings.mode, InterpolationMode::Linear);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.interpolation_timestep_ms, 40);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Args::try_parse_from(["curvedrift", "--mode", "quadratic"]).is_err());
    }

    #[test]
    fn invalid_values_fail_on_resolve() {
        let args = Args::try_parse_from(["curvedrift", "--theta-resolution", "2"]).unwrap();
        let mut rng = RngSource::seeded(0);
        assert_eq!(
            args.settings().resolve(&mut rng),
            Err(CurveError::InvalidThetaResolution(2))
        );
    }
}
