use crate::constants::*;
use curve_core::{CurveSettings, DimensionChoice, InterpolationMode};

/// Apply `?key=value&...` overrides from the page URL to the default settings.
///
/// Unknown keys are ignored; unparsable values are logged and skipped so a
/// typo in the URL still yields a running animation.
pub fn settings_from_query(query: &str) -> CurveSettings {
    let mut settings = CurveSettings::default();
    for pair in query.trim_start_matches('?').split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let applied = match key {
            PARAM_SEED => value.parse::<u64>().map(|s| settings.seed = Some(s)).is_ok(),
            PARAM_MODE => value
                .parse::<InterpolationMode>()
                .map(|m| settings.mode = m)
                .is_ok(),
            PARAM_DIMENSIONS => value
                .parse::<u32>()
                .map(|d| settings.dimensions = DimensionChoice::Fixed(d))
                .is_ok(),
            PARAM_STEPS => value.parse::<u32>().map(|s| settings.steps = s).is_ok(),
            PARAM_DECAY => value.parse::<f64>().map(|d| settings.decay = d).is_ok(),
            _ => true,
        };
        if !applied {
            log::warn!("ignoring invalid query parameter {key}={value}");
        }
    }
    settings
}
