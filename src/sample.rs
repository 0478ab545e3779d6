use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::generator::GeneratorConfig;
use crate::source::SourceError;

/// One day of the series. `date` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub date: NaiveDate,
    pub value: f64,
}

impl Sample {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// The calendar day in ISO 8601 form.
    pub fn date_iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// True when `value` has no more than `decimals` digits after the point.
pub fn has_at_most_decimals(value: f64, decimals: u32) -> bool {
    let factor = 10f64.powi(decimals as i32);
    ((value * factor).round() / factor - value).abs() <= f64::EPSILON * value.abs().max(1.0)
}

/// Check a fetched series against the shape the generator promises:
/// the configured length, one entry per consecutive day, values inside
/// the range with the configured precision.
pub fn validate_series(samples: &[Sample], config: &GeneratorConfig) -> Result<(), SourceError> {
    if samples.len() != config.days {
        return Err(SourceError::Invalid(format!(
            "expected {} samples, got {}",
            config.days,
            samples.len()
        )));
    }

    for pair in samples.windows(2) {
        let expected = pair[0].date.checked_add_days(Days::new(1));
        if expected != Some(pair[1].date) {
            return Err(SourceError::Invalid(format!(
                "{} does not follow {}",
                pair[1].date_iso(),
                pair[0].date_iso()
            )));
        }
    }

    for sample in samples {
        if !sample.value.is_finite() || sample.value < config.min || sample.value > config.max {
            return Err(SourceError::Invalid(format!(
                "value {} on {} is outside [{}, {}]",
                sample.value,
                sample.date_iso(),
                config.min,
                config.max
            )));
        }
        if !has_at_most_decimals(sample.value, config.decimals) {
            return Err(SourceError::Invalid(format!(
                "value {} on {} has more than {} decimals",
                sample.value,
                sample.date_iso(),
                config.decimals
            )));
        }
    }

    Ok(())
}
