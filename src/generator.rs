//! Mock data for the chart.
//!
//! Builds one sample per calendar day ending today, with values drawn
//! uniformly from a fixed range and rounded to a fixed precision.

use chrono::{Local, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::format::{ChronoDateFormatter, DateFormatter};
use crate::sample::Sample;

pub const DEFAULT_DAYS: usize = 31;
pub const DEFAULT_MIN: f64 = 5.0;
pub const DEFAULT_MAX: f64 = 10_000.0;
pub const DEFAULT_DECIMALS: u32 = 3;
/// Longest series a config may ask for. Keeps every generated date well
/// inside chrono's calendar so no two samples can collapse onto one day.
pub const MAX_DAYS: usize = 36_600;

/// Shape of a generated series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of days, ending with today.
    pub days: usize,
    /// Smallest value a sample may take.
    pub min: f64,
    /// Largest value a sample may take.
    pub max: f64,
    /// Digits kept after the decimal point.
    pub decimals: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl GeneratorConfig {
    /// Round `value` to the configured precision and keep it inside
    /// `[min, max]` on that precision grid.
    pub fn quantize(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.decimals as i32);
        let rounded = (value * factor).round() / factor;
        if rounded < self.min {
            (self.min * factor).ceil() / factor
        } else if rounded > self.max {
            (self.max * factor).floor() / factor
        } else {
            rounded
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Generator<D = ChronoDateFormatter> {
    config: GeneratorConfig,
    dates: D,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            dates: ChronoDateFormatter,
        }
    }
}

impl<D: DateFormatter> Generator<D> {
    pub fn with_dates(config: GeneratorConfig, dates: D) -> Self {
        Self { config, dates }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Series ending on `today`, oldest first.
    pub fn generate_on<R: Rng + ?Sized>(&self, today: NaiveDate, rng: &mut R) -> Vec<Sample> {
        let GeneratorConfig { days, min, max, .. } = self.config;

        (0..days)
            .rev()
            .map(|offset| {
                let date = self.dates.days_before(today, offset as u64);
                let raw = if max > min { rng.random_range(min..=max) } else { min };
                Sample::new(date, self.config.quantize(raw))
            })
            .collect()
    }

    /// Series ending on the local current day.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Sample> {
        self.generate_on(today(), rng)
    }
}

/// The local calendar day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `days` samples ending today with the default range and precision.
pub fn generate(days: usize) -> Vec<Sample> {
    let config = GeneratorConfig {
        days,
        ..GeneratorConfig::default()
    };
    Generator::new(config).generate(&mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_generate_on_covers_trailing_month() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples = Generator::new(GeneratorConfig::default()).generate_on(day(2024, 3, 15), &mut rng);

        assert_eq!(samples.len(), 31);
        assert_eq!(samples.first().unwrap().date, day(2024, 2, 14));
        assert_eq!(samples.last().unwrap().date, day(2024, 3, 15));
        assert!(samples.iter().any(|s| s.date == day(2024, 2, 29)));
        for s in &samples {
            assert!((5.0..=10_000.0).contains(&s.value), "out of range: {}", s.value);
        }
    }

    #[test]
    fn test_generate_on_zero_days_is_empty() {
        let config = GeneratorConfig {
            days: 0,
            ..GeneratorConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert!(Generator::new(config).generate_on(day(2024, 1, 1), &mut rng).is_empty());
    }

    #[test]
    fn test_generate_on_crosses_year_boundary() {
        let config = GeneratorConfig {
            days: 3,
            ..GeneratorConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let samples = Generator::new(config).generate_on(day(2025, 1, 1), &mut rng);
        let dates: Vec<_> = samples.iter().map(|s| s.date_iso()).collect();
        assert_eq!(dates, vec!["2024-12-30", "2024-12-31", "2025-01-01"]);
    }

    #[test]
    fn test_degenerate_range_yields_constant() {
        let config = GeneratorConfig {
            days: 4,
            min: 42.0,
            max: 42.0,
            decimals: 0,
        };
        let mut rng = StdRng::seed_from_u64(9);
        let samples = Generator::new(config).generate_on(day(2024, 6, 1), &mut rng);
        assert!(samples.iter().all(|s| s.value == 42.0));
    }

    #[test]
    fn test_quantize_rounds_and_stays_in_range() {
        let config = GeneratorConfig::default();
        assert_eq!(config.quantize(1234.56789), 1234.568);
        assert_eq!(config.quantize(10_000.0004), 10_000.0);
        assert_eq!(config.quantize(4.9996), 5.0);

        let coarse = GeneratorConfig {
            days: 1,
            min: 0.25,
            max: 9.75,
            decimals: 0,
        };
        assert_eq!(coarse.quantize(0.3), 1.0);
        assert_eq!(coarse.quantize(9.7), 9.0);
    }

    #[test]
    fn test_generate_uses_current_day() {
        let before = today();
        let samples = generate(5);
        let after = today();
        assert_eq!(samples.len(), 5);
        let last = samples.last().unwrap().date;
        assert!(last == before || last == after, "{} is not today", last);
    }

    /// Calendar where one step back is a whole week.
    struct WeeklyDates;

    impl DateFormatter for WeeklyDates {
        fn days_before(&self, date: NaiveDate, days: u64) -> NaiveDate {
            ChronoDateFormatter.days_before(date, days * 7)
        }

        fn axis_label(&self, date: NaiveDate) -> String {
            date.format("W%V").to_string()
        }

        fn tooltip_label(&self, date: NaiveDate) -> String {
            date.to_string()
        }
    }

    #[test]
    fn test_with_dates_uses_given_calendar() {
        let config = GeneratorConfig {
            days: 3,
            ..GeneratorConfig::default()
        };
        let generator = Generator::with_dates(config, WeeklyDates);
        assert_eq!(generator.config().days, 3);

        let mut rng = StdRng::seed_from_u64(11);
        let dates: Vec<_> = generator
            .generate_on(day(2024, 3, 15), &mut rng)
            .iter()
            .map(|s| s.date)
            .collect();
        assert_eq!(dates, vec![day(2024, 3, 1), day(2024, 3, 8), day(2024, 3, 15)]);
    }

    #[test]
    fn test_max_days_stays_inside_calendar() {
        let config = GeneratorConfig {
            days: MAX_DAYS,
            ..GeneratorConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let samples = Generator::new(config).generate_on(day(2024, 3, 15), &mut rng);
        assert_eq!(samples.len(), MAX_DAYS);
        assert!(samples.first().unwrap().date > NaiveDate::MIN);
        assert!(samples.windows(2).all(|w| w[0].date < w[1].date));
    }
}
