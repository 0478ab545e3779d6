use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::chart::{SvgAreaRenderer, Viewport};
use crate::error::DiceChartError;
use crate::format::CurrencyFormat;
use crate::generator::{GeneratorConfig, MAX_DAYS};

/// Settings compiled into the page from `chart.toml`.
const EMBEDDED_CONFIG: &str = include_str!("../chart.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `tracing` filter directive, e.g. `info` or `dice_chart=debug`.
    pub log_level: String,
    pub generator: GeneratorConfig,
    pub axis: AxisConfig,
    pub appearance: AppearanceConfig,
    pub refresh: RefreshConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub y_tick_count: usize,
    pub currency_prefix: String,
    pub currency_suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub height: u32,
    pub stroke_color: String,
    pub gradient_top_opacity: f64,
    pub gradient_bottom_opacity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub simulated_latency_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            generator: GeneratorConfig::default(),
            axis: AxisConfig::default(),
            appearance: AppearanceConfig::default(),
            refresh: RefreshConfig::default(),
        }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        let currency = CurrencyFormat::default();
        Self {
            y_tick_count: 8,
            currency_prefix: currency.prefix,
            currency_suffix: currency.suffix,
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            height: 400,
            stroke_color: "#2451B7".to_string(),
            gradient_top_opacity: 0.4,
            gradient_bottom_opacity: 0.05,
        }
    }
}

impl AxisConfig {
    pub fn currency(&self) -> CurrencyFormat {
        CurrencyFormat::new(self.currency_prefix.clone(), self.currency_suffix.clone())
    }
}

impl AppConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, DiceChartError> {
        let config: AppConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration embedded at build time.
    pub fn embedded() -> Result<Self, DiceChartError> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    /// Keep a loaded configuration, or fall back to the defaults.
    pub fn or_default(loaded: Result<Self, DiceChartError>) -> Self {
        match loaded {
            Ok(config) => {
                info!(
                    "Loaded chart config: {} days in [{}, {}]",
                    config.generator.days, config.generator.min, config.generator.max
                );
                config
            }
            Err(e) => {
                warn!("Falling back to default config: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), DiceChartError> {
        let g = &self.generator;
        if g.days == 0 {
            return Err(DiceChartError::Config("generator.days must be at least 1".into()));
        }
        if g.days > MAX_DAYS {
            return Err(DiceChartError::Config(format!(
                "generator.days is {}, at most {} allowed",
                g.days, MAX_DAYS
            )));
        }
        if !g.min.is_finite() || !g.max.is_finite() {
            return Err(DiceChartError::Config("generator range must be finite".into()));
        }
        if g.min < 0.0 || g.min > g.max {
            return Err(DiceChartError::Config(format!(
                "generator range [{}, {}] must satisfy 0 <= min <= max",
                g.min, g.max
            )));
        }
        if g.decimals > 10 {
            return Err(DiceChartError::Config(format!(
                "generator.decimals is {}, at most 10 allowed",
                g.decimals
            )));
        }
        let factor = 10f64.powi(g.decimals as i32);
        if (g.min * factor).ceil() > (g.max * factor).floor() {
            return Err(DiceChartError::Config(format!(
                "no value in [{}, {}] has {} decimals",
                g.min, g.max, g.decimals
            )));
        }
        if self.axis.y_tick_count < 2 {
            return Err(DiceChartError::Config("axis.y_tick_count must be at least 2".into()));
        }
        if self.appearance.height < 100 {
            return Err(DiceChartError::Config("appearance.height must be at least 100".into()));
        }
        for (name, opacity) in [
            ("gradient_top_opacity", self.appearance.gradient_top_opacity),
            ("gradient_bottom_opacity", self.appearance.gradient_bottom_opacity),
        ] {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(DiceChartError::Config(format!(
                    "appearance.{} must be within [0, 1], got {}",
                    name, opacity
                )));
            }
        }
        Ok(())
    }

    pub fn renderer(&self) -> SvgAreaRenderer {
        SvgAreaRenderer {
            viewport: Viewport::with_height(self.appearance.height as f64),
            y_tick_count: self.axis.y_tick_count,
        }
    }
}
