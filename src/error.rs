use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiceChartError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}
