use thiserror::Error;
use tracing::debug;

use crate::generator::{Generator, GeneratorConfig};
use crate::sample::{validate_series, Sample};

/// Why a refresh produced no usable series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    /// The source could not be reached or produced nothing.
    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    /// The source answered with data that breaks the series shape.
    #[error("Invalid data: {0}")]
    Invalid(String),
}

/// Where the chart view gets a fresh series from.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    async fn fetch(&self) -> Result<Vec<Sample>, SourceError>;
}

/// Mock source: a brand new random series ending today on every fetch.
#[derive(Debug, Clone, Default)]
pub struct RandomWalkSource {
    generator: Generator,
}

impl RandomWalkSource {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            generator: Generator::new(config),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        self.generator.config()
    }
}

impl DataSource for RandomWalkSource {
    async fn fetch(&self) -> Result<Vec<Sample>, SourceError> {
        let samples = self.generator.generate(&mut rand::rng());
        debug!("Generated {} samples", samples.len());
        Ok(samples)
    }
}

/// Fetch a series and check its shape against `config` before anyone applies it.
pub async fn fetch_validated<S: DataSource + ?Sized>(
    source: &S,
    config: &GeneratorConfig,
) -> Result<Vec<Sample>, SourceError> {
    let samples = source.fetch().await?;
    validate_series(&samples, config)?;
    Ok(samples)
}
