//! Command-line interface.
//!
//! Parses the `pico-placa` arguments and renders the prediction as text.
//! Process concerns (logging, exit codes) live in the binary.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::config::ConfigLoader;
use crate::error::PredictorResult;
use crate::models::PredictionQuery;

/// Pico y Placa predictor for Quito.
///
/// Tells whether a vehicle may circulate at a given date and time.
#[derive(Debug, Clone, Parser)]
#[command(name = "pico-placa", version)]
pub struct Cli {
    /// Check holidays against the remote holidays API
    #[arg(short = 'o', long)]
    pub online: bool,

    /// Vehicle plate, XX-YYYY or XXX-YYYY (e.g. PBX-1234)
    #[arg(short = 'l', long)]
    pub plate: String,

    /// Date as YYYY-MM-DD
    #[arg(short = 'f', long)]
    pub date: String,

    /// Time as HH:MM, 24-hour clock
    #[arg(short = 't', long)]
    pub time: String,

    /// YAML configuration file
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also print the rule that decided the prediction
    #[arg(short = 'e', long)]
    pub explain: bool,
}

impl Cli {
    /// Validates the raw arguments into a query.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::PredictorError::InvalidFormat`] for the first
    /// malformed argument.
    pub fn query(&self) -> PredictorResult<PredictionQuery> {
        PredictionQuery::parse(&self.plate, &self.date, &self.time, self.online)
    }

    fn loader(&self) -> PredictorResult<ConfigLoader> {
        match &self.config {
            Some(path) => ConfigLoader::load(path),
            None => Ok(ConfigLoader::defaults()),
        }
    }
}

/// Runs a prediction for `cli` and returns the text to print.
///
/// # Errors
///
/// Returns any validation, configuration or holiday lookup error.
pub async fn run(cli: &Cli) -> PredictorResult<String> {
    let query = cli.query()?;
    let predictor = cli.loader()?.predictor()?;

    let prediction = predictor.evaluate(&query).await?;
    info!(online = cli.online, permitted = prediction.permitted(), "Prediction ready");

    let mut output = prediction.summary();
    if cli.explain {
        output.push_str(&format!("\nReason: {}.", prediction.verdict));
    }
    Ok(output)
}
