use std::process::ExitCode;

use clap::Parser;
use pico_placa::cli::{self, Cli};
use tracing::{Instrument, error, info_span};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let correlation_id = Uuid::new_v4();
    let span = info_span!("prediction", correlation_id = %correlation_id);

    match cli::run(&cli).instrument(span).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(correlation_id = %correlation_id, error = %e, "Prediction failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
