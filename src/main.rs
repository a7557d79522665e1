use std::process;

use ascii_chart::{ChartError, cli};
use tracing_subscriber::EnvFilter;

fn main() {
    // ASCII_CHART_LOG=debug shows what each renderer was asked to draw
    let log_level = std::env::var("ASCII_CHART_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("error: {e}");
        let exit_code = match e {
            ChartError::Config(_) => 2,
            ChartError::NonFinite { .. } => 1,
        };
        process::exit(exit_code);
    }
}
