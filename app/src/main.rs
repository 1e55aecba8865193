//! CinePass command-line demo.
//!
//! ```text
//! cinepass end-time 23:30 90      # show end time
//! cinepass cities                 # cities with running shows (needs the API)
//! ```
//!
//! Configuration comes from the environment (see `cinepass::config`).
//! Metrics are printed on exit.

use anyhow::{Context, bail};
use cinepass::format::{format_run_time, to_12_hour};
use cinepass::schedule::{ClockTime, parse_run_time};
use cinepass::{CinePass, Config};
use cinepass_runtime::metrics::MetricsRecorder;
use cinepass_session::actions::{UserRequest, UserResponse};
use cinepass_session::dispatch;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let recorder = MetricsRecorder::install().context("installing metrics recorder")?;
    let config = Config::from_env();
    tracing::info!(api = %config.api.base_url, "Starting CinePass client");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["end-time", start, run_time] => end_time(start, run_time)?,
        ["cities"] => cities(&config).await?,
        _ => bail!("usage: cinepass end-time <HH:MM> <minutes|H:MM> | cinepass cities"),
    }

    println!("{}", recorder.render());
    Ok(())
}

fn end_time(start: &str, run_time: &str) -> anyhow::Result<()> {
    let start: ClockTime = start.parse().context("parsing start time")?;
    let minutes = parse_run_time(run_time).context("parsing run time")?;
    let end = start.plus_minutes(minutes);

    println!(
        "{start} ({}) + {} = {end} ({})",
        to_12_hour(start),
        format_run_time(minutes),
        to_12_hour(end)
    );
    Ok(())
}

async fn cities(config: &Config) -> anyhow::Result<()> {
    let client = CinePass::connect(config)?;
    let response = dispatch(&client.user, UserRequest::GetCities, client.dispatch_timeout()).await;
    client.shutdown().await?;

    match response.context("loading cities")? {
        UserResponse::GetCities(envelope) => {
            for city in envelope.data.unwrap_or_default() {
                println!("{city}");
            }
            Ok(())
        },
        other => bail!("unexpected response to {:?}", other.op()),
    }
}
