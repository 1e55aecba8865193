//! In-process metrics for the client stores and API client.
//!
//! The client never serves a scrape endpoint. Instead a Prometheus recorder is
//! installed in-process and its text rendering is exposed through
//! [`MetricsRecorder::render`] (the demo binary prints it on exit).
//!
//! # Example
//!
//! ```rust,no_run
//! use cinepass_runtime::metrics::MetricsRecorder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let recorder = MetricsRecorder::install()?;
//! // ... drive the stores ...
//! println!("{}", recorder.render());
//! # Ok(())
//! # }
//! ```

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use thiserror::Error;

/// Errors from metrics setup.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to configure the recorder
    #[error("Failed to build metrics recorder: {0}")]
    Build(String),
    /// Failed to install the recorder (another one is already global)
    #[error("Failed to install metrics recorder: {0}")]
    Install(String),
}

/// Installed Prometheus recorder.
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// Register metric descriptions and install the global recorder.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::Install`] if a recorder is already installed.
    pub fn install() -> Result<Self, MetricsError> {
        register_metrics();

        let handle = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Suffix("duration_seconds".to_string()),
                &[0.0001, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 30.0],
            )
            .map_err(|e| MetricsError::Build(e.to_string()))?
            .install_recorder()
            .map_err(|e| MetricsError::Install(e.to_string()))?;

        tracing::debug!("Metrics recorder installed");
        Ok(Self { handle })
    }

    /// Render current metrics in Prometheus text format.
    #[must_use]
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

impl std::fmt::Debug for MetricsRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsRecorder").finish_non_exhaustive()
    }
}

/// Register all metric descriptions.
fn register_metrics() {
    // Store
    describe_counter!("store.commands.total", "Actions sent to a store");
    describe_counter!(
        "store.effects.executed",
        "Effects executed by a store, labelled by effect type"
    );
    describe_histogram!(
        "store.reducer.duration_seconds",
        "Time spent inside a reducer"
    );
    describe_counter!("store.shutdown.initiated", "Graceful shutdowns started");
    describe_counter!(
        "store.shutdown.timeout",
        "Shutdowns that timed out with effects still running"
    );
    describe_counter!(
        "store.shutdown.rejected_actions",
        "Actions rejected because the store was shutting down"
    );

    // API client
    describe_counter!(
        "api.requests.total",
        "Remote calls, labelled by role and outcome"
    );
    describe_histogram!(
        "api.request.duration_seconds",
        "Round-trip time of remote calls"
    );

    // Confirmation flows
    describe_counter!(
        "flow.confirmations.total",
        "Confirmed mutations, labelled by flow and outcome"
    );
}
