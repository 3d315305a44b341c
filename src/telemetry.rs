use std::sync::Once;

use thiserror::Error;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingSettings};

static TEST_SUBSCRIBER: Once = Once::new();

#[derive(Debug, Error)]
#[error("telemetry initialization failed: {0}")]
pub struct TelemetryError(String);

/// Install a global tracing subscriber using the provided logging settings.
///
/// `RUST_LOG` directives, when present, refine the configured level.
pub fn init(logging: &LoggingSettings) -> Result<(), TelemetryError> {
    install(logging, false)
}

/// Test-harness variant: output goes through the captured test writer and the
/// subscriber is installed at most once per process.
pub fn init_for_tests(logging: &LoggingSettings) {
    TEST_SUBSCRIBER.call_once(|| {
        if let Err(err) = install(logging, true) {
            eprintln!("{err}");
        }
    });
}

fn install(logging: &LoggingSettings, test_writer: bool) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt_layer(logging.format, test_writer))
        .try_init()
        .map_err(|err| TelemetryError(format!("failed to install tracing subscriber: {err}")))
}

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

fn fmt_layer<S>(format: LogFormat, test_writer: bool) -> BoxedLayer<S>
where
    S: tracing::Subscriber + for<'span> tracing_subscriber::registry::LookupSpan<'span> + 'static,
{
    match (format, test_writer) {
        (LogFormat::Json, false) => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
        (LogFormat::Json, true) => fmt::layer().json().with_test_writer().boxed(),
        (LogFormat::Compact, false) => fmt::layer().compact().with_target(true).boxed(),
        (LogFormat::Compact, true) => fmt::layer().compact().with_test_writer().boxed(),
    }
}
