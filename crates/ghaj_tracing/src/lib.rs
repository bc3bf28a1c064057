use tracing_subscriber::EnvFilter;

pub use tracing::{debug, error, info, info_span, instrument, span::Span, trace, warn};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. Logs go to stderr so stdout stays free
/// for program output.
pub fn setup() -> Result<(), BoxError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    init_subscriber(filter)
}

#[cfg(debug_assertions)]
fn init_subscriber(filter: EnvFilter) -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
}

#[cfg(not(debug_assertions))]
fn init_subscriber(filter: EnvFilter) -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
}
