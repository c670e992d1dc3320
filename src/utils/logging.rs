/*---------- Imports ----------*/
use std::env;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

/*---------- Constants ----------*/
const LOG_FORMAT: &str = "LOG_FORMAT";
const DEFAULT_FILTER: &str = "info";

static INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Installs the global subscriber. Only the first call has any effect.
///
/// CloudWatch stamps every line itself, so timestamps and colours are off.
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let format = LogFormat::parse(env::var(LOG_FORMAT).ok().as_deref());

        let builder = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_ansi(false)
            .without_time();

        let result = match format {
            LogFormat::Json => builder.json().flatten_event(true).try_init(),
            LogFormat::Text => builder.try_init(),
        };

        if let Err(error) = result {
            eprintln!("Couldn't install tracing subscriber: {}", error);
        }
    });
}
