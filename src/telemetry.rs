use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("APP_LOG_LEVEL '{value}' is not a valid tracing filter")]
    InvalidFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("a global tracing subscriber is already installed")]
    SubscriberInstalled(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// `RUST_LOG` wins when set and valid; otherwise the configured level applies.
pub fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::InvalidFilter {
        value: config.log_level.clone(),
        source,
    })
}

/// Install the global subscriber. Output goes to stderr so CLI results on stdout stay parseable.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = env_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::SubscriberInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(level: &str) -> TelemetryConfig {
        TelemetryConfig {
            log_level: level.to_string(),
        }
    }

    #[test]
    fn accepts_level_and_directive_filters() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        assert!(env_filter(&config("debug")).is_ok());
        assert!(env_filter(&config("prompt_coach=trace,info")).is_ok());
    }

    #[test]
    fn rejects_malformed_filters() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let error = env_filter(&config("prompt_coach=loud")).expect_err("invalid level");
        assert!(matches!(error, TelemetryError::InvalidFilter { .. }));
        assert!(error.to_string().contains("prompt_coach=loud"));
    }

    #[test]
    fn second_install_is_reported() {
        let config = config("warn");
        let _ = init(&config);

        let error = init(&config).expect_err("subscriber already set");
        assert!(matches!(error, TelemetryError::SubscriberInstalled(_)));
    }
}
