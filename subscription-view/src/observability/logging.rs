use crate::config::LogFormat;
use crate::error::ViewError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `RUST_LOG` wins over `log_level` when set.
pub fn init_tracing(
    service_name: &str,
    log_level: &str,
    format: LogFormat,
) -> Result<(), ViewError> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .flatten_event(true),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
    };

    result.map_err(|e| {
        ViewError::Tracing(format!(
            "subscriber for service '{}' not installed: {}",
            service_name, e
        ))
    })?;

    tracing::info!(
        service_name = %service_name,
        log_level = %log_level,
        "Tracing initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_reports_error() {
        // Only the first install in a process can succeed.
        let _ = init_tracing("subscription-view", "warn", LogFormat::Json);
        let second = init_tracing("subscription-view", "warn", LogFormat::Pretty);
        assert!(matches!(second, Err(ViewError::Tracing(_))));
    }
}
