//! Structured logging setup.

use panchito_core::settings::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the process-wide subscriber from the resolved settings.
///
/// Severity comes from the log-level setting, falling back to `info` when
/// the directive does not parse. Debug mode renders human-readable output;
/// otherwise records are emitted as JSON lines for log shippers. The
/// subscriber is installed once per process, so later calls keep the
/// first configuration.
pub fn init(settings: &Settings) {
    let filter = EnvFilter::try_new(directive_for(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    if settings.debug {
        let _ = registry.with(tracing_subscriber::fmt::layer()).try_init();
    } else {
        let _ = registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init();
    }
}

/// Translate accepted level aliases onto filter directives.
///
/// Deployments that configure severity in syslog vocabulary keep their
/// meaning: `warning` and `critical` map onto the nearest filter level.
/// Anything else is handed to the filter as-is.
fn directive_for(level: &str) -> &str {
    match level {
        "warning" => "warn",
        "critical" => "error",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syslog_level_names_translate_to_filter_levels() {
        assert_eq!(directive_for("warning"), "warn");
        assert_eq!(directive_for("critical"), "error");
    }

    #[test]
    fn filter_directives_pass_through_untouched() {
        assert_eq!(directive_for("debug"), "debug");
        assert_eq!(directive_for("info"), "info");
        assert_eq!(directive_for("panchito=trace"), "panchito=trace");
    }
}
