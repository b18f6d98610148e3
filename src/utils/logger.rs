use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CRATE_TARGETS: [&str; 2] = ["remedial_timetable", "toml_timetable"];

/// Levels accepted for `[monitoring] log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Default filter directive when `RUST_LOG` is unset.
///
/// `verbose` wins over a configured level; neither means `info`.
pub fn default_directive(verbose: bool, level: Option<&str>) -> String {
    let level = if verbose {
        "debug".to_string()
    } else {
        level
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or("info")
            .to_ascii_lowercase()
    };

    let mut directives: Vec<String> = CRATE_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect();
    if verbose {
        directives.push("info".to_string());
    }
    directives.join(",")
}

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

pub fn init_cli_logger(verbose: bool) {
    init_cli_logger_with(&default_directive(verbose, None));
}

/// Compact logger with an explicit default directive, e.g. from a config file.
pub fn init_cli_logger_with(default_directive: &str) {
    tracing_subscriber::registry()
        .with(env_filter(default_directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Structured output for log shippers; one JSON object per event.
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(&default_directive(verbose, None)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(
            default_directive(false, None),
            "remedial_timetable=info,toml_timetable=info"
        );
        assert_eq!(
            default_directive(true, None),
            "remedial_timetable=debug,toml_timetable=debug,info"
        );
    }

    #[test]
    fn test_configured_level_reaches_directive() {
        assert_eq!(
            default_directive(false, Some("warn")),
            "remedial_timetable=warn,toml_timetable=warn"
        );
        assert_eq!(
            default_directive(true, Some("warn")),
            "remedial_timetable=debug,toml_timetable=debug,info"
        );
        assert_eq!(
            default_directive(false, Some("DEBUG")),
            "remedial_timetable=debug,toml_timetable=debug"
        );
        assert_eq!(
            default_directive(false, Some("  ")),
            "remedial_timetable=info,toml_timetable=info"
        );
    }

    #[test]
    fn test_configured_directive_parses() {
        for level in LOG_LEVELS {
            let directive = default_directive(false, Some(*level));
            assert!(EnvFilter::try_new(&directive).is_ok(), "{directive}");
        }
    }
}
