use std::sync::Once;

/// Logger configuration for the probe's own progress messages.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "tattle=error,tattle_probe=debug").
///
/// `to_stdout` keeps the probe's log output off standard error, so stderr
/// carries only reporter lines.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub to_stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            to_stdout: true,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);
        if config.to_stdout {
            builder.target(env_logger::Target::Stdout);
        }

        // A second logger may already be installed by an embedding harness.
        if builder.try_init().is_err() {
            tattle::error("logger already installed; probe output goes to the existing logger");
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keeps_stderr_for_reports() {
        let config = LoggingConfig::default();
        assert!(config.to_stdout);
        assert!(config.env_filter.is_none());
    }
}
