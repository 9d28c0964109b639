use log::LevelFilter;

/// Where the log filter comes from. `env_filter` follows the `env_logger` filter syntax
/// (e.g. "info", "lit_pyramids=debug") and wins over `RUST_LOG`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
        }
    }
}

impl LoggingConfig {
    /// Explicit filter, then `rust_log`, then the default level.
    fn filter(&self, rust_log: Option<String>) -> String {
        self.env_filter
            .clone()
            .or(rust_log)
            .unwrap_or_else(|| self.default_level.to_string())
    }
}

/// Installs the global logger. Called once at the top of `main`.
pub fn init_logging(config: &LoggingConfig) {
    env_logger::Builder::new()
        .parse_filters(&config.filter(std::env::var("RUST_LOG").ok()))
        .init();

    log::debug!("logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_beats_rust_log() {
        let config = LoggingConfig {
            env_filter: Some("lit_pyramids=debug".to_owned()),
            ..Default::default()
        };
        assert_eq!(config.filter(Some("warn".to_owned())), "lit_pyramids=debug");
    }

    #[test]
    fn falls_back_to_rust_log_then_default_level() {
        let config = LoggingConfig::default();
        assert_eq!(config.filter(Some("warn".to_owned())), "warn");
        assert_eq!(config.filter(None), "INFO");
    }
}
