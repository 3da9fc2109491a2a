//! Configuration for tracing setup.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Sink for runtime log lines (e.g. TUI debug traces). Called from the tracing layer; must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

/// Observability configuration
#[derive(Clone)]
pub struct ObservabilityConfig {
    /// Service name recorded on startup (e.g. "tinct", "tinct-tui")
    pub service_name: String,

    /// Enable console/log output
    pub enable_console: bool,

    /// Log level filter (e.g. "info", "debug", "trace")
    /// Defaults to "info" if not set
    pub log_level: Option<String>,

    /// Optional sink for each formatted log line (e.g. TUI debug traces). Not serialized.
    pub log_sink: Option<LogSink>,
}

// Serde doesn't support Arc<dyn Fn>, so we don't derive Serialize/Deserialize for the whole struct.
// We use a separate impl and skip log_sink.
impl Serialize for ObservabilityConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("ObservabilityConfig", 3)?;
        s.serialize_field("service_name", &self.service_name)?;
        s.serialize_field("enable_console", &self.enable_console)?;
        s.serialize_field("log_level", &self.log_level)?;
        s.end()
    }
}

impl<'de> Deserialize<'de> for ObservabilityConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ObservabilityConfigDe {
            #[serde(default = "default_service_name")]
            service_name: String,
            #[serde(default)]
            enable_console: bool,
            log_level: Option<String>,
        }
        fn default_service_name() -> String {
            "tinct".to_string()
        }
        let de = ObservabilityConfigDe::deserialize(deserializer)?;
        Ok(ObservabilityConfig {
            service_name: de.service_name,
            enable_console: de.enable_console,
            log_level: de.log_level,
            log_sink: None,
        })
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "tinct".to_string(),
            enable_console: true,
            log_level: None,
            log_sink: None,
        }
    }
}

impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("service_name", &self.service_name)
            .field("enable_console", &self.enable_console)
            .field("log_level", &self.log_level)
            .field("log_sink", &self.log_sink.as_ref().map(|_| "Some(LogSink)"))
            .finish()
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Sink for runtime log lines (e.g. TUI debug traces). Called from the tracing layer; must not block.
    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// Build from environment variables
    ///
    /// Reads `TINCT_LOG` or `RUST_LOG` → log_level.
    pub fn from_env() -> Self {
        let log_level = std::env::var("TINCT_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();

        Self {
            service_name: "tinct".to_string(),
            enable_console: true,
            log_level,
            log_sink: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let config = ObservabilityConfig::new("tinct-tui")
            .with_console(false)
            .with_log_level("debug");
        assert_eq!(config.service_name, "tinct-tui");
        assert!(!config.enable_console);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn deserialize_skips_log_sink() {
        let config: ObservabilityConfig =
            serde_json::from_str(r#"{"service_name":"x","enable_console":true}"#).unwrap();
        assert_eq!(config.service_name, "x");
        assert!(config.log_sink.is_none());
    }
}
