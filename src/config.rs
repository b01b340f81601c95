use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub quote: QuoteSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteSettings {
    #[serde(default = "default_quote_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_quote_tags")]
    pub tags: Vec<String>,
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            endpoint: default_quote_endpoint(),
            tags: default_quote_tags(),
            timeout_secs: None,
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_quote_endpoint() -> String { "https://api.quotable.io/random".to_string() }
fn default_max_body_bytes() -> usize { crate::services::quotes::DEFAULT_MAX_BODY_BYTES }
fn default_quote_tags() -> Vec<String> {
    vec!["inspirational".to_string(), "wisdom".to_string(), "hope".to_string()]
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local override file (config/local.toml)
    /// 4. Environment variables (prefixed with AWARENESS_)
    /// 5. `PORT`, as set by most hosting platforms
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., AWARENESS__SERVER__PORT -> server.port
            .add_source(env_source());

        with_port_override(builder, std::env::var("PORT").ok())?
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("AWARENESS")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("quote.tags")
        .try_parsing(true)
}

fn with_port_override(
    builder: ConfigBuilder<DefaultState>,
    port: Option<String>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match port {
        Some(port) => {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|e| ConfigError::Message(format!("Invalid PORT {:?}: {}", port, e)))?;
            builder.set_override("server.port", i64::from(port))
        }
        None => Ok(builder),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_quote_settings() {
        let quote = QuoteSettings::default();
        assert_eq!(quote.endpoint, "https://api.quotable.io/random");
        assert_eq!(quote.tags, vec!["inspirational", "wisdom", "hope"]);
        assert!(quote.timeout_secs.is_none());
        assert_eq!(quote.max_body_bytes, 64 * 1024);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings: Settings = Config::builder().build().unwrap().try_deserialize().unwrap();
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.quote.tags.len(), 3);
    }

    #[test]
    fn test_port_override() {
        let builder = with_port_override(Config::builder(), Some("8080".to_string())).unwrap();
        let settings: Settings = builder.build().unwrap().try_deserialize().unwrap();
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(with_port_override(Config::builder(), Some("eighty".to_string())).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("awareness-site-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[quote]\nendpoint = \"http://localhost:9999/random\"\ntags = [\"hope\"]\ntimeout_secs = 5\nmax_body_bytes = 2048\n\n[logging]\nformat = \"pretty\""
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.quote.endpoint, "http://localhost:9999/random");
        assert_eq!(settings.quote.tags, vec!["hope"]);
        assert_eq!(settings.quote.timeout_secs, Some(5));
        assert_eq!(settings.quote.max_body_bytes, 2048);
        assert_eq!(settings.logging.format, "pretty");
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.server.port, 5000);
    }
}
