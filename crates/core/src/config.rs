use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_enabled")]
    pub enabled: bool,

    #[serde(default = "default_metrics_host")]
    pub host: String,

    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SweepConfig {
    /// Minutes between invitation sweep runs.
    #[serde(default = "default_sweep_interval")]
    pub interval_minutes: u64,
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    600
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_metrics_enabled() -> bool {
    true
}

fn default_metrics_host() -> String {
    "0.0.0.0".to_string()
}

fn default_metrics_port() -> u16 {
    9090
}

fn default_sweep_interval() -> u64 {
    1
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_metrics_enabled(),
            host: default_metrics_host(),
            port: default_metrics_port(),
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            interval_minutes: default_sweep_interval(),
        }
    }
}

impl Config {
    /// Load configuration from config files and environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. `config/default.toml` (optional)
    /// 2. `config/local.toml` (optional)
    /// 3. Environment variables prefixed `COURTBOOK__` (e.g.
    ///    `COURTBOOK__DATABASE__URL`)
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("COURTBOOK").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Socket address for the Prometheus exporter.
    pub fn metrics_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.metrics.host, self.metrics.port).parse()
    }

    /// Database settings in the shape the persistence layer expects.
    pub fn database_config(&self) -> persistence::db::DatabaseConfig {
        persistence::db::DatabaseConfig {
            url: self.database.url.clone(),
            max_connections: self.database.max_connections,
            min_connections: self.database.min_connections,
            connect_timeout_secs: self.database.connect_timeout_secs,
            idle_timeout_secs: self.database.idle_timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let logging = LoggingConfig::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "pretty");
    }

    #[test]
    fn test_metrics_defaults() {
        let metrics = MetricsConfig::default();
        assert!(metrics.enabled);
        assert_eq!(metrics.port, 9090);
    }

    #[test]
    fn test_sweep_defaults() {
        let sweep = SweepConfig::default();
        assert_eq!(sweep.interval_minutes, 1);
    }

    #[test]
    fn test_metrics_addr_parses() {
        let config = Config {
            database: DatabaseConfig {
                url: "postgres://localhost/courtbook".to_string(),
                max_connections: default_max_connections(),
                min_connections: default_min_connections(),
                connect_timeout_secs: default_connect_timeout(),
                idle_timeout_secs: default_idle_timeout(),
            },
            logging: LoggingConfig::default(),
            metrics: MetricsConfig::default(),
            sweep: SweepConfig::default(),
        };
        let addr = config.metrics_addr().unwrap();
        assert_eq!(addr.port(), 9090);
    }

    #[test]
    fn test_database_config_conversion() {
        let config = Config {
            database: DatabaseConfig {
                url: "postgres://localhost/courtbook".to_string(),
                max_connections: 7,
                min_connections: 2,
                connect_timeout_secs: 3,
                idle_timeout_secs: 60,
            },
            logging: LoggingConfig::default(),
            metrics: MetricsConfig::default(),
            sweep: SweepConfig::default(),
        };
        let db = config.database_config();
        assert_eq!(db.max_connections, 7);
        assert_eq!(db.url, "postgres://localhost/courtbook");
    }
}
