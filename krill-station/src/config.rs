/// Station configuration
///
/// # Environment variables
///
/// Every entry can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | BRIDGE_ADDR | 127.0.0.1:9440 | Print bridge daemon address |
/// | SIGNING_KEY_PATH | /var/lib/krill/station/signing.key | Job signing key (PKCS#8 PEM) |
/// | STATION_NAME | krill-station | Station identifier shown in daemon logs |
/// | LOG_LEVEL | info | Log level filter |
/// | LOG_DIR | (unset) | Optional directory for daily-rolling log files |
///
/// # Example
///
/// ```ignore
/// BRIDGE_ADDR=127.0.0.1:9500 LOG_LEVEL=debug cargo run --example test_print
/// ```
#[derive(Debug, Clone)]
pub struct StationConfig {
    /// Print bridge daemon address
    pub bridge_addr: String,
    /// Path to the job signing private key, loaded at session start
    pub signing_key_path: String,
    /// Station identifier sent in the bridge handshake
    pub station_name: String,
    /// Log level filter
    pub log_level: String,
    /// Optional log file directory
    pub log_dir: Option<String>,
}

impl StationConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            bridge_addr: std::env::var("BRIDGE_ADDR").unwrap_or_else(|_| "127.0.0.1:9440".into()),
            signing_key_path: std::env::var("SIGNING_KEY_PATH")
                .unwrap_or_else(|_| "/var/lib/krill/station/signing.key".into()),
            station_name: std::env::var("STATION_NAME").unwrap_or_else(|_| "krill-station".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override the connection-relevant fields
    ///
    /// Mostly used by tests and examples.
    pub fn with_overrides(
        bridge_addr: impl Into<String>,
        signing_key_path: impl Into<String>,
    ) -> Self {
        let mut config = Self::from_env();
        config.bridge_addr = bridge_addr.into();
        config.signing_key_path = signing_key_path.into();
        config
    }
}

impl Default for StationConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
