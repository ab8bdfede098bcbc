use serde::Deserialize;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_addr: String,
    pub max_upload_bytes: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub filter: String,
}

/// Load settings from `config/server.*` (optional) and `WIFI_TELEMETRY__*` env vars.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = base_builder()?
        .add_source(config::File::with_name("config/server").required(false))
        .add_source(config::Environment::with_prefix("WIFI_TELEMETRY").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

fn base_builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.bind_addr", DEFAULT_BIND_ADDR)?
        .set_default("server.max_upload_bytes", DEFAULT_MAX_UPLOAD_BYTES)?
        .set_default("logging.filter", DEFAULT_LOG_FILTER)?)
}
