use super::parsing::{
    env_optional, env_or_default, parse_bool, parse_cors_origins, parse_environment, parse_flag,
};
use super::types::{
    ApiSettings, ConfigError, CorsSettings, RuntimeSettings, ServerHost, ServerPort,
    ServerSettings, Settings, StoreSettings, TelemetrySettings,
};

impl Settings {
    pub(crate) fn load() -> Result<Self, ConfigError> {
        let host = env_or_default("ITEMS_HOST", "0.0.0.0");
        let port = env_or_default("ITEMS_PORT", "8080");

        let environment =
            parse_environment(env_optional("ITEMS_ENV").or_else(|| env_optional("ENVIRONMENT")));

        let project_name = env_or_default("PROJECT_NAME", "Items API");
        let version = env!("CARGO_PKG_VERSION").to_string();

        let cors_origins = parse_cors_origins(env_optional("BACKEND_CORS_ORIGINS"))?;

        let seed = match env_optional("ITEMS_SEED") {
            Some(value) => parse_flag("ITEMS_SEED", &value)?,
            None => true,
        };

        let log_level = env_or_default("ITEMS_LOG_LEVEL", "info");
        let json = env_optional("ITEMS_LOG_JSON").map(|value| parse_bool(&value)).unwrap_or(false);
        let prometheus_enabled =
            env_optional("PROMETHEUS_ENABLED").map(|value| parse_bool(&value)).unwrap_or(false);

        Ok(Self {
            server: ServerSettings {
                host: ServerHost::parse(host)?,
                port: ServerPort::parse(port)?,
            },
            runtime: RuntimeSettings { environment },
            api: ApiSettings { project_name, version },
            cors: CorsSettings { origins: cors_origins },
            store: StoreSettings { seed },
            telemetry: TelemetrySettings { log_level, json, prometheus_enabled },
        })
    }

    pub(crate) fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host.0, self.server.port.0)
    }

    pub(crate) fn server_host(&self) -> &str {
        &self.server.host.0
    }

    pub(crate) fn server_port(&self) -> u16 {
        self.server.port.0
    }

    pub(crate) fn api(&self) -> &ApiSettings {
        &self.api
    }

    pub(crate) fn cors(&self) -> &CorsSettings {
        &self.cors
    }

    pub(crate) fn store(&self) -> &StoreSettings {
        &self.store
    }

    pub(crate) fn telemetry(&self) -> &TelemetrySettings {
        &self.telemetry
    }

    pub(crate) fn runtime(&self) -> &RuntimeSettings {
        &self.runtime
    }
}
