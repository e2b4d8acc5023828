/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_registry")]
    pub registry: RegistrySettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// HTTP health endpoint port; disabled when unset
    #[serde(default)]
    pub health_port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistrySettings {
    /// Start with the two demo users instead of an empty registry
    #[serde(default = "default_seed_demo_users")]
    pub seed_demo_users: bool,
}

impl ServerConfig {
    /// Load configuration from `./config.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from file and environment.
    ///
    /// An explicit `path` must exist. Without one, `./config.toml` is read
    /// when present. Environment variables prefixed with `USERHUB_` override
    /// file values, with `__` between nested keys (`USERHUB_SERVER__PORT`).
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("USERHUB")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.host_ip()?;

        if self.server.port != 0 && self.server.health_port == Some(self.server.port) {
            return Err(ServerError::Config(format!(
                "Health port {} collides with the gRPC port",
                self.server.port
            )));
        }

        Ok(())
    }

    /// Address the gRPC service binds to
    pub fn grpc_addr(&self) -> Result<SocketAddr> {
        Ok(SocketAddr::new(self.host_ip()?, self.server.port))
    }

    /// Address the HTTP health endpoint binds to, when enabled
    pub fn health_addr(&self) -> Result<Option<SocketAddr>> {
        let ip = self.host_ip()?;
        Ok(self.server.health_port.map(|port| SocketAddr::new(ip, port)))
    }

    fn host_ip(&self) -> Result<IpAddr> {
        self.server.host.parse().map_err(|_| {
            ServerError::Config(format!("Invalid host address: {}", self.server.host))
        })
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
        health_port: None,
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    50051
}

fn default_registry() -> RegistrySettings {
    RegistrySettings {
        seed_demo_users: default_seed_demo_users(),
    }
}

fn default_seed_demo_users() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            registry: default_registry(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 50051);
        assert!(config.server.health_port.is_none());
        assert!(config.registry.seed_demo_users);
        assert_eq!(
            config.grpc_addr().unwrap(),
            "0.0.0.0:50051".parse::<SocketAddr>().unwrap()
        );
        assert!(config.health_addr().unwrap().is_none());
    }

    #[test]
    fn test_validate_rejects_bad_host() {
        let mut config = ServerConfig::default();
        config.server.host = "not-an-ip".to_string();
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_port_collision() {
        let mut config = ServerConfig::default();
        config.server.health_port = Some(config.server.port);
        assert!(config.validate().is_err());

        config.server.health_port = Some(8080);
        assert!(config.validate().is_ok());
        assert_eq!(
            config.health_addr().unwrap(),
            Some("0.0.0.0:8080".parse().unwrap())
        );
    }
}
