use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::arith::Variant;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    /// "hourly" | "daily" | anything else = never
    pub rotation: String,
    pub gateway: GatewayConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    /// Falls back to the variant's default port when unset.
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default = "default_variant")]
    pub variant: Variant,
}

fn default_variant() -> Variant {
    Variant::Integer
}

impl GatewayConfig {
    pub fn resolved_port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.variant.default_port())
    }
}

impl AppConfig {
    /// Load `config/{env}.yaml`.
    pub fn load(env: &str) -> Result<Self, ConfigError> {
        Self::from_file(format!("config/{}.yaml", env))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DEV_YAML: &str = r#"
log_level: info
log_dir: ./logs
log_file: arith_gateway.log
use_json: false
rotation: daily
gateway:
  host: 127.0.0.1
  variant: float
"#;

    #[test]
    fn test_port_defaults_from_variant() {
        let cfg = AppConfig::from_yaml(DEV_YAML).unwrap();
        assert_eq!(cfg.gateway.variant, Variant::Float);
        assert_eq!(cfg.gateway.port, None);
        assert_eq!(cfg.gateway.resolved_port(), 8080);
    }

    #[test]
    fn test_explicit_port_wins() {
        let yaml = DEV_YAML.replace("  variant: float", "  port: 9000");
        let cfg = AppConfig::from_yaml(&yaml).unwrap();
        assert_eq!(cfg.gateway.variant, Variant::Integer);
        assert_eq!(cfg.gateway.resolved_port(), 9000);
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let yaml = DEV_YAML.replace("variant: float", "variant: decimal");
        assert!(AppConfig::from_yaml(&yaml).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DEV_YAML.as_bytes()).unwrap();
        let cfg = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(cfg.log_file, "arith_gateway.log");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = AppConfig::from_file("config/does-not-exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
