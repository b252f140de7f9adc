//! Site configuration from environment variables.
//!
//! | Variable         | Default    | Meaning                                   |
//! |------------------|------------|-------------------------------------------|
//! | `HOST`           | `0.0.0.0`  | bind address for `serve`                  |
//! | `PORT`           | `3000`     | bind port for `serve`                     |
//! | `CONTENT_PATH`   | (embedded) | JSON content document                     |
//! | `ASSET_DIR`      | `public`   | directory served under `/images`          |
//! | `STRICT_CONTENT` | `false`    | reject projects without case studies      |
//! | `OUTPUT_DIR`     | `dist`     | target directory for `export_site`        |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid {expected}: `{value}`")]
    InvalidValue {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: IpAddr,
    pub port: u16,
    pub content_path: Option<PathBuf>,
    pub asset_dir: PathBuf,
    pub strict_content: bool,
    pub output_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            content_path: None,
            asset_dir: PathBuf::from("public"),
            strict_content: false,
            output_dir: PathBuf::from("dist"),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(value) = get("HOST") {
            config.host = value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "HOST",
                value: value.clone(),
                expected: "IP address",
            })?;
        }
        if let Some(value) = get("PORT") {
            config.port = value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value: value.clone(),
                expected: "port number",
            })?;
        }
        if let Some(value) = get("CONTENT_PATH") {
            config.content_path = Some(PathBuf::from(value));
        }
        if let Some(value) = get("ASSET_DIR") {
            config.asset_dir = PathBuf::from(value);
        }
        if let Some(value) = get("STRICT_CONTENT") {
            config.strict_content = parse_flag(&value).ok_or(ConfigError::InvalidValue {
                name: "STRICT_CONTENT",
                value,
                expected: "boolean (true|false|1|0)",
            })?;
        }
        if let Some(value) = get("OUTPUT_DIR") {
            config.output_dir = PathBuf::from(value);
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
