//! Configuration files for trackctl
//!
//! `.env` files feed the environment (`TRACKCTL_HTTP_ADDR`,
//! `TRACKCTL_GRPC_ADDR`, `RUST_LOG`); TOML files provide defaults for the
//! `serve` command. Command line flags win over both.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const CONFIG_FILE: &str = "config.toml";
const LOCAL_CONFIG_FILE: &str = "trackctl.toml";

/// Load environment variables from .env files.
///
/// Priority order (highest to lowest):
/// 1. Variables already set in the process environment
/// 2. Current directory .env
/// 3. ~/.trackctl/.env
///
/// Runs before logging is set up, so the files that were read are returned
/// for the caller to report.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        // dotenvy never overwrites variables that are already set
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded_from.push(env_file);
        }
    }

    loaded_from
}

/// The trackctl config directory (~/.trackctl)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".trackctl"))
}

/// The user config file (~/.trackctl/config.toml)
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// TOML configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackctlConfig {
    #[serde(default)]
    pub server: ServerSection,
}

/// `[server]` table. Unset keys fall through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_addr: Option<SocketAddr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grpc_addr: Option<SocketAddr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cors_permissive: Option<bool>,
}

impl TrackctlConfig {
    /// Load config from TOML files
    ///
    /// Priority order (highest to lowest):
    /// 1. ./trackctl.toml (project-specific)
    /// 2. ~/.trackctl/config.toml (user defaults)
    /// 3. Built-in defaults
    pub fn load() -> Self {
        Self::load_from(config_path().as_deref(), Path::new(LOCAL_CONFIG_FILE))
    }

    /// Same as [`load`](Self::load) with explicit file locations.
    pub fn load_from(global: Option<&Path>, local: &Path) -> Self {
        let base = global.and_then(read_layer).unwrap_or_default();
        match read_layer(local) {
            Some(overlay) => base.merge(overlay),
            None => base,
        }
    }

    /// Overlay `other` on top of `self`, key by key.
    pub fn merge(self, other: Self) -> Self {
        Self {
            server: ServerSection {
                http_addr: other.server.http_addr.or(self.server.http_addr),
                grpc_addr: other.server.grpc_addr.or(self.server.grpc_addr),
                cors_permissive: other.server.cors_permissive.or(self.server.cors_permissive),
            },
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// Read one config file. Missing or broken files yield `None`; a parse
/// error is logged and otherwise ignored.
fn read_layer(path: &Path) -> Option<TrackctlConfig> {
    if !path.exists() {
        return None;
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            debug!("Failed to read {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str::<TrackctlConfig>(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            warn!("Failed to parse {}: {}", path.display(), e);
            None
        }
    }
}

/// Starter file written by `trackctl config init`
pub const CONFIG_TEMPLATE: &str = r#"# trackctl configuration
#
# Command line flags and TRACKCTL_* environment variables take precedence
# over the values below. A ./trackctl.toml in the working directory
# overrides this file key by key.

[server]
# REST and GraphQL listener
http_addr = "127.0.0.1:3000"

# gRPC listener
grpc_addr = "127.0.0.1:50051"

# Allow every origin instead of localhost only
cors_permissive = false
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_config_dir_returns_path() {
        if let Some(path) = config_dir() {
            assert!(path.ends_with(".trackctl"));
        }
    }

    #[test]
    fn test_missing_files_give_defaults() {
        let dir = TempDir::new().unwrap();
        let config = TrackctlConfig::load_from(
            Some(&dir.path().join("nope.toml")),
            &dir.path().join("also-nope.toml"),
        );
        assert_eq!(config, TrackctlConfig::default());
    }

    #[test]
    fn test_template_parses() {
        let config: TrackctlConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.server.http_addr, Some("127.0.0.1:3000".parse().unwrap()));
        assert_eq!(config.server.grpc_addr, Some("127.0.0.1:50051".parse().unwrap()));
        assert_eq!(config.server.cors_permissive, Some(false));
    }

    #[test]
    fn test_local_overrides_global_key_by_key() {
        let dir = TempDir::new().unwrap();
        let global = write(
            &dir,
            "config.toml",
            "[server]\nhttp_addr = \"0.0.0.0:8080\"\ngrpc_addr = \"0.0.0.0:9090\"\n",
        );
        let local = write(&dir, "trackctl.toml", "[server]\ngrpc_addr = \"127.0.0.1:7000\"\n");

        let config = TrackctlConfig::load_from(Some(&global), &local);
        assert_eq!(config.server.http_addr, Some("0.0.0.0:8080".parse().unwrap()));
        assert_eq!(config.server.grpc_addr, Some("127.0.0.1:7000".parse().unwrap()));
        assert_eq!(config.server.cors_permissive, None);
    }

    #[test]
    fn test_broken_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let global = write(&dir, "config.toml", "[server]\ncors_permissive = true\n");
        let local = write(&dir, "trackctl.toml", "[server\nhttp_addr = ");

        let config = TrackctlConfig::load_from(Some(&global), &local);
        assert_eq!(config.server.cors_permissive, Some(true));
    }

    #[test]
    fn test_to_toml_skips_unset_keys() {
        let config = TrackctlConfig {
            server: ServerSection {
                cors_permissive: Some(true),
                ..ServerSection::default()
            },
        };
        let text = config.to_toml().unwrap();
        assert!(text.contains("cors_permissive = true"));
        assert!(!text.contains("http_addr"));
    }
}
