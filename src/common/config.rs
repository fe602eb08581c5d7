//! Configuration file handling

use serde::Deserialize;
use std::path::PathBuf;

use super::{Error, Result};

/// Config file name looked up in the current directory
const CONFIG_FILE: &str = "smoke.toml";

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// How to launch the MCP server under test
    #[serde(default)]
    pub server: ServerConfig,

    /// Values baked into the single smoke request
    #[serde(default)]
    pub payload: PayloadConfig,
}

/// Command line for the MCP server process
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Executable to spawn; bare names are resolved on PATH
    #[serde(default = "default_server_path")]
    pub path: String,

    /// Arguments passed to the executable
    #[serde(default = "default_server_args")]
    pub args: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            path: default_server_path(),
            args: default_server_args(),
        }
    }
}

fn default_server_path() -> String {
    "node".to_string()
}

fn default_server_args() -> Vec<String> {
    vec!["dist/index.js".to_string()]
}

/// Default request values for the tag-update smoke run
#[derive(Debug, Deserialize, Clone)]
pub struct PayloadConfig {
    /// Video to update
    #[serde(default = "default_video_id")]
    pub video_id: String,

    /// Full ordered tag set to apply
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
}

impl Default for PayloadConfig {
    fn default() -> Self {
        Self {
            video_id: default_video_id(),
            tags: default_tags(),
        }
    }
}

fn default_video_id() -> String {
    "1104516203".to_string()
}

fn default_tags() -> Vec<String> {
    [
        "1M journey",
        "vimeo automation",
        "mcp servers",
        "ai agents",
        "claude code",
        "api integration",
        "viral titles",
        "content optimization",
        "coding session",
        "automation workflow",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Resolved command for the server process
#[derive(Debug, Clone)]
pub struct ServerCommand {
    pub path: PathBuf,
    pub args: Vec<String>,
}

impl Config {
    /// Load configuration from `./smoke.toml`, falling back to the platform
    /// config directory, then to built-in defaults
    pub fn load() -> Result<Self> {
        for path in Self::candidate_paths() {
            if path.exists() {
                let content = std::fs::read_to_string(&path).map_err(|e| Error::FileRead {
                    path: path.display().to_string(),
                    error: e.to_string(),
                })?;
                return toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()));
            }
        }
        Ok(Self::default())
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dirs) = directories::ProjectDirs::from("", "", "mcp-smoke") {
            paths.push(dirs.config_dir().join("config.toml"));
        }
        paths
    }

    /// Resolve the server command, applying CLI overrides
    ///
    /// Bare executable names are looked up on PATH; explicit paths are used
    /// as-is. An unresolvable name is kept so the spawn error carries the
    /// name the user gave.
    pub fn resolve_server(&self, path: Option<PathBuf>, args: Vec<String>) -> ServerCommand {
        let path = path.unwrap_or_else(|| PathBuf::from(&self.server.path));
        let args = if args.is_empty() {
            self.server.args.clone()
        } else {
            args
        };

        let path = if path.components().count() == 1 {
            which::which(&path).unwrap_or(path)
        } else {
            path
        };

        ServerCommand { path, args }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.path, "node");
        assert_eq!(config.server.args, vec!["dist/index.js"]);
        assert_eq!(config.payload.video_id, "1104516203");
        assert_eq!(config.payload.tags.len(), 10);
        assert_eq!(config.payload.tags[0], "1M journey");
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            path = "/usr/local/bin/my-server"

            [payload]
            video_id = "42"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.path, "/usr/local/bin/my-server");
        assert_eq!(config.server.args, vec!["dist/index.js"]);
        assert_eq!(config.payload.video_id, "42");
        assert_eq!(config.payload.tags.len(), 10);
    }

    #[test]
    fn full_config_parses() {
        let config: Config = toml::from_str(
            r#"
            [server]
            path = "python3"
            args = ["server.py", "--stdio"]

            [payload]
            video_id = "7"
            tags = ["x", "y"]
            "#,
        )
        .unwrap();
        assert_eq!(config.server.path, "python3");
        assert_eq!(config.server.args, vec!["server.py", "--stdio"]);
        assert_eq!(config.payload.tags, vec!["x", "y"]);
    }

    #[test]
    fn cli_overrides_take_precedence() {
        let config = Config::default();
        let command = config.resolve_server(
            Some(PathBuf::from("/opt/mock/server")),
            vec!["reply".to_string()],
        );
        assert_eq!(command.path, PathBuf::from("/opt/mock/server"));
        assert_eq!(command.args, vec!["reply"]);
    }

    #[test]
    fn config_args_survive_path_override() {
        let config = Config::default();
        let command = config.resolve_server(Some(PathBuf::from("/opt/mock/server")), Vec::new());
        assert_eq!(command.args, vec!["dist/index.js"]);
    }
}
