use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

/// Server configuration, fixed for the lifetime of the process.
///
/// Loaded once at startup and never mutated afterwards; request handling
/// only ever reads it.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the listener binds to, e.g. "127.0.0.1:8080".
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Directory below which all served files must resolve.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Document served when the request path is "/".
    #[serde(default = "default_index")]
    pub index: String,
    /// Upper bound on concurrently handled connections. `None` means one
    /// task per connection with no ceiling.
    #[serde(default)]
    pub max_connections: Option<usize>,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_index() -> String {
    "index.html".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            root: default_root(),
            index: default_index(),
            max_connections: None,
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by `BASTION_CONFIG`,
    /// falling back to defaults when the variable is unset. `LISTEN` and
    /// `WEB_ROOT` override the file for quick deployments.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("BASTION_CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {}", path))?;
                Self::from_yaml(&raw)
                    .with_context(|| format!("failed to parse config file {}", path))?
            }
            Err(_) => Config::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("WEB_ROOT") {
            cfg.root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    /// Parses a configuration document from YAML.
    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}
