use std::path::PathBuf;

use serde::Deserialize;

/// Runtime configuration for the server.
///
/// Defaults mirror the fixed values the server has always run with:
/// listen on `127.0.0.1:10000`, serve the `webroot` directory relative to
/// the working directory, and read requests in 1024-byte chunks.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Address the listener binds.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Directory tree the server is permitted to serve content from.
    #[serde(default = "default_webroot")]
    pub webroot: PathBuf,
    /// Chunk size for socket reads. Also drives end-of-request detection:
    /// a read shorter than this is taken as the end of the request.
    #[serde(default = "default_read_buf_size")]
    pub read_buf_size: usize,
}

fn default_listen_addr() -> String {
    "127.0.0.1:10000".to_string()
}

fn default_webroot() -> PathBuf {
    PathBuf::from("webroot")
}

fn default_read_buf_size() -> usize {
    1024
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            webroot: default_webroot(),
            read_buf_size: default_read_buf_size(),
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// If `WEBROOT_CONFIG` names a YAML file, that file is parsed and its
    /// values win (missing fields fall back to the defaults). Otherwise the
    /// `LISTEN` and `WEBROOT` environment variables override the defaults.
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(path) = std::env::var("WEBROOT_CONFIG") {
            let raw = std::fs::read_to_string(&path)?;
            let cfg = serde_yaml::from_str(&raw)?;
            return Ok(cfg);
        }

        let mut cfg = Config::default();
        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("WEBROOT") {
            cfg.webroot = PathBuf::from(root);
        }

        Ok(cfg)
    }
}
