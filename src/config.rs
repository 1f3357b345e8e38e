//! Server configuration read from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 6972;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port (`PORT`).
    pub port: u16,
    /// Directory holding the reference JSON datasets (`DATA_DIR`).
    pub data_dir: PathBuf,
    /// Directory of static assets served under `/public` (`PUBLIC_DIR`).
    pub public_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_dir: PathBuf::from("data"),
            public_dir: PathBuf::from("public"),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.port);
        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let public_dir = std::env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.public_dir);

        Self {
            port,
            data_dir,
            public_dir,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
