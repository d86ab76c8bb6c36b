use std::{net::SocketAddr, path::PathBuf};

use groupie::GroupieClient;

/// Runtime settings, read from the environment once at startup.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) port: u16,
    pub(crate) api_url: String,
    /// Only consulted in debug builds, release builds embed the static dir.
    pub(crate) static_dir: PathBuf,
    pub(crate) pkg_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8081,
            api_url: GroupieClient::GROUPIE_BASE_URL.to_string(),
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
            pkg_dir: PathBuf::from("./target/site/pkg"),
        }
    }
}

impl Config {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(default.port),
            api_url: lookup("GROUPIE_API_URL").unwrap_or(default.api_url),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.static_dir),
            pkg_dir: lookup("PKG_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.pkg_dir),
        }
    }

    pub(crate) fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
