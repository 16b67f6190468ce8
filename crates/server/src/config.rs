use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DIST_DIR: &str = "dist";

/// Start-up settings, read once from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding the built bundle (`index.html`, `assets/`, `static/`).
    pub dist_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or empty variables keep their defaults.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(host) = var("HOST") {
            config.host = host
                .trim()
                .parse()
                .map_err(|e| format!("Invalid HOST {host:?}: {e}"))?;
        }
        if let Some(port) = var("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|e| format!("Invalid PORT {port:?}: {e}"))?;
        }
        if let Some(dir) = var("DIST_DIR") {
            config.dist_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DIST_DIR", "/srv/champions"),
        ]))
        .unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.dist_dir, PathBuf::from("/srv/champions"));
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[("PORT", ""), ("DIST_DIR", "  ")])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
        assert!(err.starts_with("Invalid PORT"));
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("HOST", "localhost")])).unwrap_err();
        assert!(err.starts_with("Invalid HOST"));
    }
}
