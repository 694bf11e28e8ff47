//! Env-driven configuration for the service and the CLI.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binaries. Defaults are provided for convenience during development.
use std::env;
use std::net::{IpAddr, SocketAddr};

const VARS: &[&str] = &[
    "API_HOST",
    "API_PORT",
    "OG_ROUTE",
    "OG_SOURCE",
    "OG_UPSTREAM_URL",
    "OG_FILE_PATH",
    "OG_BACKGROUND",
    "OG_ACCENT",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub api_host: String,
    pub api_port: String,
    pub og_route: String,
    pub og_source: String,
    pub og_upstream_url: Option<String>,
    pub og_file_path: String,
    pub og_background: String,
    pub og_accent: String,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> Result<Self, env::VarError> {
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// Build a config from an arbitrary key lookup, falling back to defaults
    /// for anything the lookup does not know.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let mut og_route = or("OG_ROUTE", "/og.png");
        if !og_route.starts_with('/') {
            og_route.insert(0, '/');
        }

        Config {
            api_host: or("API_HOST", "127.0.0.1"),
            api_port: or("API_PORT", "4321"),
            og_route,
            og_source: or("OG_SOURCE", "render"),
            og_upstream_url: lookup("OG_UPSTREAM_URL").filter(|u| !u.trim().is_empty()),
            og_file_path: or("OG_FILE_PATH", "./public/og.png"),
            og_background: or("OG_BACKGROUND", "#0f172a"),
            og_accent: or("OG_ACCENT", "#38bdf8"),
        }
    }

    /// Resolve the bind address, warning and falling back on unparsable values.
    pub fn socket_addr(&self) -> SocketAddr {
        let ip: IpAddr = self.api_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid API_HOST '{}', falling back to 127.0.0.1", self.api_host);
            IpAddr::from([127, 0, 0, 1])
        });
        let port: u16 = self.api_port.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid API_PORT '{}', falling back to 4321", self.api_port);
            4321
        });
        SocketAddr::new(ip, port)
    }

    pub fn print_env_vars() {
        for var in VARS {
            println!("{}: {}", var, env::var(var).unwrap_or_else(|_| "<unset>".to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let cfg = Config::from_lookup(|_| None);
        assert_eq!(cfg.og_route, "/og.png");
        assert_eq!(cfg.og_source, "render");
        assert_eq!(cfg.og_upstream_url, None);
        assert_eq!(cfg.socket_addr(), "127.0.0.1:4321".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn route_gets_leading_slash() {
        let cfg = Config::from_lookup(lookup(&[("OG_ROUTE", "social/card.png")]));
        assert_eq!(cfg.og_route, "/social/card.png");
    }

    #[test]
    fn blank_upstream_url_is_unset() {
        let cfg = Config::from_lookup(lookup(&[("OG_UPSTREAM_URL", "  ")]));
        assert_eq!(cfg.og_upstream_url, None);
    }

    #[test]
    fn bad_bind_values_fall_back() {
        let cfg = Config::from_lookup(lookup(&[("API_HOST", "not-an-ip"), ("API_PORT", "99999")]));
        assert_eq!(cfg.socket_addr(), "127.0.0.1:4321".parse::<SocketAddr>().unwrap());
    }
}
