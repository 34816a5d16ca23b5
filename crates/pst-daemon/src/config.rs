//! Daemon configuration: command-line flags over environment over defaults.
//!
//! Environment:
//! - `PST_DAEMON_ADDR`   bind address (e.g. `0.0.0.0:8899`)
//! - `PST_CORS_ORIGINS`  comma-separated extra CORS origins

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

pub const ADDR_ENV: &str = "PST_DAEMON_ADDR";
pub const CORS_ORIGINS_ENV: &str = "PST_CORS_ORIGINS";

pub const DEFAULT_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST), 8899);

/// Browser origins always allowed by CORS.
pub const LOCAL_ORIGINS: &[&str] = &[
    "http://localhost",
    "http://127.0.0.1",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:5173",
    "http://127.0.0.1:5173",
];

#[derive(Parser, Debug, Default)]
#[command(name = "pst-daemon")]
#[command(about = "Parcel locker demo service", long_about = None)]
pub struct DaemonArgs {
    /// Socket address to bind (overrides PST_DAEMON_ADDR)
    #[arg(long)]
    pub addr: Option<SocketAddr>,

    /// Extra allowed CORS origin; may be repeated
    #[arg(long = "cors-origin")]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonConfig {
    pub addr: SocketAddr,
    /// Localhost origins followed by configured extras, deduplicated.
    pub cors_origins: Vec<String>,
}

impl DaemonConfig {
    /// Merge flags, environment (looked up through `env`) and defaults.
    pub fn resolve<F>(args: &DaemonArgs, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = match args.addr {
            Some(a) => a,
            None => match env(ADDR_ENV).filter(|v| !v.trim().is_empty()) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid {ADDR_ENV}: '{raw}'"))?,
                None => DEFAULT_ADDR,
            },
        };

        let mut cors_origins: Vec<String> = LOCAL_ORIGINS.iter().map(|o| o.to_string()).collect();
        let from_env = env(CORS_ORIGINS_ENV).unwrap_or_default();
        let extras = from_env
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .chain(args.cors_origins.iter().cloned());
        for origin in extras {
            if !cors_origins.contains(&origin) {
                cors_origins.push(origin);
            }
        }

        Ok(Self { addr, cors_origins })
    }

    /// Resolve against the process environment.
    pub fn from_process_env(args: &DaemonArgs) -> Result<Self> {
        Self::resolve(args, |k| std::env::var(k).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = DaemonConfig::resolve(&DaemonArgs::default(), env_of(&[])).unwrap();
        assert_eq!(cfg.addr, DEFAULT_ADDR);
        assert_eq!(cfg.cors_origins.len(), LOCAL_ORIGINS.len());
    }

    #[test]
    fn env_addr_is_used() {
        let cfg = DaemonConfig::resolve(
            &DaemonArgs::default(),
            env_of(&[(ADDR_ENV, "0.0.0.0:9000")]),
        )
        .unwrap();
        assert_eq!(cfg.addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn flag_wins_over_env() {
        let args = DaemonArgs {
            addr: Some("127.0.0.1:7000".parse().unwrap()),
            cors_origins: vec![],
        };
        let cfg = DaemonConfig::resolve(&args, env_of(&[(ADDR_ENV, "0.0.0.0:9000")])).unwrap();
        assert_eq!(cfg.addr.port(), 7000);
    }

    #[test]
    fn bad_env_addr_is_an_error() {
        let err = DaemonConfig::resolve(&DaemonArgs::default(), env_of(&[(ADDR_ENV, "nope")]))
            .unwrap_err();
        assert!(err.to_string().contains(ADDR_ENV), "got: {err}");
    }

    #[test]
    fn extra_origins_are_appended_once() {
        let args = DaemonArgs {
            addr: None,
            cors_origins: vec!["http://qa.local".into(), "http://localhost".into()],
        };
        let cfg = DaemonConfig::resolve(
            &args,
            env_of(&[(CORS_ORIGINS_ENV, "http://qa.local, http://lab.local")]),
        )
        .unwrap();
        assert_eq!(cfg.cors_origins.len(), LOCAL_ORIGINS.len() + 2);
        assert!(cfg.cors_origins.contains(&"http://lab.local".to_string()));
    }
}
