use anyhow::Context;

const DEFAULT_PORT: &str = "3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub bind: String,
    pub log_filter: String,
}

impl Config {
    /// Reads configuration from the process environment. A `.env` file, when
    /// present, is loaded first and never overrides variables already set.
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let bind = match lookup("API_BIND") {
            Some(bind) => bind,
            None => {
                let port = lookup("PORT").unwrap_or_else(|| DEFAULT_PORT.into());
                let port: u16 = port
                    .parse()
                    .with_context(|| format!("invalid PORT value {port:?}"))?;
                format!("0.0.0.0:{port}")
            }
        };
        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| "info".into());

        Ok(Self {
            database_url,
            bind,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_port_3000() {
        let cfg = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/galaxy")]))
            .unwrap();
        assert_eq!(cfg.bind, "0.0.0.0:3000");
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn port_and_bind_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/galaxy"),
            ("PORT", "8081"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind, "0.0.0.0:8081");

        let cfg = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/galaxy"),
            ("PORT", "8081"),
            ("API_BIND", "127.0.0.1:9000"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind, "127.0.0.1:9000");
    }

    #[test]
    fn database_url_is_required() {
        assert!(Config::from_lookup(lookup(&[])).is_err());
    }

    #[test]
    fn rejects_non_numeric_port() {
        let res = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/galaxy"),
            ("PORT", "abc"),
        ]));
        assert!(res.is_err());
    }
}
