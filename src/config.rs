use anyhow::Context;

/// Version reported by `/health` and `/api/info`. CI can stamp a build
/// number by exporting `APP_BUILD_VERSION` when compiling.
pub const APP_VERSION: Option<&str> = match option_env!("APP_BUILD_VERSION") {
    Some(version) => Some(version),
    None => Some(env!("CARGO_PKG_VERSION")),
};

pub const APP_NAME: &str = "CI/CD POC Application";

pub const DEFAULT_ENVIRONMENT: &str = "Production";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to touch
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            environment: lookup("APP_ENVIRONMENT")
                .map(|env| env.trim().to_string())
                .filter(|env| !env.is_empty())
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("Development")
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, "Production");
        assert!(!config.is_development());
        assert_eq!(config.addr(), "127.0.0.1:3000");
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("APP_ENVIRONMENT", "Development"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "0.0.0.0:8080");
        assert!(config.is_development());
    }

    #[test]
    fn development_check_ignores_case() {
        let config =
            Config::from_lookup(lookup_from(&[("APP_ENVIRONMENT", "development")])).unwrap();
        assert!(config.is_development());
    }

    #[test]
    fn blank_environment_falls_back_to_production() {
        let config = Config::from_lookup(lookup_from(&[("APP_ENVIRONMENT", "  ")])).unwrap();
        assert_eq!(config.environment, "Production");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().contains("PORT must be a valid number"));
    }

    #[test]
    fn version_is_baked_in() {
        assert!(APP_VERSION.is_some_and(|v| !v.is_empty()));
    }
}
