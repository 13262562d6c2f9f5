//! Runtime configuration read from the environment.

use crate::error::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/bookmarks";
pub const DEFAULT_BASE_PATH: &str = "/api/bookmarks";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub database_url: String,
    /// Static bearer token every bookmark request must present.
    pub api_token: String,
    /// Mount point of the bookmark routes. Empty means the server root.
    pub base_path: String,
    /// Prefix for `Location` headers, e.g. `http://localhost:8000`. Empty yields relative locations.
    pub public_url: String,
    pub listen_addr: String,
    pub max_connections: u32,
    pub auto_create_schema: bool,
}

impl ApiConfig {
    /// Config with defaults for everything except the token.
    pub fn new(api_token: impl Into<String>) -> Self {
        ApiConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            api_token: api_token.into(),
            base_path: DEFAULT_BASE_PATH.into(),
            public_url: String::new(),
            listen_addr: DEFAULT_LISTEN_ADDR.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            auto_create_schema: true,
        }
    }

    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.base_path = normalize_base_path(base_path);
        self
    }

    pub fn with_public_url(mut self, public_url: &str) -> Self {
        self.public_url = public_url.trim_end_matches('/').to_string();
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_token = get("API_TOKEN").ok_or(ConfigError::Missing("API_TOKEN"))?;
        let mut config = ApiConfig::new(api_token);
        if let Some(url) = get("DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(base) = get("BASE_PATH") {
            config = config.with_base_path(&base);
        }
        if let Some(public) = get("PUBLIC_URL") {
            config = config.with_public_url(&public);
        }
        if let Some(addr) = get("LISTEN_ADDR") {
            config.listen_addr = addr;
        }
        if let Some(n) = get("DB_MAX_CONNECTIONS") {
            config.max_connections = n
                .parse()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    var: "DB_MAX_CONNECTIONS",
                    value: n.clone(),
                })?;
        }
        if let Some(flag) = get("AUTO_CREATE_SCHEMA") {
            config.auto_create_schema = parse_flag(&flag).ok_or(ConfigError::Invalid {
                var: "AUTO_CREATE_SCHEMA",
                value: flag.clone(),
            })?;
        }
        Ok(config)
    }

    /// Route path of one bookmark, e.g. `/api/bookmarks/7`.
    pub fn item_path(&self, id: i64) -> String {
        format!("{}/{}", self.base_path, id)
    }

    /// Value of the `Location` header for a created bookmark.
    pub fn item_location(&self, id: i64) -> String {
        format!("{}{}", self.public_url, self.item_path(id))
    }
}

/// Leading slash, no trailing slash; `/` collapses to the empty string.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn token_is_required() {
        let err = ApiConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("API_TOKEN")));
    }

    #[test]
    fn defaults_apply_when_only_token_is_set() {
        let config = ApiConfig::from_lookup(lookup_from(&[("API_TOKEN", "secret")])).unwrap();
        assert_eq!(config.api_token, "secret");
        assert_eq!(config.base_path, "/api/bookmarks");
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.max_connections, 5);
        assert!(config.auto_create_schema);
    }

    #[test]
    fn overrides_are_read() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("API_TOKEN", "secret"),
            ("BASE_PATH", "bookmarks/"),
            ("PUBLIC_URL", "http://localhost:8000/"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("AUTO_CREATE_SCHEMA", "off"),
        ]))
        .unwrap();
        assert_eq!(config.base_path, "/bookmarks");
        assert_eq!(config.item_location(4), "http://localhost:8000/bookmarks/4");
        assert_eq!(config.max_connections, 12);
        assert!(!config.auto_create_schema);
    }

    #[test]
    fn invalid_pool_size_is_rejected() {
        let err = ApiConfig::from_lookup(lookup_from(&[
            ("API_TOKEN", "secret"),
            ("DB_MAX_CONNECTIONS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "DB_MAX_CONNECTIONS", .. }));
    }

    #[test]
    fn base_path_normalization() {
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path("api/bookmarks"), "/api/bookmarks");
        assert_eq!(normalize_base_path("/api/bookmarks/"), "/api/bookmarks");
    }

    #[test]
    fn relative_location_without_public_url() {
        let config = ApiConfig::new("t");
        assert_eq!(config.item_location(9), "/api/bookmarks/9");
    }
}
