//! Catalog runtime configuration.
//!
//! # Responsibility
//! - Resolve backend base URL and paging defaults from the environment.
//! - Normalize page sizes according to the catalog listing contract.
//!
//! # Invariants
//! - `api_base_url` is `http(s)://<host>...` without a trailing slash.
//! - `page_size` is within `1..=PAGE_SIZE_MAX`.

use crate::query::pager::DEFAULT_WINDOW_RADIUS;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const API_URL_ENV: &str = "POKEDEX_API_URL";
pub const PAGE_SIZE_ENV: &str = "POKEDEX_PAGE_SIZE";

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_PAGE_SIZE: u32 = 20;
const PAGE_SIZE_MAX: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBaseUrl(String),
    InvalidPageSize(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBaseUrl(value) => {
                write!(f, "api base url must start with http:// or https://, got `{value}`")
            }
            Self::InvalidPageSize(value) => {
                write!(f, "page size must be a non-negative integer, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Settings shared by the fetch layer and the catalog service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub api_base_url: String,
    pub page_size: u32,
    pub window_radius: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            window_radius: DEFAULT_WINDOW_RADIUS,
        }
    }
}

impl CatalogConfig {
    /// Reads `POKEDEX_API_URL` and `POKEDEX_PAGE_SIZE` from the process
    /// environment. Unset or blank variables keep defaults.
    ///
    /// # Errors
    /// - Returns an error when a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CatalogConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(API_URL_ENV)) {
            config.api_base_url = normalize_base_url(&raw)?;
        }

        if let Some(raw) = non_blank(lookup(PAGE_SIZE_ENV)) {
            let parsed = raw
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidPageSize(raw.clone()))?;
            config.page_size = normalize_page_size(Some(parsed));
        }

        Ok(config)
    }
}

/// Normalizes page size: unset or `0` → default, above max → max.
pub fn normalize_page_size(page_size: Option<u32>) -> u32 {
    match page_size {
        Some(0) | None => DEFAULT_PAGE_SIZE,
        Some(value) if value > PAGE_SIZE_MAX => PAGE_SIZE_MAX,
        Some(value) => value,
    }
}

/// Validates scheme and strips trailing slashes.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match host {
        Some(rest) if !rest.is_empty() => Ok(trimmed.to_string()),
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_string())),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{
        normalize_base_url, normalize_page_size, CatalogConfig, ConfigError, API_URL_ENV,
        PAGE_SIZE_ENV,
    };

    #[test]
    fn page_size_defaults_and_caps() {
        assert_eq!(normalize_page_size(None), 20);
        assert_eq!(normalize_page_size(Some(0)), 20);
        assert_eq!(normalize_page_size(Some(35)), 35);
        assert_eq!(normalize_page_size(Some(500)), 100);
    }

    #[test]
    fn base_url_requires_http_scheme() {
        assert_eq!(
            normalize_base_url(" https://dex.example.com/ ").unwrap(),
            "https://dex.example.com"
        );
        assert!(matches!(
            normalize_base_url("ftp://dex"),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
        assert!(normalize_base_url("http://").is_err());
    }

    #[test]
    fn lookup_applies_overrides_and_ignores_blanks() {
        let config = CatalogConfig::from_lookup(|key| match key {
            API_URL_ENV => Some("http://api.local:8080/".to_string()),
            PAGE_SIZE_ENV => Some("  ".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.api_base_url, "http://api.local:8080");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.window_radius, 2);
    }

    #[test]
    fn lookup_rejects_non_numeric_page_size() {
        let err = CatalogConfig::from_lookup(|key| {
            (key == PAGE_SIZE_ENV).then(|| "twenty".to_string())
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidPageSize("twenty".to_string()));
    }
}
