//! Shell configuration.
//!
//! Values come from `STOREFRONT_*` environment variables on native builds
//! and from the page on wasm. A missing value falls back to its default; a
//! malformed one is an error.

use core::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use storefront_catalog::CardFormat;
use storefront_catalog::view::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub base_url: String,
    pub default_page_size: usize,
    pub request_timeout_ms: u64,
    pub currency_symbol: String,
    pub image_base_path: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            request_timeout_ms: 10_000,
            currency_symbol: "£".to_string(),
            image_base_path: "/static/images".to_string(),
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (environment, page attributes, test maps).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let config = Self {
            base_url: read_or(&lookup, "STOREFRONT_BASE_URL", defaults.base_url)?,
            default_page_size: read_or(
                &lookup,
                "STOREFRONT_PAGE_SIZE",
                defaults.default_page_size,
            )?,
            request_timeout_ms: read_or(
                &lookup,
                "STOREFRONT_REQUEST_TIMEOUT_MS",
                defaults.request_timeout_ms,
            )?,
            currency_symbol: read_or(
                &lookup,
                "STOREFRONT_CURRENCY_SYMBOL",
                defaults.currency_symbol,
            )?,
            image_base_path: read_or(
                &lookup,
                "STOREFRONT_IMAGE_BASE_PATH",
                defaults.image_base_path,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.default_page_size == 0 {
            bail!("default page size must be at least 1");
        }
        if self.request_timeout_ms == 0 {
            bail!("request timeout must be positive");
        }
        reqwest::Url::parse(&self.base_url)
            .with_context(|| format!("invalid base url {:?}", self.base_url))?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn card_format(&self) -> CardFormat {
        CardFormat {
            currency_symbol: self.currency_symbol.clone(),
            image_base_path: self.image_base_path.clone(),
        }
    }
}

fn read_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: core::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{key}={raw:?}: {e}")),
        None => {
            tracing::warn!(key, "not set; using default");
            Ok(default)
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
    fn missing_values_fall_back_to_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.default_page_size, 10);
    }

    #[test]
    fn values_are_read_and_parsed() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("STOREFRONT_BASE_URL", "https://shop.example"),
            ("STOREFRONT_PAGE_SIZE", " 25 "),
            ("STOREFRONT_REQUEST_TIMEOUT_MS", "1500"),
            ("STOREFRONT_CURRENCY_SYMBOL", "$"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://shop.example");
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.request_timeout(), Duration::from_millis(1500));
        assert_eq!(config.card_format().currency_symbol, "$");
    }

    #[test]
    fn malformed_or_invalid_values_are_errors() {
        assert!(StorefrontConfig::from_lookup(lookup(&[("STOREFRONT_PAGE_SIZE", "ten")])).is_err());
        assert!(StorefrontConfig::from_lookup(lookup(&[("STOREFRONT_PAGE_SIZE", "0")])).is_err());
        let bad_url = lookup(&[("STOREFRONT_BASE_URL", "not a url")]);
        assert!(StorefrontConfig::from_lookup(bad_url).is_err());
    }

    #[test]
    fn deserializes_partial_documents() {
        let config: StorefrontConfig = serde_json::from_str(r#"{"default_page_size": 5}"#).unwrap();
        assert_eq!(config.default_page_size, 5);
        assert_eq!(config.currency_symbol, "£");
    }
}
