//! Supabase connection settings.

use crate::error::{Result, SourceError};
use std::fmt;

/// Environment variable holding the project URL.
pub const URL_ENV: &str = "SUPABASE_URL";
/// Environment variable holding the public anon key.
pub const ANON_KEY_ENV: &str = "SUPABASE_ANON_KEY";

/// Values left in place when deployment did not substitute real credentials.
pub const URL_PLACEHOLDER: &str = "SUPABASE_URL_PLACEHOLDER";
pub const ANON_KEY_PLACEHOLDER: &str = "SUPABASE_ANON_KEY_PLACEHOLDER";

/// PostgREST's default maximum rows per response.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Supabase project URL and anon key.
///
/// The anon key is public by design (it ships to browsers), but it is still
/// kept out of `Debug` output.
#[derive(Clone, PartialEq)]
pub struct SupabaseConfig {
    url: String,
    anon_key: String,
    page_size: usize,
}

impl SupabaseConfig {
    /// Validate and build a configuration.
    pub fn new(url: &str, anon_key: &str) -> Result<Self> {
        let url = url.trim().trim_end_matches('/');
        let anon_key = anon_key.trim();

        if url.is_empty() || url == URL_PLACEHOLDER {
            return Err(SourceError::Config(format!(
                "project URL is not set ({})",
                URL_ENV
            )));
        }
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(SourceError::Config(format!(
                "project URL must start with http:// or https://, got '{}'",
                url
            )));
        }
        if anon_key.is_empty() || anon_key == ANON_KEY_PLACEHOLDER {
            return Err(SourceError::Config(format!(
                "anon key is not set ({})",
                ANON_KEY_ENV
            )));
        }

        Ok(Self {
            url: url.to_string(),
            anon_key: anon_key.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Read `SUPABASE_URL` and `SUPABASE_ANON_KEY` from the environment.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(URL_ENV).unwrap_or_default();
        let key = std::env::var(ANON_KEY_ENV).unwrap_or_default();
        Self::new(&url, &key)
    }

    /// Rows requested per page (clamped to at least 1).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// REST endpoint for a table.
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }
}

impl fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .field("page_size", &self.page_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_rest_url_without_double_slash() {
        let config = SupabaseConfig::new("https://demo.supabase.co/", "key").unwrap();
        assert_eq!(
            config.rest_url("territories"),
            "https://demo.supabase.co/rest/v1/territories"
        );
    }

    #[test]
    fn rejects_placeholders_and_empty_values() {
        assert!(matches!(
            SupabaseConfig::new(URL_PLACEHOLDER, "key"),
            Err(SourceError::Config(_))
        ));
        assert!(matches!(
            SupabaseConfig::new("https://demo.supabase.co", ANON_KEY_PLACEHOLDER),
            Err(SourceError::Config(_))
        ));
        assert!(matches!(
            SupabaseConfig::new("", "key"),
            Err(SourceError::Config(_))
        ));
        assert!(matches!(
            SupabaseConfig::new("https://demo.supabase.co", "  "),
            Err(SourceError::Config(_))
        ));
    }

    #[test]
    fn rejects_url_without_scheme() {
        assert!(SupabaseConfig::new("demo.supabase.co", "key").is_err());
    }

    #[test]
    fn debug_output_hides_key() {
        let config = SupabaseConfig::new("https://demo.supabase.co", "secret-ish").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-ish"));
        assert!(debug.contains("demo.supabase.co"));
    }

    #[test]
    fn page_size_is_at_least_one() {
        let config = SupabaseConfig::new("https://demo.supabase.co", "key")
            .unwrap()
            .with_page_size(0);
        assert_eq!(config.page_size(), 1);
    }
}
