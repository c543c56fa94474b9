use std::time::Duration;

use nt_core::{Error, Result};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to reach the summarization service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
    /// Ask the service to translate summaries into the requested language.
    pub translate: bool,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url.trim())
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(format!(
                "{} cannot be used as a base url",
                base_url
            )));
        }
        // Keep any path prefix when joining endpoints onto it.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            translate: true,
        })
    }

    /// A service running on this machine at [`DEFAULT_BASE_URL`].
    pub fn local() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_translate(mut self, translate: bool) -> Self {
        self.translate = translate;
        self
    }

    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_config() {
        let config = ClientConfig::local().unwrap();
        assert_eq!(
            config.endpoint("trending-news").unwrap().as_str(),
            "http://127.0.0.1:8000/trending-news"
        );
        assert!(config.translate);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_path_prefix_is_kept() {
        let config = ClientConfig::new("https://news.example.com/api").unwrap();
        assert_eq!(
            config.endpoint("summarize-news").unwrap().as_str(),
            "https://news.example.com/api/summarize-news"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(ClientConfig::new("mailto:news@example.com").is_err());
    }
}
