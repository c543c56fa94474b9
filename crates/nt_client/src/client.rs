use std::fmt;

use async_trait::async_trait;
use nt_core::{Article, ArticleFetcher, Error, Language, Result};
use reqwest::Client;
use serde_json::Value;

use crate::config::ClientConfig;

const SUMMARIZED_FIELD: &str = "summarized_news";
const TRENDING_FIELD: &str = "trending_news";

/// HTTP client for the remote summarization service.
pub struct SummarizerClient {
    client: Client,
    config: ClientConfig,
}

impl fmt::Debug for SummarizerClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummarizerClient")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.config.base_url.as_str())
            .field("timeout", &self.config.timeout)
            .finish()
    }
}

impl SummarizerClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Summarized headlines in `language`, failures reported as errors.
    pub async fn try_fetch_articles(&self, language: Language) -> Result<Vec<Article>> {
        let mut url = self.config.endpoint("summarize-news")?;
        url.query_pairs_mut()
            .append_pair("lang", language.code())
            .append_pair("translate", if self.config.translate { "true" } else { "false" });

        tracing::info!("📡 Fetching summarized news in language: {}", language);
        let body = self.get_text(url).await?;
        parse_envelope(&body, SUMMARIZED_FIELD)
    }

    /// Trending headlines, failures reported as errors.
    pub async fn try_fetch_trending(&self) -> Result<Vec<Article>> {
        let url = self.config.endpoint("trending-news")?;
        tracing::info!("🔥 Fetching trending news");
        let body = self.get_text(url).await?;
        parse_envelope(&body, TRENDING_FIELD)
    }

    async fn get_text(&self, url: url::Url) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        tracing::debug!(status = %response.status(), "Summarizer responded");
        Ok(response.text().await?)
    }
}

#[async_trait]
impl ArticleFetcher for SummarizerClient {
    async fn fetch_articles(&self, language: Language) -> Vec<Article> {
        match self.try_fetch_articles(language).await {
            Ok(articles) => {
                tracing::info!("✅ Received {} summarized articles", articles.len());
                articles
            }
            Err(e) => {
                tracing::warn!("❌ Error fetching summarized news: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_trending(&self) -> Vec<Article> {
        match self.try_fetch_trending().await {
            Ok(articles) => {
                tracing::info!("✅ Received {} trending articles", articles.len());
                articles
            }
            Err(e) => {
                tracing::warn!("❌ Error fetching trending news: {}", e);
                Vec::new()
            }
        }
    }
}

/// Pull the article list out of a service response.
///
/// The service reports its own failures as a 200 with an `error` member.
/// Individual records that do not decode are skipped.
pub(crate) fn parse_envelope(body: &str, field: &str) -> Result<Vec<Article>> {
    let mut value: Value = serde_json::from_str(body)?;

    if let Some(error) = value.get("error") {
        let message = error.as_str().map(str::to_string).unwrap_or_else(|| error.to_string());
        let message = match value.get("details") {
            Some(details) => format!("{} ({})", message, details),
            None => message,
        };
        return Err(Error::Fetch(message));
    }

    let records = match value.get_mut(field).map(Value::take) {
        Some(Value::Array(records)) => records,
        Some(other) => {
            return Err(Error::Fetch(format!(
                "expected '{}' to be a list, got {}",
                field, other
            )))
        }
        None => return Err(Error::Fetch(format!("response has no '{}' member", field))),
    };

    let mut articles = Vec::with_capacity(records.len());
    for record in records {
        match serde_json::from_value::<Article>(record) {
            Ok(article) => articles.push(article),
            Err(e) => tracing::warn!("⚠️ Skipping undecodable article: {}", e),
        }
    }
    Ok(articles)
}
