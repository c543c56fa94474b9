use async_trait::async_trait;
use crate::types::{Article, Language};

/// Remote source of summarized articles.
///
/// Implementations swallow transport and parse failures at this boundary:
/// a failed call yields an empty list and is only logged.
#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    /// Fetch the summarized headlines, translated into `language`.
    async fn fetch_articles(&self, language: Language) -> Vec<Article>;

    /// Fetch the trending headlines. Not language dependent.
    async fn fetch_trending(&self) -> Vec<Article>;
}
