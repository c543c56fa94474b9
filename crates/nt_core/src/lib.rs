pub mod error;
pub mod fetch;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
pub use fetch::ArticleFetcher;
pub use storage::KeyValueStore;
pub use types::{Article, Language, Sentiment, Source, UNKNOWN_SOURCE};

pub mod prelude {
    pub use super::{Article, ArticleFetcher, Error, KeyValueStore, Language, Result};
}
