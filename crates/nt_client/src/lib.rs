pub mod client;
pub mod config;
pub mod logging;

pub use client::SummarizerClient;
pub use config::ClientConfig;
pub use logging::init_logging;

pub mod prelude {
    pub use super::{ClientConfig, SummarizerClient};
    pub use nt_core::{Article, ArticleFetcher, Error, Result};
}
