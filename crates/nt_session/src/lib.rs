pub mod collection;
pub mod filter;
pub mod state;

pub use collection::{ArticleCollection, FetchStatus, Generation};
pub use filter::{filtered_view, FilterState, ALL_CATEGORIES, KNOWN_CATEGORIES};
pub use state::{FetchOutcome, PendingFetch, Session};

pub mod prelude {
    pub use crate::{FetchStatus, FilterState, Session};
    pub use nt_core::{Article, Error, Language, Result};
}
