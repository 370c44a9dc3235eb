pub mod fetcher;
pub mod page;
pub mod search;

pub use fetcher::SourceFetcher;
pub use page::{HttpPageFetcher, PageFetcher};
pub use search::{BraveSearch, SearchHit, SearchProvider};

pub mod prelude {
    pub use super::fetcher::SourceFetcher;
    pub use super::page::PageFetcher;
    pub use super::search::{SearchHit, SearchProvider};
    pub use scout_core::{Error, RawSourceBundle, Result, SourceText};
}
