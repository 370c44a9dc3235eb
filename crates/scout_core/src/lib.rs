pub mod config;
pub mod error;
pub mod retry;
pub mod types;

pub use config::Config;
pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

pub use types::{CompetitorQuery, CompetitorRecord, RawSourceBundle, SourceKind, SourceText};

pub mod prelude {
    pub use super::config::Config;
    pub use super::types::{
        CompetitorQuery, CompetitorRecord, RawSourceBundle, SourceKind, SourceText,
    };
    pub use super::{Error, Result};
}
