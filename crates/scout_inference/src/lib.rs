pub mod models;
pub mod prompt;

pub use models::{create_model, ExtractionModel};

pub mod prelude {
    pub use super::models::{create_model, ExtractionModel};
    pub use scout_core::{CompetitorRecord, Error, RawSourceBundle, Result};
}
