pub mod details;
pub mod error;
pub mod markers;
pub mod models;
pub mod portal;

pub use error::ScrapeError;
pub use markers::MarkerQuery;
pub use models::ComplexSummary;
pub use portal::{NaverPortal, Portal};
