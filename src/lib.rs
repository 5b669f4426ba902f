pub mod catalog;
pub mod filter;
pub mod model;
pub mod parser;
pub mod report;
pub mod settings;
pub mod source;
pub mod stats;

pub use catalog::ListingCatalog;
pub use model::{GameRecord, Listing, ReleaseDate};
pub use stats::ListingStats;
