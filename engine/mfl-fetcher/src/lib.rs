//! MyFantasyLeague Fetcher
//!
//! Client for the MFL export API. Fetches the league roster and the
//! head-to-head standings for one league and converts them into the
//! core ranking types.

pub mod config;
pub mod fetcher;
pub mod models;

pub use config::MflConfig;
pub use fetcher::MflFetcher;
pub use models::*;
