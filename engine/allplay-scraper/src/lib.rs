//! All-Play Scraper
//!
//! Reads the MyFantasyLeague power rankings report (sorted by all-play) and
//! extracts each franchise's all-play wins, losses, ties and percentage.

pub mod report;
pub mod types;

pub use report::{parse_report, AllPlayScraper};
pub use types::AllPlayRow;
