use power_rankings::{parse_count, parse_decimal, AllPlayEntry, RankingResult};
use serde::{Deserialize, Serialize};

/// One franchise row of the power rankings report, as scraped text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllPlayRow {
    /// Franchise display name (first column)
    pub franchise_name: String,
    /// All-play wins (column 13)
    pub wins: String,
    /// All-play losses (column 14)
    pub losses: String,
    /// All-play ties (column 15)
    pub ties: String,
    /// All-play percentage, e.g. ".771" (column 16)
    pub percentage: String,
}

impl AllPlayRow {
    /// Franchise rows start with a letter; header, divider and total rows don't
    pub fn is_franchise(&self) -> bool {
        self.franchise_name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
    }

    /// Parse the scraped text into an all-play entry
    pub fn to_entry(&self) -> RankingResult<AllPlayEntry> {
        Ok(AllPlayEntry {
            team_name: self.franchise_name.clone(),
            wins: parse_count("all-play wins", &self.wins)?,
            losses: parse_count("all-play losses", &self.losses)?,
            ties: parse_count("all-play ties", &self.ties)?,
            percentage: parse_decimal("all-play percentage", &self.percentage)?,
        })
    }
}

/// Keep only rows that describe a franchise
pub fn filter_franchise_rows(rows: Vec<AllPlayRow>) -> Vec<AllPlayRow> {
    rows.into_iter().filter(AllPlayRow::is_franchise).collect()
}
