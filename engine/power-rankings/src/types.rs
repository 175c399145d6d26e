use serde::{Deserialize, Serialize};

/// A franchise in the league with its head-to-head, scoring and all-play data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// MFL franchise ID (e.g., "0003")
    pub team_id: String,
    /// Franchise display name
    pub team_name: String,
    /// Owner display name
    pub owner_name: String,

    /// Head-to-head wins
    pub wins: u32,
    /// Head-to-head losses
    pub losses: u32,
    /// Head-to-head ties
    pub ties: u32,
    /// Total fantasy points scored
    pub points_for: f64,

    /// wins + 0.5 * ties, only used as a ranking key
    pub record_magic: f64,
    /// Placement points earned for fantasy points scored
    pub point_score: f64,
    /// Placement points earned for head-to-head record
    pub record_score: f64,
    /// point_score + record_score
    pub total_score: f64,

    /// All-play wins
    pub all_play_wins: u32,
    /// All-play losses
    pub all_play_losses: u32,
    /// All-play ties
    pub all_play_ties: u32,
    /// All-play winning percentage as published (e.g., 0.771)
    pub all_play_percentage: f64,
}

impl Team {
    /// Create a team from its roster identity with every performance field zeroed
    pub fn from_roster(entry: &RosterEntry) -> Self {
        Self {
            team_id: entry.team_id.clone(),
            team_name: entry.team_name.clone(),
            owner_name: entry.owner_name.clone(),
            ..Default::default()
        }
    }

    /// Head-to-head record as "W-L-T"
    pub fn record(&self) -> String {
        format!("{}-{}-{}", self.wins, self.losses, self.ties)
    }

    /// All-play record as "W-L-T"
    pub fn all_play_record(&self) -> String {
        format!("{}-{}-{}", self.all_play_wins, self.all_play_losses, self.all_play_ties)
    }

    pub fn point_score_display(&self) -> String {
        format_score(self.point_score)
    }

    pub fn record_score_display(&self) -> String {
        format_score(self.record_score)
    }

    pub fn total_score_display(&self) -> String {
        format_score(self.total_score)
    }
}

/// Identity fields for one franchise, from the league roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub team_id: String,
    pub team_name: String,
    pub owner_name: String,
}

/// Parsed head-to-head standings for one franchise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub team_id: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
}

/// Parsed all-play line for one franchise, keyed by display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllPlayEntry {
    pub team_name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub percentage: f64,
}

/// Fixed one-decimal rendering used for every score ("3.5", "16.0")
pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}
