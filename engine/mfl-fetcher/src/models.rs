use power_rankings::{
    parse_count, parse_decimal, RankingError, RankingResult, RosterEntry, StandingsEntry,
};
use serde::{Deserialize, Serialize};

/// `TYPE=league` export response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueResponse {
    #[serde(default)]
    pub version: Option<String>,

    pub league: League,

    #[serde(default)]
    pub encoding: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct League {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub franchises: Franchises,

    #[serde(rename = "baseURL", default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub h2h: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Franchises {
    /// Declared number of franchises, as a decimal string
    #[serde(default)]
    pub count: Option<String>,

    #[serde(default)]
    pub franchise: Vec<Franchise>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Franchise {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub owner_name: String,

    #[serde(default)]
    pub username: Option<String>,
}

/// `TYPE=leagueStandings` export response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueStandingsResponse {
    #[serde(default)]
    pub version: Option<String>,

    #[serde(rename = "leagueStandings")]
    pub league_standings: LeagueStandings,

    #[serde(default)]
    pub encoding: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeagueStandings {
    #[serde(default)]
    pub franchise: Vec<FranchiseStanding>,
}

/// One standings line; MFL sends every number as a string
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FranchiseStanding {
    pub id: String,

    #[serde(rename = "h2hw", default = "zero")]
    pub h2h_wins: String,

    #[serde(rename = "h2hl", default = "zero")]
    pub h2h_losses: String,

    #[serde(rename = "h2ht", default = "zero")]
    pub h2h_ties: String,

    #[serde(rename = "pf", default = "zero")]
    pub points_for: String,

    #[serde(rename = "pa", default)]
    pub points_against: Option<String>,
}

fn zero() -> String {
    "0".to_string()
}

impl LeagueResponse {
    /// Roster identities in the order the league lists them
    pub fn roster(&self) -> Vec<RosterEntry> {
        self.league
            .franchises
            .franchise
            .iter()
            .map(|f| RosterEntry {
                team_id: f.id.clone(),
                team_name: f.name.clone(),
                owner_name: f.owner_name.clone(),
            })
            .collect()
    }

    /// Check the declared franchise count against the listed franchises
    pub fn check_declared_count(&self) -> RankingResult<()> {
        let listed = self.league.franchises.franchise.len();
        if let Some(count) = &self.league.franchises.count {
            let declared = parse_count("franchises.count", count)? as usize;
            if declared != listed {
                return Err(RankingError::DeclaredCount { declared, listed });
            }
        }
        Ok(())
    }
}

impl FranchiseStanding {
    /// Parse the string fields into a standings entry
    pub fn to_standings_entry(&self) -> RankingResult<StandingsEntry> {
        Ok(StandingsEntry {
            team_id: self.id.clone(),
            wins: parse_count("h2hw", &self.h2h_wins)?,
            losses: parse_count("h2hl", &self.h2h_losses)?,
            ties: parse_count("h2ht", &self.h2h_ties)?,
            points_for: parse_decimal("pf", &self.points_for)?,
        })
    }
}

impl LeagueStandingsResponse {
    /// Parse every standings line, failing on the first bad value
    pub fn standings(&self) -> RankingResult<Vec<StandingsEntry>> {
        self.league_standings.franchise.iter().map(FranchiseStanding::to_standings_entry).collect()
    }
}
