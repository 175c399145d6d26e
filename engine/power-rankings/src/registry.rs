use crate::error::{RankingError, RankingResult};
use crate::types::{RosterEntry, StandingsEntry, Team};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Fail unless the roster and standings describe the same number of franchises
pub fn check_parity(roster: &[RosterEntry], standings: &[StandingsEntry]) -> RankingResult<()> {
    if roster.len() != standings.len() {
        return Err(RankingError::Parity { roster: roster.len(), standings: standings.len() });
    }
    Ok(())
}

/// Merge the roster with the standings into one team per roster entry
///
/// Teams come back in roster order. A roster entry without a standings line
/// keeps zeroed performance fields.
pub fn build_registry(
    roster: &[RosterEntry],
    standings: &[StandingsEntry],
) -> RankingResult<Vec<Team>> {
    check_parity(roster, standings)?;

    let standings_by_id: HashMap<&str, &StandingsEntry> =
        standings.iter().map(|s| (s.team_id.as_str(), s)).collect();

    let teams = roster
        .iter()
        .map(|entry| {
            let mut team = Team::from_roster(entry);
            match standings_by_id.get(entry.team_id.as_str()) {
                Some(standing) => {
                    team.wins = standing.wins;
                    team.losses = standing.losses;
                    team.ties = standing.ties;
                    team.points_for = standing.points_for;
                }
                None => {
                    warn!("No standings found for franchise {} ({})", team.team_id, team.team_name);
                }
            }
            team
        })
        .collect::<Vec<_>>();

    debug!("Built registry with {} teams", teams.len());
    Ok(teams)
}
