use crate::scoring::descending;
use crate::types::{AllPlayEntry, Team};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::warn;

/// Copy all-play results onto teams, matched by exact team name
///
/// The report has no franchise IDs, so the display name is the only join
/// key. Teams without a match keep zeroed all-play fields; when the report
/// repeats a name the last line wins.
pub fn join_all_play(teams: &mut [Team], all_play: &[AllPlayEntry]) {
    let by_name: HashMap<&str, &AllPlayEntry> =
        all_play.iter().map(|entry| (entry.team_name.as_str(), entry)).collect();

    for team in teams.iter_mut() {
        match by_name.get(team.team_name.as_str()) {
            Some(entry) => {
                team.all_play_wins = entry.wins;
                team.all_play_losses = entry.losses;
                team.all_play_ties = entry.ties;
                team.all_play_percentage = entry.percentage;
            }
            None => {
                warn!("No all-play line found for team '{}' ({})", team.team_name, team.team_id);
            }
        }
    }
}

/// Display ordering: total score, then points-for, then all-play percentage
pub fn compare_for_display(a: &Team, b: &Team) -> Ordering {
    descending(a.total_score, b.total_score)
        .then_with(|| descending(a.points_for, b.points_for))
        .then_with(|| descending(a.all_play_percentage, b.all_play_percentage))
}

/// Put teams in final ranking order; full ties keep their current order
pub fn sort_for_display(teams: &mut [Team]) {
    teams.sort_by(compare_for_display);
}
