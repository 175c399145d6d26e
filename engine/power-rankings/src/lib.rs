//! # Power Rankings
//!
//! Composite power rankings for a fantasy football league.
//!
//! Every team earns placement points twice: once for total fantasy points
//! scored and once for head-to-head record. Tied teams share the points of
//! the places they occupy. The two scores are summed into a total, all-play
//! results are joined on by team name, and the league is ordered by total
//! score with points-for and all-play percentage breaking ties.

pub mod error;
pub mod ranking;
pub mod registry;
pub mod scoring;
pub mod types;


pub use error::{parse_count, parse_decimal, RankingError, RankingResult};
pub use ranking::{compare_for_display, join_all_play, sort_for_display};
pub use registry::{build_registry, check_parity};
pub use scoring::{
    allocate_placement_points, calculate_point_scores, calculate_record_magic,
    calculate_record_scores, calculate_total_scores, placement_points, sort_by_points_for,
    sort_by_record_magic,
};
pub use types::{format_score, AllPlayEntry, RosterEntry, StandingsEntry, Team};

use tracing::info;

/// Run the full ranking over one consistent snapshot of league data
///
/// Returns teams in display order with every score populated.
pub fn rank_league(
    roster: &[RosterEntry],
    standings: &[StandingsEntry],
    all_play: &[AllPlayEntry],
) -> RankingResult<Vec<Team>> {
    let mut teams = build_registry(roster, standings)?;

    sort_by_points_for(&mut teams);
    calculate_point_scores(&mut teams);

    calculate_record_magic(&mut teams);
    sort_by_record_magic(&mut teams);
    calculate_record_scores(&mut teams);

    calculate_total_scores(&mut teams);
    join_all_play(&mut teams, all_play);
    sort_for_display(&mut teams);

    if let Some(leader) = teams.first() {
        info!(
            "Ranked {} teams, leader: {} ({} total)",
            teams.len(),
            leader.team_name,
            leader.total_score_display()
        );
    }

    Ok(teams)
}
