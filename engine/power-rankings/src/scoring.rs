//! Placement point allocation
//!
//! Teams are ordered by a key (fantasy points or record magic) and awarded
//! placement points: N for first place down to 1 for last. Teams whose keys
//! are exactly equal split the points of the places they jointly occupy, so
//! two teams tied for first in a 4-team league get (4 + 3) / 2 = 3.5 each.

use crate::types::Team;
use std::cmp::Ordering;

/// Placement points for keys already sorted in descending order
///
/// The result has one score per key. Unsorted input is not detected and
/// produces meaningless scores.
pub fn placement_points(sorted_keys: &[f64]) -> Vec<f64> {
    let n = sorted_keys.len();
    let mut scores = Vec::with_capacity(n);

    let mut i = 0;
    while i < n {
        let key = sorted_keys[i];
        let tied = sorted_keys[i..].iter().take_while(|&&k| k == key).count().max(1);

        let pool: f64 = (0..tied).map(|m| (n - i - m) as f64).sum();
        let share = pool / tied as f64;
        scores.extend(std::iter::repeat(share).take(tied));

        i += tied;
    }

    scores
}

/// Apply placement points to items already sorted by `key`, descending
pub fn allocate_placement_points<T, K, A>(items: &mut [T], key: K, mut assign: A)
where
    K: Fn(&T) -> f64,
    A: FnMut(&mut T, f64),
{
    let keys: Vec<f64> = items.iter().map(key).collect();
    for (item, score) in items.iter_mut().zip(placement_points(&keys)) {
        assign(item, score);
    }
}

/// Descending comparison for float keys
pub(crate) fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Order teams by fantasy points scored, most first
pub fn sort_by_points_for(teams: &mut [Team]) {
    teams.sort_by(|a, b| descending(a.points_for, b.points_for));
}

/// Order teams by record magic, best first
pub fn sort_by_record_magic(teams: &mut [Team]) {
    teams.sort_by(|a, b| descending(a.record_magic, b.record_magic));
}

/// Award point scores; teams must already be sorted by points-for
pub fn calculate_point_scores(teams: &mut [Team]) {
    allocate_placement_points(teams, |t| t.points_for, |t, score| t.point_score = score);
}

/// Derive record magic (wins + half a win per tie) for every team
pub fn calculate_record_magic(teams: &mut [Team]) {
    for team in teams.iter_mut() {
        team.record_magic = f64::from(team.wins) + f64::from(team.ties) * 0.5;
    }
}

/// Award record scores; teams must already be sorted by record magic
pub fn calculate_record_scores(teams: &mut [Team]) {
    allocate_placement_points(teams, |t| t.record_magic, |t, score| t.record_score = score);
}

/// Sum the point and record scores into the total score
pub fn calculate_total_scores(teams: &mut [Team]) {
    for team in teams.iter_mut() {
        team.total_score = team.point_score + team.record_score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams_with_points_for(points: &[f64]) -> Vec<Team> {
        points.iter().map(|&pf| Team { points_for: pf, ..Default::default() }).collect()
    }

    #[test]
    fn test_placement_points_without_ties() {
        assert_eq!(placement_points(&[40.0, 30.0, 20.0, 10.0]), vec![4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_placement_points_with_ties() {
        assert_eq!(placement_points(&[15.0, 15.0, 10.0, 5.0]), vec![3.5, 3.5, 2.0, 1.0]);
        assert_eq!(placement_points(&[15.0, 15.0, 10.0]), vec![2.5, 2.5, 1.0]);
        assert_eq!(placement_points(&[9.0, 7.0, 7.0, 7.0, 1.0]), vec![5.0, 3.0, 3.0, 3.0, 1.0]);
        assert_eq!(placement_points(&[3.0, 3.0, 3.0]), vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_placement_points_edge_cases() {
        assert!(placement_points(&[]).is_empty());
        assert_eq!(placement_points(&[-2.0]), vec![1.0]);
        assert_eq!(placement_points(&[0.0, 0.0, -1.5]), vec![2.5, 2.5, 1.0]);
    }

    #[test]
    fn test_calculate_point_scores() {
        let mut teams = teams_with_points_for(&[15.0, 15.0, 10.0, 5.0]);
        calculate_point_scores(&mut teams);

        let scores: Vec<f64> = teams.iter().map(|t| t.point_score).collect();
        assert_eq!(scores, vec![3.5, 3.5, 2.0, 1.0]);

        let displayed: Vec<String> = teams.iter().map(|t| t.point_score_display()).collect();
        assert_eq!(displayed, vec!["3.5", "3.5", "2.0", "1.0"]);
    }

    #[test]
    fn test_sort_by_points_for_then_score() {
        let mut teams = teams_with_points_for(&[10.0, 5.0, 15.0, 15.0]);
        sort_by_points_for(&mut teams);
        calculate_point_scores(&mut teams);

        let pairs: Vec<(f64, f64)> = teams.iter().map(|t| (t.points_for, t.point_score)).collect();
        assert_eq!(pairs, vec![(15.0, 3.5), (15.0, 3.5), (10.0, 2.0), (5.0, 1.0)]);
    }

    #[test]
    fn test_calculate_record_magic() {
        let mut teams: Vec<Team> = [(6, 1), (3, 7), (1, 0)]
            .iter()
            .map(|&(wins, ties)| Team { wins, ties, ..Default::default() })
            .collect();

        calculate_record_magic(&mut teams);

        let magic: Vec<f64> = teams.iter().map(|t| t.record_magic).collect();
        assert_eq!(magic, vec![6.5, 6.5, 1.0]);
    }

    #[test]
    fn test_calculate_record_scores() {
        let mut teams: Vec<Team> = [8.5, 8.5, 7.0, 5.0]
            .iter()
            .map(|&magic| Team { record_magic: magic, ..Default::default() })
            .collect();

        calculate_record_scores(&mut teams);

        let scores: Vec<f64> = teams.iter().map(|t| t.record_score).collect();
        assert_eq!(scores, vec![3.5, 3.5, 2.0, 1.0]);

        let displayed: Vec<String> = teams.iter().map(|t| t.record_score_display()).collect();
        assert_eq!(displayed, vec!["3.5", "3.5", "2.0", "1.0"]);
    }

    #[test]
    fn test_calculate_total_scores() {
        let mut teams: Vec<Team> = [(3.0, 4.5), (7.0, 9.0), (2.0, 1.5)]
            .iter()
            .map(|&(point_score, record_score)| Team {
                point_score,
                record_score,
                ..Default::default()
            })
            .collect();

        calculate_total_scores(&mut teams);

        let displayed: Vec<String> = teams.iter().map(|t| t.total_score_display()).collect();
        assert_eq!(displayed, vec!["7.5", "16.0", "3.5"]);
        assert_eq!(teams[1].total_score, 16.0);
    }
}
