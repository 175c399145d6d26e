//! League data sources and the end-to-end ranking pipeline

use allplay_scraper::AllPlayScraper;
use anyhow::{Context, Result};
use async_trait::async_trait;
use mfl_fetcher::{MflConfig, MflFetcher};
use power_rankings::{rank_league, AllPlayEntry, RosterEntry, StandingsEntry, Team};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Everything one ranking needs, gathered at a single point in time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    pub roster: Vec<RosterEntry>,
    pub standings: Vec<StandingsEntry>,
    pub all_play: Vec<AllPlayEntry>,
}

impl LeagueSnapshot {
    /// Read a snapshot previously saved as JSON
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot file {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse snapshot file {:?}", path))
    }
}

/// Provider of league snapshots
#[async_trait]
pub trait LeagueSource: Send + Sync {
    async fn snapshot(&self) -> Result<LeagueSnapshot>;
}

/// Live MyFantasyLeague source: export API plus the power rankings report
pub struct MflSource {
    fetcher: MflFetcher,
    scraper: AllPlayScraper,
}

impl MflSource {
    pub fn new(config: MflConfig) -> Result<Self> {
        let scraper = AllPlayScraper::new(&config)?;
        let fetcher = MflFetcher::new(config)?;
        Ok(Self { fetcher, scraper })
    }
}

#[async_trait]
impl LeagueSource for MflSource {
    async fn snapshot(&self) -> Result<LeagueSnapshot> {
        let started = Instant::now();

        let (roster, standings, all_play) = tokio::try_join!(
            self.fetcher.fetch_roster(),
            self.fetcher.fetch_standings_entries(),
            self.scraper.scrape_all_play(),
        )?;

        info!(
            "Fetched {} roster, {} standings and {} all-play entries in {:?}",
            roster.len(),
            standings.len(),
            all_play.len(),
            started.elapsed()
        );

        Ok(LeagueSnapshot { roster, standings, all_play })
    }
}

/// Source that always returns the same snapshot
pub struct StaticSource {
    snapshot: LeagueSnapshot,
}

impl StaticSource {
    pub fn new(snapshot: LeagueSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl LeagueSource for StaticSource {
    async fn snapshot(&self) -> Result<LeagueSnapshot> {
        Ok(self.snapshot.clone())
    }
}

/// Gather a fresh snapshot and rank it
pub async fn compute_rankings(source: &dyn LeagueSource) -> Result<Vec<Team>> {
    let snapshot = source.snapshot().await.context("Failed to gather league data")?;
    debug!("Ranking snapshot with {} franchises", snapshot.roster.len());

    let teams = rank_league(&snapshot.roster, &snapshot.standings, &snapshot.all_play)
        .context("Failed to rank league")?;

    Ok(teams)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use power_rankings::RankingError;
    use std::io::Write;

    pub(crate) fn sample_snapshot() -> LeagueSnapshot {
        let roster = [("0001", "Alpha", "Ann"), ("0002", "Bravo", "Bob"), ("0003", "Charlie", "Cat")]
            .iter()
            .map(|(id, name, owner)| RosterEntry {
                team_id: id.to_string(),
                team_name: name.to_string(),
                owner_name: owner.to_string(),
            })
            .collect();

        let standings = vec![
            StandingsEntry { team_id: "0003".to_string(), wins: 2, losses: 1, ties: 0, points_for: 250.5 },
            StandingsEntry { team_id: "0001".to_string(), wins: 3, losses: 0, ties: 0, points_for: 300.25 },
            StandingsEntry { team_id: "0002".to_string(), wins: 0, losses: 3, ties: 0, points_for: 199.0 },
        ];

        let all_play = vec![
            AllPlayEntry { team_name: "Alpha".to_string(), wins: 7, losses: 2, ties: 0, percentage: 0.778 },
            AllPlayEntry { team_name: "Charlie".to_string(), wins: 5, losses: 4, ties: 0, percentage: 0.556 },
            AllPlayEntry { team_name: "Bravo".to_string(), wins: 1, losses: 8, ties: 0, percentage: 0.111 },
        ];

        LeagueSnapshot { roster, standings, all_play }
    }

    #[tokio::test]
    async fn test_compute_rankings_from_static_source() {
        let source = StaticSource::new(sample_snapshot());
        let teams = compute_rankings(&source).await.unwrap();

        let order: Vec<&str> = teams.iter().map(|t| t.team_id.as_str()).collect();
        assert_eq!(order, vec!["0001", "0003", "0002"]);

        assert_eq!(teams[0].total_score, 6.0);
        assert_eq!(teams[1].total_score, 4.0);
        assert_eq!(teams[2].total_score, 2.0);
        assert_eq!(teams[0].all_play_record(), "7-2-0");
    }

    #[tokio::test]
    async fn test_parity_failure_is_typed() {
        let mut snapshot = sample_snapshot();
        snapshot.standings.pop();

        let err = compute_rankings(&StaticSource::new(snapshot)).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<RankingError>(),
            Some(&RankingError::Parity { roster: 3, standings: 2 })
        );
    }

    #[tokio::test]
    async fn test_unreachable_league_fails() {
        let config = MflConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: 1,
            scrape_timeout_secs: 1,
            ..Default::default()
        };
        let source = MflSource::new(config).unwrap();

        assert!(compute_rankings(&source).await.is_err());
    }

    #[test]
    fn test_snapshot_file() {
        let snapshot = sample_snapshot();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&snapshot).unwrap()).unwrap();

        assert_eq!(LeagueSnapshot::from_file(file.path()).unwrap(), snapshot);
        assert!(LeagueSnapshot::from_file(Path::new("/nonexistent/snapshot.json")).is_err());
    }
}
