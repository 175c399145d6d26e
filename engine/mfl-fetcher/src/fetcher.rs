use crate::config::MflConfig;
use crate::models::{LeagueResponse, LeagueStandingsResponse};
use anyhow::{Context, Result};
use power_rankings::{RosterEntry, StandingsEntry};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// MyFantasyLeague export API client
pub struct MflFetcher {
    config: MflConfig,
    client: Client,
}

impl MflFetcher {
    /// Create a new fetcher for the configured league
    pub fn new(config: MflConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &MflConfig {
        &self.config
    }

    /// Fetch the league roster (`TYPE=league`)
    pub async fn fetch_league(&self) -> Result<LeagueResponse> {
        let url = self.config.league_url();
        let league: LeagueResponse = self.get_json(&url).await.context("Failed to fetch league")?;

        info!(
            "Fetched league '{}' with {} franchises",
            league.league.name,
            league.league.franchises.franchise.len()
        );
        Ok(league)
    }

    /// Fetch the head-to-head standings (`TYPE=leagueStandings`)
    pub async fn fetch_standings(&self) -> Result<LeagueStandingsResponse> {
        let url = self.config.standings_url();
        let standings: LeagueStandingsResponse =
            self.get_json(&url).await.context("Failed to fetch league standings")?;

        info!("Fetched standings for {} franchises", standings.league_standings.franchise.len());
        Ok(standings)
    }

    /// Fetch the roster, validating the league's declared franchise count
    pub async fn fetch_roster(&self) -> Result<Vec<RosterEntry>> {
        let league = self.fetch_league().await?;
        league.check_declared_count()?;
        Ok(league.roster())
    }

    /// Fetch and parse the standings into core entries
    pub async fn fetch_standings_entries(&self) -> Result<Vec<StandingsEntry>> {
        let standings = self.fetch_standings().await?;
        Ok(standings.standings()?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        // url never carries the API key
        info!("Fetching data from: {}", url);

        let mut request = self.client.get(url);
        if let Some(api_key) = &self.config.api_key {
            request = request.query(&[("APIKEY", api_key.as_str())]);
        }

        let response = request.send().await.with_context(|| format!("Request to {url} failed"))?;

        if !response.status().is_success() {
            anyhow::bail!("API request failed with status: {}", response.status());
        }

        let body = response.text().await.context("Failed to read response body")?;
        debug!("Received {} bytes from {}", body.len(), url);

        serde_json::from_str(&body).with_context(|| format!("Failed to parse JSON from {url}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_creation() {
        let fetcher = MflFetcher::new(MflConfig::default()).unwrap();
        assert_eq!(fetcher.config().league_id, "15781");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        let config = MflConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: 1,
            ..Default::default()
        };
        let fetcher = MflFetcher::new(config).unwrap();

        assert!(fetcher.fetch_league().await.is_err());
        assert!(fetcher.fetch_standings().await.is_err());
    }
}
