use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for one MyFantasyLeague league
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MflConfig {
    /// League host, including the server shard (e.g., "https://www46.myfantasyleague.com")
    pub base_url: String,

    /// Season year used in every URL path
    pub season: String,

    /// League ID
    pub league_id: String,

    /// API key, if one is configured directly
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Environment variable consulted when `api_key` is not set
    pub api_key_env: String,

    /// Timeout for export API requests in seconds
    pub request_timeout_secs: u64,

    /// Timeout for the power rankings page in seconds
    pub scrape_timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for MflConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www46.myfantasyleague.com".to_string(),
            season: "2023".to_string(),
            league_id: "15781".to_string(),
            api_key: None,
            api_key_env: "MFL_API_KEY".to_string(),
            request_timeout_secs: 10,
            scrape_timeout_secs: 90,
            user_agent: format!("mfl-power-rankings/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl MflConfig {
    fn season_root(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.season)
    }

    /// Export API URL for the league roster (without the API key)
    pub fn league_url(&self) -> String {
        format!("{}/export?TYPE=league&L={}&JSON=1", self.season_root(), self.league_id)
    }

    /// Export API URL for the league standings (without the API key)
    pub fn standings_url(&self) -> String {
        format!("{}/export?TYPE=leagueStandings&L={}&JSON=1", self.season_root(), self.league_id)
    }

    /// Power rankings report sorted by all-play record
    pub fn power_rankings_url(&self) -> String {
        format!("{}/options?L={}&O=101&SORT=ALLPLAY", self.season_root(), self.league_id)
    }

    /// Fill `api_key` from the environment when it was not configured directly
    pub fn resolve_api_key(&mut self) {
        if self.api_key.is_none() {
            self.api_key = std::env::var(&self.api_key_env).ok().filter(|key| !key.is_empty());
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn scrape_timeout(&self) -> Duration {
        Duration::from_secs(self.scrape_timeout_secs)
    }
}
