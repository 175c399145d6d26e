use anyhow::{Context, Result};
use mfl_fetcher::MflConfig;
use power_rankings::AllPlayEntry;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use crate::types::{filter_franchise_rows, AllPlayRow};

// 1-based columns of the power rankings report
const NAME_COLUMN: usize = 1;
const WINS_COLUMN: usize = 13;
const LOSSES_COLUMN: usize = 14;
const TIES_COLUMN: usize = 15;
const PERCENTAGE_COLUMN: usize = 16;

/// MyFantasyLeague power rankings scraper
pub struct AllPlayScraper {
    client: Client,
    url: String,
}

impl AllPlayScraper {
    /// Create a new scraper for the configured league
    pub fn new(config: &MflConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.scrape_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, url: config.power_rankings_url() })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Scrape the report and parse every franchise row
    pub async fn scrape_all_play(&self) -> Result<Vec<AllPlayEntry>> {
        let html = self.fetch_report().await?;
        let rows = parse_report(&html)?;

        let entries = rows
            .iter()
            .map(|row| {
                row.to_entry().with_context(|| {
                    format!("Invalid all-play row for '{}'", row.franchise_name)
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!("Successfully parsed {} all-play rows", entries.len());
        Ok(entries)
    }

    async fn fetch_report(&self) -> Result<String> {
        info!("Scraping: {}", self.url);

        let response =
            self.client.get(&self.url).send().await.context("Failed to fetch power rankings page")?;

        info!("Status: {}", response.status());
        if !response.status().is_success() {
            anyhow::bail!("HTTP request failed with status: {}", response.status());
        }

        let html = response.text().await.context("Failed to read response body")?;
        info!("Successfully fetched HTML ({} bytes)", html.len());
        Ok(html)
    }
}

/// Parse the power rankings report table into franchise rows
///
/// Rows without all report columns (captions, league averages) and rows
/// whose first cell does not start with a letter are dropped.
pub fn parse_report(html: &str) -> Result<Vec<AllPlayRow>> {
    let document = Html::parse_document(html);

    let row_selector = Selector::parse("table.report > tbody > tr")
        .map_err(|e| anyhow::anyhow!("Failed to create report row selector: {}", e))?;
    let cell_selector = Selector::parse("td")
        .map_err(|e| anyhow::anyhow!("Failed to create cell selector: {}", e))?;

    let mut scraped = 0;
    let rows: Vec<AllPlayRow> = document
        .select(&row_selector)
        .inspect(|_| scraped += 1)
        .filter_map(|row| parse_row(&row, &cell_selector))
        .collect();

    let franchises = filter_franchise_rows(rows);
    debug!("Kept {} of {} report rows", franchises.len(), scraped);

    Ok(franchises)
}

fn parse_row(row: &ElementRef, cell_selector: &Selector) -> Option<AllPlayRow> {
    let cells: Vec<String> = row
        .select(cell_selector)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .collect();

    if cells.len() < PERCENTAGE_COLUMN {
        debug!("Skipping report row with {} cells: {:?}", cells.len(), cells.first());
        return None;
    }

    let column = |n: usize| cells[n - 1].clone();

    Some(AllPlayRow {
        franchise_name: column(NAME_COLUMN),
        wins: column(WINS_COLUMN),
        losses: column(LOSSES_COLUMN),
        ties: column(TIES_COLUMN),
        percentage: column(PERCENTAGE_COLUMN),
    })
}
