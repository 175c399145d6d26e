//! Text table and JSON rendering of ranked teams

use power_rankings::Team;
use serde::{Deserialize, Serialize};

use crate::error::ServiceResult;

pub const HIDDEN_NAMES_NOTE: &str = "Team names are hidden.";

/// Output selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// One ranked team as consumed by the web page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeamView {
    #[serde(rename = "TeamID")]
    pub team_id: String,
    pub team_name: String,
    pub owner_name: String,
    pub record: String,
    pub points_for: String,
    pub point_score: String,
    pub record_score: String,
    pub total_score: String,
    pub all_play_record: String,
    pub all_play_percentage: String,
}

impl TeamView {
    /// Display strings for a team; names are blanked when hidden
    pub fn from_team(team: &Team, hide_names: bool) -> Self {
        let (team_name, owner_name) = if hide_names {
            (String::new(), String::new())
        } else {
            (team.team_name.clone(), team.owner_name.clone())
        };

        Self {
            team_id: team.team_id.clone(),
            team_name,
            owner_name,
            record: team.record(),
            points_for: format_points(team.points_for),
            point_score: team.point_score_display(),
            record_score: team.record_score_display(),
            total_score: team.total_score_display(),
            all_play_record: team.all_play_record(),
            all_play_percentage: format_percentage(team.all_play_percentage),
        }
    }
}

/// Fantasy points in shortest form ("1432.5")
///
/// Rendered from the parsed value, so MFL's trailing zeros are not kept:
/// "1432.50" shows as "1432.5" and "1432.00" as "1432".
pub fn format_points(points: f64) -> String {
    format!("{points}")
}

/// Three decimals without the leading zero (".771")
pub fn format_percentage(percentage: f64) -> String {
    let formatted = format!("{percentage:.3}");
    match formatted.strip_prefix("0.") {
        Some(fraction) => format!(".{fraction}"),
        None => formatted,
    }
}

/// Render teams in the requested format
pub fn render(teams: &[Team], format: OutputFormat, hide_names: bool) -> ServiceResult<String> {
    match format {
        OutputFormat::Table => Ok(render_table(teams, hide_names)),
        OutputFormat::Json => render_json(teams, hide_names),
    }
}

pub fn render_json(teams: &[Team], hide_names: bool) -> ServiceResult<String> {
    let views: Vec<TeamView> = teams.iter().map(|t| TeamView::from_team(t, hide_names)).collect();
    Ok(serde_json::to_string(&views)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Center,
}

const SCORE_COLUMNS: [&str; 7] = [
    "W-L-T",
    "Fantasy Pts",
    "Pts Score",
    "Rcrd Score",
    "Total Pts",
    "AllPlay W-L-T",
    "AllPlay %",
];

/// Render the ranking as a boxed ASCII table
///
/// With `hide_names` the team ID replaces the team and owner columns and a
/// note is appended below the table.
pub fn render_table(teams: &[Team], hide_names: bool) -> String {
    let identity: &[&str] = if hide_names { &["Team ID"] } else { &["Team Name", "Owner"] };

    let columns: Vec<(&str, Align)> = identity
        .iter()
        .map(|title| (*title, Align::Left))
        .chain(SCORE_COLUMNS.iter().map(|title| (*title, Align::Center)))
        .collect();

    let rows: Vec<Vec<String>> = teams
        .iter()
        .map(|team| {
            let view = TeamView::from_team(team, hide_names);
            let mut row = if hide_names {
                vec![view.team_id]
            } else {
                vec![view.team_name, view.owner_name]
            };
            row.extend([
                view.record,
                view.points_for,
                view.point_score,
                view.record_score,
                view.total_score,
                view.all_play_record,
                view.all_play_percentage,
            ]);
            row
        })
        .collect();

    let header: Vec<String> = columns.iter().map(|(title, _)| title.to_uppercase()).collect();
    let aligns: Vec<Align> = columns.iter().map(|(_, align)| *align).collect();

    let widths: Vec<usize> = (0..columns.len())
        .map(|i| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let border = border_line(&widths);
    let mut lines = vec![border.clone(), table_line(&header, &widths, &aligns), border.clone()];
    lines.extend(rows.iter().map(|row| table_line(row, &widths, &aligns)));
    lines.push(border);

    let mut table = lines.join("\n");
    if hide_names {
        table.push_str("\n\n");
        table.push_str(HIDDEN_NAMES_NOTE);
    }
    table
}

fn border_line(widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+", segments.join("+"))
}

fn table_line(cells: &[String], widths: &[usize], aligns: &[Align]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(aligns)
        .map(|((cell, width), align)| format!(" {} ", pad(cell, *width, *align)))
        .collect();
    format!("|{}|", padded.join("|"))
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let extra = width.saturating_sub(cell.chars().count());
    let (left, right) = match align {
        Align::Left => (0, extra),
        Align::Center => (extra - extra / 2, extra / 2),
    };
    format!("{}{}{}", " ".repeat(left), cell, " ".repeat(right))
}
