use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use crate::aggregate::AbsoluteStats;
use crate::form::FormSummary;
use crate::normalize::NormalizedStats;

// Header rows mirror the struct field order of the records they describe.
pub const ABSOLUTE_HEADER: [&str; 14] = [
    "Rank",
    "Team",
    "GamesPlayed",
    "Points",
    "GoalDifference",
    "Wins",
    "Losses",
    "Draws",
    "GoalsScored",
    "GoalsAllowed",
    "CleanSheets",
    "CleanSheetsAgainst",
    "BigWins",
    "BigLosses",
];

pub const NORMALIZED_HEADER: [&str; 14] = [
    "Rank",
    "Team",
    "GamesPlayed",
    "PPG",
    "GDPG",
    "WinPct",
    "LossPct",
    "DrawPct",
    "GSPG",
    "GAPG",
    "CsPct",
    "CsaPct",
    "BigWinPct",
    "BigLossPct",
];

pub const FORM_HEADER: [&str; 5] = ["Rank", "Team", "Form", "LatestPPG", "NumGamesConsidered"];

pub fn write_absolute_stats(path: &Path, rows: &[AbsoluteStats]) -> Result<()> {
    write_table(path, &ABSOLUTE_HEADER, rows.iter().map(absolute_row))
}

pub fn write_normalized_stats(path: &Path, rows: &[NormalizedStats]) -> Result<()> {
    write_table(path, &NORMALIZED_HEADER, rows.iter().map(normalized_row))
}

pub fn write_latest_form(path: &Path, rows: &[FormSummary]) -> Result<()> {
    write_table(path, &FORM_HEADER, rows.iter().map(form_row))
}

fn write_table<I>(path: &Path, header: &[&str], rows: I) -> Result<()>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut writer = Writer::from_path(path)
        .with_context(|| format!("create result file {}", path.display()))?;
    writer
        .write_record(header)
        .with_context(|| format!("write header to {}", path.display()))?;
    for row in rows {
        writer
            .write_record(&row)
            .with_context(|| format!("write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

fn absolute_row(stats: &AbsoluteStats) -> Vec<String> {
    vec![
        stats.rank.to_string(),
        stats.team.clone(),
        stats.games_played.to_string(),
        stats.points.to_string(),
        stats.goal_difference.to_string(),
        stats.wins.to_string(),
        stats.losses.to_string(),
        stats.draws.to_string(),
        stats.goals_scored.to_string(),
        stats.goals_allowed.to_string(),
        stats.clean_sheets.to_string(),
        stats.clean_sheets_against.to_string(),
        stats.big_wins.to_string(),
        stats.big_losses.to_string(),
    ]
}

fn normalized_row(stats: &NormalizedStats) -> Vec<String> {
    vec![
        stats.rank.to_string(),
        stats.team.clone(),
        stats.games_played.to_string(),
        float_cell(stats.ppg),
        float_cell(stats.gdpg),
        float_cell(stats.win_pct),
        float_cell(stats.loss_pct),
        float_cell(stats.draw_pct),
        float_cell(stats.gspg),
        float_cell(stats.gapg),
        float_cell(stats.cs_pct),
        float_cell(stats.csa_pct),
        float_cell(stats.big_win_pct),
        float_cell(stats.big_loss_pct),
    ]
}

fn form_row(form: &FormSummary) -> Vec<String> {
    vec![
        form.rank.to_string(),
        form.team.clone(),
        form.form.clone(),
        float_cell(form.latest_ppg),
        form.games_considered.to_string(),
    ]
}

// Minimal decimal text: whole numbers print without a trailing ".0".
fn float_cell(value: f64) -> String {
    format!("{value}")
}
