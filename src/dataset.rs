use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use csv::ReaderBuilder;

/// One head-to-head result as it appears in the source file. The full
/// collection is ordered by time of occurrence, oldest first; that ordering
/// is an input contract and is never re-derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub home_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    pub away_team: String,
}

impl MatchRecord {
    pub fn new(home_team: &str, home_goals: u32, away_goals: u32, away_team: &str) -> Self {
        Self {
            home_team: home_team.to_string(),
            home_goals,
            away_goals,
            away_team: away_team.to_string(),
        }
    }
}

/// Read match records from a CSV file with columns
/// `HomeTeam,HomeGoals,AwayGoals,AwayTeam`. The header row is discarded; a
/// goal column that is not a non-negative integer fails the whole file.
pub fn read_match_records(path: &Path) -> Result<Vec<MatchRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("open match file {}", path.display()))?;

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row =
            row.with_context(|| format!("read record {} from {}", idx + 1, path.display()))?;
        if row.len() != 4 {
            return Err(anyhow!(
                "record {} in {}: expected 4 columns, found {}",
                idx + 1,
                path.display(),
                row.len()
            ));
        }
        let home_goals = parse_goals(&row[1])
            .with_context(|| format!("record {} in {}: HomeGoals", idx + 1, path.display()))?;
        let away_goals = parse_goals(&row[2])
            .with_context(|| format!("record {} in {}: AwayGoals", idx + 1, path.display()))?;
        records.push(MatchRecord {
            home_team: row[0].to_string(),
            home_goals,
            away_goals,
            away_team: row[3].to_string(),
        });
    }
    Ok(records)
}

fn parse_goals(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|err| anyhow!("invalid goal count {raw:?}: {err}"))
}

/// List input filenames in the data directory, sorted for a deterministic
/// processing order.
pub fn list_input_filenames(dir: &Path) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("read data directory {}", dir.display()))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("read data directory {}", dir.display()))?;
        let file_type = entry.file_type().with_context(|| {
            format!(
                "inspect {} in data directory {}",
                entry.file_name().to_string_lossy(),
                dir.display()
            )
        })?;
        if file_type.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

pub fn strip_extension(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string())
}

// Individual-attribution mode is signalled by the filename itself.
pub fn individual_mode(filename: &str) -> bool {
    filename.to_ascii_lowercase().contains("2v2")
}
