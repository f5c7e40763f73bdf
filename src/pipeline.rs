use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::aggregate::{self, AbsoluteStats};
use crate::dataset::{self, MatchRecord};
use crate::export;
use crate::form::{self, FormSummary};
use crate::normalize;
use crate::rank;
use crate::roster;
use crate::validate;

/// Tunables threaded through the whole run, kept explicit so the aggregation
/// functions stay pure and independently testable.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub data_dir: PathBuf,
    pub results_dir: PathBuf,
    /// Number of latest games considered for the form window.
    pub form_window: u32,
    /// Minimum goal margin for a result to count as a big win or loss.
    pub big_result_margin: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            results_dir: PathBuf::from("results"),
            form_window: 10,
            big_result_margin: 3,
        }
    }
}

/// What a single input file produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Teams,
    TeamsAndIndividuals,
    /// Individual tables requested but withheld by the pair-naming check.
    TeamsIndividualsWithheld,
    /// Self-play violations; nothing written for this file.
    Rejected,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub files: Vec<(String, FileOutcome)>,
}

/// Process every file in the data directory, independently and in sorted
/// filename order. Unreadable input is fatal; naming violations are
/// recoverable per file or per scope.
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    fs::create_dir_all(&config.results_dir).with_context(|| {
        format!("create results directory {}", config.results_dir.display())
    })?;
    let filenames = dataset::list_input_filenames(&config.data_dir)?;
    let mut files = Vec::with_capacity(filenames.len());
    for filename in filenames {
        let outcome = process_file(config, &filename)?;
        files.push((filename, outcome));
    }
    Ok(RunSummary { files })
}

/// Run the full pipeline for one input file. Validation happens before any
/// output is produced, so a scope's tables are written all-or-nothing.
pub fn process_file(config: &PipelineConfig, filename: &str) -> Result<FileOutcome> {
    let path = config.data_dir.join(filename);
    let records = dataset::read_match_records(&path)?;

    let self_play = validate::self_play_violations(&records);
    if !self_play.is_empty() {
        for v in &self_play {
            warn!(
                "{filename}: record {} lists {} on both sides",
                v.record_index, v.home_team
            );
        }
        warn!(
            "{filename}: file skipped ({} self-play records)",
            self_play.len()
        );
        return Ok(FileOutcome::Rejected);
    }

    let individuals_requested = dataset::individual_mode(filename);
    let pair_violations = if individuals_requested {
        validate::pair_naming_violations(&records)
    } else {
        Vec::new()
    };

    let base = dataset::strip_extension(filename);
    let team_stats = aggregate::absolute_stats(&records, config.big_result_margin);
    let team_form =
        form::latest_team_form(&records, &roster::unique_teams(&records), config.form_window);
    write_scope_tables(config, &base, "Teams", team_stats.clone(), team_form)?;

    if !individuals_requested {
        info!("computed team stats for {filename}");
        return Ok(FileOutcome::Teams);
    }

    if !pair_violations.is_empty() {
        for v in &pair_violations {
            warn!(
                "{filename}: record {} is not a two-participant pairing ({} vs {})",
                v.record_index, v.home_team, v.away_team
            );
        }
        warn!(
            "{filename}: individual tables withheld ({} offending records)",
            pair_violations.len()
        );
        return Ok(FileOutcome::TeamsIndividualsWithheld);
    }

    let individual_stats = aggregate::individual_stats(&records, &team_stats);
    let individual_form = individual_form(&records, config.form_window);
    write_scope_tables(config, &base, "Individuals", individual_stats, individual_form)?;
    info!("computed team and individual stats for {filename}");
    Ok(FileOutcome::TeamsAndIndividuals)
}

fn individual_form(records: &[MatchRecord], window: u32) -> Vec<FormSummary> {
    form::latest_form(
        records,
        &roster::unique_individuals(records),
        roster::belongs_to,
        window,
    )
}

fn write_scope_tables(
    config: &PipelineConfig,
    base: &str,
    scope: &str,
    mut absolute: Vec<AbsoluteStats>,
    mut form_rows: Vec<FormSummary>,
) -> Result<()> {
    let mut normalized = normalize::normalized_stats(&absolute);
    rank::assign_ranks(&mut absolute);
    rank::assign_ranks(&mut normalized);
    rank::assign_ranks(&mut form_rows);

    export::write_absolute_stats(
        &table_path(&config.results_dir, base, scope, "Absolute Stats"),
        &absolute,
    )?;
    export::write_normalized_stats(
        &table_path(&config.results_dir, base, scope, "Normalized Stats"),
        &normalized,
    )?;
    export::write_latest_form(
        &table_path(&config.results_dir, base, scope, "Latest Form"),
        &form_rows,
    )?;
    Ok(())
}

fn table_path(results_dir: &Path, base: &str, scope: &str, table: &str) -> PathBuf {
    results_dir.join(format!("{base} - {scope} - {table}.csv"))
}
