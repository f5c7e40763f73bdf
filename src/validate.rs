use crate::dataset::MatchRecord;
use crate::roster::name_segments;

/// A record whose naming fails one of the pre-pipeline checks.
/// `record_index` is 1-based over the data rows, header excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingViolation {
    pub record_index: usize,
    pub home_team: String,
    pub away_team: String,
}

/// Records listing the same entity on both sides; any hit aborts the file.
pub fn self_play_violations(records: &[MatchRecord]) -> Vec<NamingViolation> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.home_team == record.away_team)
        .map(|(idx, record)| violation(idx, record))
        .collect()
}

/// Records where either identifier does not decompose into exactly two name
/// segments; hits withhold the individual-scope tables only.
pub fn pair_naming_violations(records: &[MatchRecord]) -> Vec<NamingViolation> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            name_segments(&record.home_team).len() != 2
                || name_segments(&record.away_team).len() != 2
        })
        .map(|(idx, record)| violation(idx, record))
        .collect()
}

fn violation(idx: usize, record: &MatchRecord) -> NamingViolation {
    NamingViolation {
        record_index: idx + 1,
        home_team: record.home_team.clone(),
        away_team: record.away_team.clone(),
    }
}
