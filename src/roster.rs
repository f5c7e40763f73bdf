use std::collections::BTreeSet;

use crate::dataset::MatchRecord;

/// Split a concatenated-capitalized-words identifier into its name segments.
/// A segment starts at an ASCII uppercase letter and runs until the next
/// uppercase letter; characters before the first uppercase letter belong to
/// no segment. `"AliceBob"` splits into `["Alice", "Bob"]`.
pub fn name_segments(identifier: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = None;
    for (idx, ch) in identifier.char_indices() {
        if ch.is_ascii_uppercase() {
            if let Some(begin) = start {
                segments.push(&identifier[begin..idx]);
            }
            start = Some(idx);
        }
    }
    if let Some(begin) = start {
        segments.push(&identifier[begin..]);
    }
    segments
}

/// All distinct home/away identifiers, sorted lexicographically.
pub fn unique_teams(records: &[MatchRecord]) -> Vec<String> {
    let mut teams = BTreeSet::new();
    for record in records {
        teams.insert(record.home_team.clone());
        teams.insert(record.away_team.clone());
    }
    teams.into_iter().collect()
}

/// Union of the segment decompositions of every team identifier, sorted.
pub fn unique_individuals(records: &[MatchRecord]) -> Vec<String> {
    let mut individuals = BTreeSet::new();
    for team in unique_teams(records) {
        for segment in name_segments(&team) {
            individuals.insert(segment.to_string());
        }
    }
    individuals.into_iter().collect()
}

/// Whole-segment, case-sensitive membership test; `"Ali"` does not belong
/// to `"AliceBob"`.
pub fn belongs_to(individual: &str, team: &str) -> bool {
    name_segments(team).iter().any(|segment| *segment == individual)
}
