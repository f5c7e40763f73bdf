use log::warn;

use crate::dataset::MatchRecord;
use crate::normalize::round_to;

/// Recent-form summary; `form[0]` is the most recent game, alphabet {W,L,D}.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSummary {
    pub rank: usize,
    pub team: String,
    pub form: String,
    pub latest_ppg: f64,
    pub games_considered: u32,
}

/// Summarize the last `window` games of each entity. `involves` decides
/// whether an entity occupies a side, so the same scan serves both team
/// identity and individual membership. The ascending-ordered history is
/// shared with other components and is iterated in reverse rather than
/// reordered.
pub fn latest_form<F>(
    records: &[MatchRecord],
    entities: &[String],
    involves: F,
    window: u32,
) -> Vec<FormSummary>
where
    F: Fn(&str, &str) -> bool,
{
    // A zero window considers no games, so no entity has a summary.
    if window == 0 {
        return Vec::new();
    }
    entities
        .iter()
        .filter_map(|entity| {
            let entity = entity.as_str();
            let mut form = String::new();
            let mut wins = 0u32;
            let mut draws = 0u32;
            let mut games = 0u32;
            for record in records.iter().rev() {
                // Home side takes precedence when an entity occupies both,
                // which can happen for individuals partnered on both teams.
                let (scored, allowed) = if involves(entity, record.home_team.as_str()) {
                    (record.home_goals, record.away_goals)
                } else if involves(entity, record.away_team.as_str()) {
                    (record.away_goals, record.home_goals)
                } else {
                    continue;
                };
                if scored > allowed {
                    form.push('W');
                    wins += 1;
                } else if scored < allowed {
                    form.push('L');
                } else {
                    form.push('D');
                    draws += 1;
                }
                games += 1;
                if games == window {
                    break;
                }
            }
            if games == 0 {
                warn!("no matches involve {entity}; form summary skipped");
                return None;
            }
            Some(FormSummary {
                rank: 0,
                team: entity.to_string(),
                form,
                latest_ppg: round_to(f64::from(3 * wins + draws) / f64::from(games), 4),
                games_considered: games,
            })
        })
        .collect()
}

pub fn latest_team_form(
    records: &[MatchRecord],
    teams: &[String],
    window: u32,
) -> Vec<FormSummary> {
    latest_form(records, teams, |entity, side| entity == side, window)
}
