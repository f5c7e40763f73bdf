use crate::dataset::MatchRecord;
use crate::roster::{self, belongs_to};

/// Raw counting statistics for one entity over the full match history.
/// `rank` stays 0 until the ranker assigns it; `team` holds either a team
/// identifier or, after decomposition, an individual name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbsoluteStats {
    pub rank: usize,
    pub team: String,
    pub games_played: u32,
    pub points: u32,
    pub goal_difference: i64,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals_scored: u32,
    pub goals_allowed: u32,
    pub clean_sheets: u32,
    pub clean_sheets_against: u32,
    pub big_wins: u32,
    pub big_losses: u32,
}

/// Absolute stats for every unique team, one pass over the records per team.
pub fn absolute_stats(records: &[MatchRecord], big_result_margin: u32) -> Vec<AbsoluteStats> {
    roster::unique_teams(records)
        .into_iter()
        .map(|team| {
            let mut stats = AbsoluteStats {
                team: team.clone(),
                ..AbsoluteStats::default()
            };
            for record in records {
                if record.home_team == team {
                    accumulate(&mut stats, record.home_goals, record.away_goals, big_result_margin);
                } else if record.away_team == team {
                    accumulate(&mut stats, record.away_goals, record.home_goals, big_result_margin);
                }
            }
            stats.points = 3 * stats.wins + stats.draws;
            stats.goal_difference = i64::from(stats.goals_scored) - i64::from(stats.goals_allowed);
            stats
        })
        .collect()
}

fn accumulate(stats: &mut AbsoluteStats, scored: u32, allowed: u32, big_result_margin: u32) {
    stats.games_played += 1;
    stats.goals_scored += scored;
    stats.goals_allowed += allowed;
    if scored > allowed {
        stats.wins += 1;
    } else if scored < allowed {
        stats.losses += 1;
    } else {
        stats.draws += 1;
    }
    if allowed == 0 {
        stats.clean_sheets += 1;
    }
    if scored == 0 {
        stats.clean_sheets_against += 1;
    }
    if scored.abs_diff(allowed) >= big_result_margin {
        if scored > allowed {
            stats.big_wins += 1;
        } else if scored < allowed {
            stats.big_losses += 1;
        }
    }
}

/// Re-aggregate team totals onto the individuals whose names compose the
/// team identifiers. There is no dedup against shared matches: an individual
/// who appears in two different team identifiers accrues the combined totals
/// of both team identities, even when both sides share a match.
pub fn individual_stats(
    records: &[MatchRecord],
    team_stats: &[AbsoluteStats],
) -> Vec<AbsoluteStats> {
    roster::unique_individuals(records)
        .into_iter()
        .map(|individual| {
            let mut combined = AbsoluteStats {
                team: individual.clone(),
                ..AbsoluteStats::default()
            };
            for stats in team_stats.iter().filter(|s| belongs_to(&individual, &s.team)) {
                combined.games_played += stats.games_played;
                combined.points += stats.points;
                combined.goal_difference += stats.goal_difference;
                combined.wins += stats.wins;
                combined.losses += stats.losses;
                combined.draws += stats.draws;
                combined.goals_scored += stats.goals_scored;
                combined.goals_allowed += stats.goals_allowed;
                combined.clean_sheets += stats.clean_sheets;
                combined.clean_sheets_against += stats.clean_sheets_against;
                combined.big_wins += stats.big_wins;
                combined.big_losses += stats.big_losses;
            }
            combined
        })
        .collect()
}
