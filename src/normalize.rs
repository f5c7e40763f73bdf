use crate::aggregate::AbsoluteStats;

/// Per-game rates and percentages derived from one `AbsoluteStats` record.
/// Undefined for zero games played, which the pipeline never produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedStats {
    pub rank: usize,
    pub team: String,
    pub games_played: u32,
    pub ppg: f64,
    pub gdpg: f64,
    pub win_pct: f64,
    pub loss_pct: f64,
    pub draw_pct: f64,
    pub gspg: f64,
    pub gapg: f64,
    pub cs_pct: f64,
    pub csa_pct: f64,
    pub big_win_pct: f64,
    pub big_loss_pct: f64,
}

/// Round half away from zero at `precision` decimal places. The result
/// tables depend on this exact rule: not banker's rounding, and negative
/// halves move away from zero (round(-0.125, 2) == -0.13).
pub fn round_to(value: f64, precision: i32) -> f64 {
    let scale = 10f64.powi(precision);
    (value * scale + 0.5f64.copysign(value)).trunc() / scale
}

pub fn normalized_stats(absolute: &[AbsoluteStats]) -> Vec<NormalizedStats> {
    absolute
        .iter()
        .map(|abs| {
            let games = f64::from(abs.games_played);
            NormalizedStats {
                rank: 0,
                team: abs.team.clone(),
                games_played: abs.games_played,
                ppg: round_to(f64::from(abs.points) / games, 4),
                gdpg: round_to(abs.goal_difference as f64 / games, 3),
                win_pct: round_to(f64::from(abs.wins) * 100.0 / games, 2),
                loss_pct: round_to(f64::from(abs.losses) * 100.0 / games, 2),
                draw_pct: round_to(f64::from(abs.draws) * 100.0 / games, 2),
                gspg: round_to(f64::from(abs.goals_scored) / games, 3),
                gapg: round_to(f64::from(abs.goals_allowed) / games, 3),
                cs_pct: round_to(f64::from(abs.clean_sheets) * 100.0 / games, 2),
                csa_pct: round_to(f64::from(abs.clean_sheets_against) * 100.0 / games, 2),
                big_win_pct: round_to(f64::from(abs.big_wins) * 100.0 / games, 2),
                big_loss_pct: round_to(f64::from(abs.big_losses) * 100.0 / games, 2),
            }
        })
        .collect()
}
