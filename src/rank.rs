use std::cmp::Ordering;

use crate::aggregate::AbsoluteStats;
use crate::form::FormSummary;
use crate::normalize::NormalizedStats;

/// Ranking metric plus the slot the 1-based rank is written into.
pub trait RankMetric {
    fn metric(&self) -> f64;
    fn set_rank(&mut self, rank: usize);
}

impl RankMetric for AbsoluteStats {
    // Recomputed from the raw counts rather than read from a rounded field.
    // The normalized and form tables rank on their stored rounded values
    // instead; both behaviors are pinned by the existing result tables.
    fn metric(&self) -> f64 {
        f64::from(3 * self.wins + self.draws) / f64::from(self.games_played)
    }

    fn set_rank(&mut self, rank: usize) {
        self.rank = rank;
    }
}

impl RankMetric for NormalizedStats {
    fn metric(&self) -> f64 {
        self.ppg
    }

    fn set_rank(&mut self, rank: usize) {
        self.rank = rank;
    }
}

impl RankMetric for FormSummary {
    fn metric(&self) -> f64 {
        self.latest_ppg
    }

    fn set_rank(&mut self, rank: usize) {
        self.rank = rank;
    }
}

/// Stable descending sort by the ranking metric, then assign ranks by
/// 1-based position. Ties keep their prior relative order, which for freshly
/// aggregated collections is the roster's alphabetical order.
pub fn assign_ranks<T: RankMetric>(items: &mut [T]) {
    items.sort_by(|a, b| b.metric().partial_cmp(&a.metric()).unwrap_or(Ordering::Equal));
    for (idx, item) in items.iter_mut().enumerate() {
        item.set_rank(idx + 1);
    }
}
