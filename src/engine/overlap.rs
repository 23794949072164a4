use crate::engine::PriorityOutcome;
use crate::priority::PriorityKey;

/// Throughput and upskilling both model time reclaimed from the same work;
/// summing them naively overstates impact. When both are selected the
/// upskilling contribution keeps this share of its standalone value. A
/// deliberately simple heuristic, not a full attribution model.
pub const UPSKILLING_OVERLAP_FACTOR: f64 = 0.7;

/// Applies the overlap discount in place. Only the throughput/upskilling
/// pair is modeled; the discount lands on upskilling exactly once, on both
/// its value and its hours so the breakdown stays internally consistent.
pub fn resolve_overlap(outcomes: &mut [PriorityOutcome]) {
    let has_throughput = outcomes
        .iter()
        .any(|o| o.priority == PriorityKey::Throughput);
    if !has_throughput {
        return;
    }
    for outcome in outcomes.iter_mut() {
        if outcome.priority == PriorityKey::Upskilling && !outcome.overlap_discounted {
            outcome.annual_value *= UPSKILLING_OVERLAP_FACTOR;
            outcome.hours_per_year = outcome.hours_per_year.map(|h| h * UPSKILLING_OVERLAP_FACTOR);
            outcome.overlap_discounted = true;
        }
    }
}
