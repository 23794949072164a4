use serde::Serialize;

use crate::engine::EngineError;

/// Baseline hours saved per person per week, indexed by maturity level 1-10.
/// Level 1 is an organization with everything still to gain from basic AI
/// usage; level 10 has already captured most of it. The exact figures are
/// calibration constants, not invariants; only the diminishing-returns shape
/// (monotonically non-increasing) is load-bearing.
pub const MATURITY_HOURS: [f64; 10] = [5.0, 4.6, 4.2, 3.8, 3.4, 3.0, 2.6, 2.2, 1.6, 1.0];

pub const MIN_MATURITY_LEVEL: u8 = 1;
pub const MAX_MATURITY_LEVEL: u8 = 10;

/// Maps a maturity level to its baseline hours-saved figure. Out-of-range
/// levels are an error the caller must prevent by construction, never a
/// silent repair.
pub fn hours_saved_per_person_per_week(level: u8) -> Result<f64, EngineError> {
    if !(MIN_MATURITY_LEVEL..=MAX_MATURITY_LEVEL).contains(&level) {
        return Err(EngineError::InvalidMaturityLevel(level));
    }
    Ok(MATURITY_HOURS[usize::from(level) - 1])
}

pub fn maturity_band(level: u8) -> &'static str {
    match level {
        0..=3 => "Early: ad-hoc experiments; big wins from prompt basics and workflow mapping",
        4..=7 => "Developing: AI in parts of the workflow; standardizing patterns yields leverage",
        _ => "Advanced: AI embedded across workflows; wins come from quality systems and scale",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MaturityCurvePoint {
    pub level: u8,
    pub hours_saved_per_person_per_week: f64,
    pub band: &'static str,
}

/// The full curve, for the `maturity` command and API endpoint.
pub fn curve() -> Vec<MaturityCurvePoint> {
    (MIN_MATURITY_LEVEL..=MAX_MATURITY_LEVEL)
        .map(|level| MaturityCurvePoint {
            level,
            hours_saved_per_person_per_week: MATURITY_HOURS[usize::from(level) - 1],
            band: maturity_band(level),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_is_monotonically_non_increasing() {
        for level in MIN_MATURITY_LEVEL..MAX_MATURITY_LEVEL {
            let current = hours_saved_per_person_per_week(level).unwrap();
            let next = hours_saved_per_person_per_week(level + 1).unwrap();
            assert!(
                next <= current,
                "hours increased from level {level} ({current}) to {} ({next})",
                level + 1
            );
        }
    }

    #[test]
    fn endpoints_are_the_extremes() {
        let hours: Vec<f64> = (MIN_MATURITY_LEVEL..=MAX_MATURITY_LEVEL)
            .map(|l| hours_saved_per_person_per_week(l).unwrap())
            .collect();
        let first = hours_saved_per_person_per_week(MIN_MATURITY_LEVEL).unwrap();
        let last = hours_saved_per_person_per_week(MAX_MATURITY_LEVEL).unwrap();
        assert!(hours.iter().all(|h| *h <= first));
        assert!(hours.iter().all(|h| *h >= last));
    }

    #[test]
    fn out_of_range_levels_are_errors() {
        assert_eq!(
            hours_saved_per_person_per_week(0),
            Err(EngineError::InvalidMaturityLevel(0))
        );
        assert_eq!(
            hours_saved_per_person_per_week(11),
            Err(EngineError::InvalidMaturityLevel(11))
        );
    }
}
