pub mod aggregate;
pub mod maturity;
pub mod overlap;
pub mod whatif;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assumptions::normalize::normalize_assumptions;
use crate::assumptions::{Assumptions, SharedContext, MAX_SELECTED_PRIORITIES};
use crate::priority::{PriorityKey, PriorityRegistry};

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("AI maturity level must be between 1 and 10, got {0}")]
    InvalidMaturityLevel(u8),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result of one priority calculator, after any overlap adjustment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriorityOutcome {
    pub priority: PriorityKey,
    /// Present only for priorities that model reclaimed time.
    pub hours_per_year: Option<f64>,
    pub annual_value: f64,
    pub rationale: String,
    pub overlap_discounted: bool,
}

/// Payback is only meaningful when net savings are positive; otherwise the
/// sentinel keeps infinity out of the output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "status", content = "months")]
pub enum Payback {
    Months(u32),
    NotReached,
}

impl Payback {
    pub fn is_reached(&self) -> bool {
        matches!(self, Self::Months(_))
    }
}

impl std::fmt::Display for Payback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Months(months) => write!(f, "{months} months"),
            Self::NotReached => write!(f, "not reached"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialSummary {
    pub total_annual_value: f64,
    pub total_hours_per_year: f64,
    pub monthly_savings: f64,
    pub program_cost: f64,
    pub monthly_amortized_cost: f64,
    pub monthly_net_savings: f64,
    pub payback: Payback,
    pub annual_roi_multiple: f64,
}

/// The full computed business case: normalized inputs, per-priority
/// breakdown in selection order, and the financial summary. `generated_at`
/// lives here rather than on the summary so the summary itself stays
/// bit-deterministic for identical assumptions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessCase {
    pub assumptions: Assumptions,
    pub outcomes: Vec<PriorityOutcome>,
    pub summary: FinancialSummary,
    pub generated_at: DateTime<Utc>,
}

/// Validates and normalizes the assumptions, evaluates the selected
/// priorities in selection order, resolves overlap, and aggregates. Pure and
/// synchronous; safe to call on every input change.
pub fn build_business_case(
    assumptions: &Assumptions,
    registry: &PriorityRegistry,
) -> Result<BusinessCase, EngineError> {
    let mut normalized = assumptions.clone();
    normalize_assumptions(&mut normalized);

    if normalized.selected_priorities.len() > MAX_SELECTED_PRIORITIES {
        return Err(EngineError::InvalidInput(format!(
            "at most {MAX_SELECTED_PRIORITIES} priorities can be selected, got {}",
            normalized.selected_priorities.len()
        )));
    }
    let baseline_hours_per_week =
        maturity::hours_saved_per_person_per_week(normalized.ai_maturity_level)?;

    let ctx = SharedContext {
        employees: f64::from(normalized.employees_in_scope),
        hourly_rate: normalized.hourly_rate(),
        annual_salary: normalized.average_annual_salary,
        utilization: normalized.utilization_pct / 100.0,
        baseline_hours_per_week,
    };

    let mut outcomes = Vec::with_capacity(normalized.selected_priorities.len());
    for key in &normalized.selected_priorities {
        let model = registry
            .by_key(*key)
            .ok_or_else(|| EngineError::InvalidInput(format!("no model for priority {key}")))?;
        outcomes.push(model.evaluate(&normalized, &ctx));
    }
    overlap::resolve_overlap(&mut outcomes);
    let summary = aggregate::aggregate(&outcomes, &normalized, &ctx);

    Ok(BusinessCase {
        assumptions: normalized,
        outcomes,
        summary,
        generated_at: Utc::now(),
    })
}
