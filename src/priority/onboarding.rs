use crate::assumptions::{Assumptions, SharedContext};
use crate::engine::PriorityOutcome;
use crate::priority::{PriorityKey, PriorityModel};

/// Ceiling on the ramp-time improvement per hire. A misconfigured baseline
/// ramp cannot credit more than two years of salary per hire.
pub const MAX_RAMP_MONTHS_SAVED: f64 = 24.0;

#[derive(Debug, Clone, Copy)]
pub struct OnboardingModel;

impl PriorityModel for OnboardingModel {
    fn key(&self) -> PriorityKey {
        PriorityKey::Onboarding
    }

    fn label(&self) -> &'static str {
        "Onboarding speed"
    }

    fn evaluate(&self, assumptions: &Assumptions, ctx: &SharedContext) -> PriorityOutcome {
        let params = &assumptions.onboarding;
        let months_saved = (params.baseline_ramp_months - params.improved_ramp_months)
            .clamp(0.0, MAX_RAMP_MONTHS_SAVED);
        let productive_value_per_month = (ctx.annual_salary / 12.0) * ctx.utilization;
        let annual_value = months_saved * params.hires_per_year * productive_value_per_month;

        PriorityOutcome {
            priority: self.key(),
            hours_per_year: None,
            annual_value,
            rationale: format!(
                "{:.0} hires/year, ramp {:.1} -> {:.1} months",
                params.hires_per_year, params.baseline_ramp_months, params.improved_ramp_months
            ),
            overlap_discounted: false,
        }
    }
}
