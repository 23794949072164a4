use crate::assumptions::{Assumptions, SharedContext};
use crate::engine::{FinancialSummary, Payback, PriorityOutcome};

/// Sums the adjusted per-priority values and derives the financial metrics.
/// Every division is guarded: a zero amortization period means the full
/// program cost lands in a single period, and ratios with a zero denominator
/// come back as a sentinel or 0.0, never NaN or infinity.
pub fn aggregate(
    outcomes: &[PriorityOutcome],
    assumptions: &Assumptions,
    ctx: &SharedContext,
) -> FinancialSummary {
    let total_annual_value: f64 = outcomes.iter().map(|o| o.annual_value).sum();
    let total_hours_per_year: f64 = outcomes.iter().filter_map(|o| o.hours_per_year).sum();
    let monthly_savings = total_annual_value / 12.0;

    let program_cost = assumptions.training_cost_per_employee * ctx.employees
        + assumptions.program_one_off_cost
        + assumptions.training_hours_per_employee * ctx.hourly_rate * ctx.employees;

    let amortization_months = assumptions.amortization_months.max(1);
    let monthly_amortized_cost = program_cost / f64::from(amortization_months);
    let monthly_net_savings = (monthly_savings - monthly_amortized_cost).max(0.0);

    let payback = if monthly_net_savings > 0.0 {
        Payback::Months((program_cost / monthly_net_savings).ceil() as u32)
    } else {
        Payback::NotReached
    };
    let annual_roi_multiple = if program_cost > 0.0 {
        (monthly_net_savings * 12.0) / program_cost
    } else {
        0.0
    };

    FinancialSummary {
        total_annual_value,
        total_hours_per_year,
        monthly_savings,
        program_cost,
        monthly_amortized_cost,
        monthly_net_savings,
        payback,
        annual_roi_multiple,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority::PriorityKey;

    fn ctx(employees: f64, hourly_rate: f64) -> SharedContext {
        SharedContext {
            employees,
            hourly_rate,
            annual_salary: hourly_rate * 2080.0,
            utilization: 0.7,
            baseline_hours_per_week: 4.2,
        }
    }

    fn outcome(value: f64) -> PriorityOutcome {
        PriorityOutcome {
            priority: PriorityKey::Throughput,
            hours_per_year: Some(100.0),
            annual_value: value,
            rationale: String::new(),
            overlap_discounted: false,
        }
    }

    #[test]
    fn zero_amortization_months_falls_back_to_one_period() {
        let assumptions = Assumptions {
            amortization_months: 0,
            ..Assumptions::default()
        };
        let summary = aggregate(&[outcome(120_000.0)], &assumptions, &ctx(25.0, 50.0));
        assert!(summary.monthly_amortized_cost.is_finite());
        assert_eq!(summary.monthly_amortized_cost, summary.program_cost);
    }

    #[test]
    fn no_outcomes_means_no_payback_and_zero_roi() {
        let assumptions = Assumptions::default();
        let summary = aggregate(&[], &assumptions, &ctx(25.0, 50.0));
        assert_eq!(summary.total_annual_value, 0.0);
        assert_eq!(summary.payback, Payback::NotReached);
        assert_eq!(summary.annual_roi_multiple, 0.0);
    }

    #[test]
    fn net_savings_never_go_negative() {
        let assumptions = Assumptions {
            program_one_off_cost: 1_000_000.0,
            ..Assumptions::default()
        };
        let summary = aggregate(&[outcome(1_200.0)], &assumptions, &ctx(25.0, 50.0));
        assert_eq!(summary.monthly_net_savings, 0.0);
        assert_eq!(summary.payback, Payback::NotReached);
    }

    #[test]
    fn zero_program_cost_reports_zero_roi() {
        let assumptions = Assumptions {
            training_cost_per_employee: 0.0,
            training_hours_per_employee: 0.0,
            program_one_off_cost: 0.0,
            ..Assumptions::default()
        };
        let summary = aggregate(&[outcome(12_000.0)], &assumptions, &ctx(25.0, 50.0));
        assert_eq!(summary.annual_roi_multiple, 0.0);
        // ceil(0 / net) = 0: payback is immediate rather than a special case
        assert_eq!(summary.payback, Payback::Months(0));
    }
}
