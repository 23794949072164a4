use anyhow::Result;

use crate::engine::maturity::MaturityCurvePoint;
use crate::engine::BusinessCase;

pub fn breakdown_to_csv(case: &BusinessCase) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "priority",
        "hours_per_year",
        "annual_value",
        "overlap_discounted",
        "rationale",
    ])?;
    for outcome in &case.outcomes {
        writer.write_record([
            outcome.priority.as_slug().to_string(),
            outcome
                .hours_per_year
                .map(|h| format!("{h:.1}"))
                .unwrap_or_default(),
            format!("{:.2}", outcome.annual_value),
            outcome.overlap_discounted.to_string(),
            outcome.rationale.clone(),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

pub fn summary_to_csv(case: &BusinessCase) -> Result<String> {
    let summary = &case.summary;
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "total_annual_value",
        "total_hours_per_year",
        "monthly_savings",
        "program_cost",
        "monthly_amortized_cost",
        "monthly_net_savings",
        "payback",
        "annual_roi_multiple",
    ])?;
    writer.write_record([
        format!("{:.2}", summary.total_annual_value),
        format!("{:.1}", summary.total_hours_per_year),
        format!("{:.2}", summary.monthly_savings),
        format!("{:.2}", summary.program_cost),
        format!("{:.2}", summary.monthly_amortized_cost),
        format!("{:.2}", summary.monthly_net_savings),
        summary.payback.to_string(),
        format!("{:.4}", summary.annual_roi_multiple),
    ])?;
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

pub fn maturity_to_csv(points: &[MaturityCurvePoint]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["level", "hours_saved_per_person_per_week", "band"])?;
    for point in points {
        writer.write_record([
            point.level.to_string(),
            format!("{:.1}", point.hours_saved_per_person_per_week),
            point.band.to_string(),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}
