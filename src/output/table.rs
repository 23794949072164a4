use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};

use crate::engine::maturity::MaturityCurvePoint;
use crate::engine::whatif::WhatIfResult;
use crate::engine::{BusinessCase, Payback};
use crate::output::money;
use crate::priority::PriorityRegistry;

pub fn render_summary_table(case: &BusinessCase) -> String {
    let currency = case.assumptions.currency;
    let summary = &case.summary;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        "Total annual value".to_string(),
        money(summary.total_annual_value, currency),
    ]);
    table.add_row(vec![
        "Hours saved / year".to_string(),
        format!("{:.0}h", summary.total_hours_per_year),
    ]);
    table.add_row(vec![
        "Monthly savings (gross)".to_string(),
        money(summary.monthly_savings, currency),
    ]);
    table.add_row(vec![
        "Program cost".to_string(),
        money(summary.program_cost, currency),
    ]);
    table.add_row(vec![
        "Amortized cost / month".to_string(),
        money(summary.monthly_amortized_cost, currency),
    ]);
    table.add_row(vec![
        "Monthly savings (net)".to_string(),
        money(summary.monthly_net_savings, currency),
    ]);
    table.add_row(Row::from(vec![
        Cell::new("Payback"),
        payback_cell(summary.payback),
    ]));
    table.add_row(vec![
        "Annual ROI".to_string(),
        format!("{:.1}x", summary.annual_roi_multiple),
    ]);
    table.to_string()
}

pub fn render_breakdown_table(case: &BusinessCase, registry: &PriorityRegistry) -> String {
    let currency = case.assumptions.currency;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Priority",
        "Hours / year",
        "Value / year",
        "Rationale",
    ]);
    for outcome in &case.outcomes {
        let label = registry
            .by_key(outcome.priority)
            .map(|m| m.label())
            .unwrap_or("?");
        let mut value = money(outcome.annual_value, currency);
        if outcome.overlap_discounted {
            value.push_str(" (overlap-adjusted)");
        }
        table.add_row(vec![
            label.to_string(),
            outcome
                .hours_per_year
                .map(|h| format!("{h:.0}h"))
                .unwrap_or_else(|| "-".to_string()),
            value,
            outcome.rationale.clone(),
        ]);
    }
    table.add_row(vec![
        "Total".to_string(),
        format!("{:.0}h", case.summary.total_hours_per_year),
        money(case.summary.total_annual_value, currency),
        String::new(),
    ]);
    table.to_string()
}

pub fn render_whatif_table(result: &WhatIfResult) -> String {
    let currency = result.before.assumptions.currency;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Metric", "Before", "After", "Change"]);

    let before = &result.before.summary;
    let after = &result.after.summary;
    table.add_row(vec![
        "Total annual value".to_string(),
        money(before.total_annual_value, currency),
        money(after.total_annual_value, currency),
        format!("{:+.0}", result.annual_value_delta),
    ]);
    table.add_row(vec![
        "Monthly savings (net)".to_string(),
        money(before.monthly_net_savings, currency),
        money(after.monthly_net_savings, currency),
        format!("{:+.0}", result.monthly_net_savings_delta),
    ]);
    table.add_row(vec![
        "Payback".to_string(),
        result.payback_before.to_string(),
        result.payback_after.to_string(),
        String::new(),
    ]);
    table.add_row(vec![
        "Annual ROI".to_string(),
        format!("{:.1}x", before.annual_roi_multiple),
        format!("{:.1}x", after.annual_roi_multiple),
        String::new(),
    ]);

    let changes = result
        .changes_applied
        .iter()
        .map(|c| format!("{} {} -> {}", c.key, c.from, c.to))
        .collect::<Vec<_>>()
        .join(", ");
    let mut rendered = String::new();
    rendered.push_str(&table.to_string());
    rendered.push_str(&format!("\nChanges applied: {changes}"));
    rendered
}

pub fn render_maturity_table(points: &[MaturityCurvePoint], highlight: Option<u8>) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Level", "Hours saved / person / week", "Band"]);
    for point in points {
        let level_cell = if highlight == Some(point.level) {
            Cell::new(format!("{} *", point.level)).fg(Color::Green)
        } else {
            Cell::new(point.level.to_string())
        };
        table.add_row(Row::from(vec![
            level_cell,
            Cell::new(format!("{:.1}h", point.hours_saved_per_person_per_week)),
            Cell::new(point.band),
        ]));
    }
    table.to_string()
}

fn payback_cell(payback: Payback) -> Cell {
    match payback {
        Payback::Months(_) => Cell::new(payback.to_string()).fg(Color::Green),
        Payback::NotReached => Cell::new("not reached (adjust inputs)").fg(Color::Red),
    }
}
