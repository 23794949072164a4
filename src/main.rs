use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use casebuilder::assumptions::normalize::dedup_priorities;
use casebuilder::assumptions::{
    AssumptionKey, AssumptionOverrides, Currency, Department,
};
use casebuilder::config::Config;
use casebuilder::engine::maturity;
use casebuilder::engine::whatif::{simulate_whatif, WhatIfResult};
use casebuilder::engine::{build_business_case, BusinessCase};
use casebuilder::output::csv::{breakdown_to_csv, maturity_to_csv, summary_to_csv};
use casebuilder::output::render_json;
use casebuilder::output::table::{
    render_breakdown_table, render_maturity_table, render_summary_table, render_whatif_table,
};
use casebuilder::priority::{PriorityKey, PriorityRegistry};
use casebuilder::server::run_server;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::warn;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Parser)]
#[command(
    name = "casebuilder",
    about = "AI adoption business case calculator"
)]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
    /// Comma-separated priority list, e.g. "throughput,quality".
    #[arg(short = 'p', long)]
    priorities: Option<String>,
    #[command(flatten)]
    assumptions: AssumptionArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Args, Clone, Default)]
struct AssumptionArgs {
    #[arg(long)]
    department: Option<String>,
    #[arg(long)]
    employees: Option<u32>,
    #[arg(long)]
    currency: Option<String>,
    #[arg(long = "annual-salary")]
    annual_salary: Option<f64>,
    #[arg(long = "hourly-rate")]
    hourly_rate: Option<f64>,
    #[arg(long = "maturity")]
    maturity_level: Option<u8>,
    #[arg(long = "utilization")]
    utilization_pct: Option<f64>,
    #[arg(long = "training-cost")]
    training_cost_per_employee: Option<f64>,
    #[arg(long = "training-hours")]
    training_hours_per_employee: Option<f64>,
    #[arg(long = "one-off-cost")]
    program_one_off_cost: Option<f64>,
    #[arg(long = "amortization-months")]
    amortization_months: Option<u32>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Full business case: per-priority breakdown plus the financial summary.
    Estimate,
    /// Per-priority value breakdown only.
    Breakdown,
    /// Recompute with assumption changes and show the before/after difference.
    Whatif {
        /// Repeatable `key=value` change, e.g. `--set maturity_level=5`.
        #[arg(long = "set")]
        set: Vec<String>,
    },
    /// The maturity level to hours-saved curve.
    Maturity,
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, default_value_t = 3001)]
        port: u16,
    },
    Config {
        #[arg(long)]
        init: bool,
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load(Some(&config_path))?;

    if matches!(cli.command, Commands::Config { .. }) {
        return handle_config_command(&cli.command, &config, &config_path);
    }
    if let Commands::Serve { host, port } = &cli.command {
        let bind = format!("{host}:{port}");
        let addr: SocketAddr = bind
            .parse()
            .map_err(|e| anyhow!("invalid bind address {bind}: {e}"))?;
        return run_server(config, addr).await;
    }

    let overrides = build_overrides(&cli)?;
    let mut assumptions = config.to_assumptions()?;
    overrides.apply(&mut assumptions);

    let registry = PriorityRegistry::with_defaults();

    match &cli.command {
        Commands::Estimate => {
            let case = build_business_case(&assumptions, &registry)?;
            print_estimate(&case, &registry, cli.output)?;
        }
        Commands::Breakdown => {
            let case = build_business_case(&assumptions, &registry)?;
            print_breakdown(&case, &registry, cli.output)?;
        }
        Commands::Whatif { set } => {
            let changes = parse_change_list(set)?;
            if changes.is_empty() {
                return Err(anyhow!(
                    "at least one --set key=value change is required for whatif"
                ));
            }
            let result = simulate_whatif(&assumptions, &changes, &registry)?;
            print_whatif(&result, cli.output)?;
        }
        Commands::Maturity => {
            print_maturity(assumptions.ai_maturity_level, cli.output)?;
        }
        Commands::Config { .. } => {}
        Commands::Serve { .. } => unreachable!("serve command handled before dispatch"),
    }

    Ok(())
}

fn handle_config_command(command: &Commands, config: &Config, config_path: &PathBuf) -> Result<()> {
    let Commands::Config { init, show } = command else {
        return Ok(());
    };
    if *init {
        Config::write_template(config_path)?;
        println!("Wrote config template to {}", config_path.display());
    }
    if *show || !*init {
        println!("{}", render_json(config)?);
    }
    Ok(())
}

fn build_overrides(cli: &Cli) -> Result<AssumptionOverrides> {
    let args = &cli.assumptions;
    Ok(AssumptionOverrides {
        department: args
            .department
            .as_deref()
            .map(Department::from_str)
            .transpose()?,
        employees: args.employees,
        currency: args
            .currency
            .as_deref()
            .map(Currency::from_str)
            .transpose()?,
        annual_salary: args.annual_salary,
        hourly_rate: args.hourly_rate,
        maturity_level: args.maturity_level,
        utilization_pct: args.utilization_pct,
        priorities: cli
            .priorities
            .as_deref()
            .map(parse_priority_list)
            .transpose()?,
        training_cost_per_employee: args.training_cost_per_employee,
        training_hours_per_employee: args.training_hours_per_employee,
        program_one_off_cost: args.program_one_off_cost,
        amortization_months: args.amortization_months,
    })
}

fn parse_priority_list(raw: &str) -> Result<Vec<PriorityKey>> {
    let mut out = Vec::new();
    for piece in raw.split(',') {
        let trimmed = piece.trim();
        if trimmed.is_empty() {
            continue;
        }
        out.push(PriorityKey::from_str(trimmed)?);
    }
    if out.is_empty() {
        return Err(anyhow!("priority filter is empty"));
    }
    dedup_priorities(&mut out);
    Ok(out)
}

fn parse_change_list(entries: &[String]) -> Result<Vec<(AssumptionKey, f64)>> {
    let mut changes = Vec::with_capacity(entries.len());
    for entry in entries {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("expected key=value, got: {entry}"))?;
        let key = AssumptionKey::from_str(key)?;
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|e| anyhow!("invalid value for {key}: {e}"))?;
        changes.push((key, value));
    }
    Ok(changes)
}

fn print_estimate(
    case: &BusinessCase,
    registry: &PriorityRegistry,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", render_breakdown_table(case, registry));
            println!("{}", render_summary_table(case));
        }
        OutputFormat::Json => println!("{}", render_json(case)?),
        OutputFormat::Csv => println!("{}", summary_to_csv(case)?),
    }
    Ok(())
}

fn print_breakdown(
    case: &BusinessCase,
    registry: &PriorityRegistry,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_breakdown_table(case, registry)),
        OutputFormat::Json => println!("{}", render_json(&case.outcomes)?),
        OutputFormat::Csv => println!("{}", breakdown_to_csv(case)?),
    }
    Ok(())
}

fn print_whatif(result: &WhatIfResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_whatif_table(result)),
        OutputFormat::Json => println!("{}", render_json(result)?),
        OutputFormat::Csv => {
            warn!("CSV output for whatif not implemented, using JSON");
            println!("{}", render_json(result)?);
        }
    }
    Ok(())
}

fn print_maturity(current_level: u8, format: OutputFormat) -> Result<()> {
    let points = maturity::curve();
    match format {
        OutputFormat::Table => {
            println!("{}", render_maturity_table(&points, Some(current_level)));
        }
        OutputFormat::Json => println!("{}", render_json(&points)?),
        OutputFormat::Csv => println!("{}", maturity_to_csv(&points)?),
    }
    Ok(())
}
