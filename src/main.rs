//! Revenue Forecast CLI
//!
//! Command-line interface for running a single forecast

use anyhow::{Context, Result};
use clap::Parser;
use revenue_forecast::{
    export::{write_annual_csv, write_monthly_csv},
    request::load_request,
    BusinessModelVariant, ForecastRequest,
};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "revenue_forecast")]
#[command(author, version, about = "Run a month-by-month revenue forecast", long_about = None)]
struct Cli {
    /// JSON request file; defaults to a SAAS request with default parameters
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Override the request's business model variant (e.g. SAAS, Marketplace)
    #[arg(long)]
    variant: Option<String>,

    /// Override the horizon in months (12, 24, 36, 48, 60)
    #[arg(long)]
    horizon: Option<u32>,

    /// Write monthly rows to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write annual rows to this CSV file
    #[arg(long)]
    annual_csv: Option<PathBuf>,

    /// Print the full result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut request = match &cli.input {
        Some(path) => load_request(path)
            .with_context(|| format!("Failed to load request from {}", path.display()))?,
        None => ForecastRequest::new(BusinessModelVariant::Saas),
    };
    if let Some(variant) = &cli.variant {
        request.business_model_variant = variant.clone();
    }
    if let Some(months) = cli.horizon {
        request.forecast_horizon_months = months;
    }

    let result = request.run().context("Forecast failed")?;

    if let Some(path) = &cli.csv {
        let file = File::create(path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        write_monthly_csv(&result, file)?;
    }
    if let Some(path) = &cli.annual_csv {
        let file = File::create(path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        write_annual_csv(&result, file)?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Revenue Forecast v{}", env!("CARGO_PKG_VERSION"));
    println!("========================\n");
    println!("Variant: {}", request.business_model_variant);
    println!("Horizon: {} months", request.forecast_horizon_months);
    for warning in &result.warnings {
        println!("Warning: {}", warning);
    }
    println!();

    println!("{:>4} {:>5} {:>14} {:>14} {:>14}", "Year", "Month", "Revenue", "Costs", "Profit");
    println!("{}", "-".repeat(55));
    for row in &result.monthly {
        println!(
            "{:>4} {:>5} {:>14} {:>14} {:>14}",
            row.year, row.month, row.revenue, row.costs, row.profit
        );
    }

    println!("\nAnnual:");
    for row in &result.annual {
        println!(
            "  Year {}: Revenue={} Costs={} Profit={} Margin={:.1}%",
            row.year,
            row.revenue,
            row.costs,
            row.profit,
            row.margin() * 100.0
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Total Revenue: {}", summary.total_revenue);
    println!("  Total Costs: {}", summary.total_costs);
    println!("  Total Profit: {}", summary.total_profit);
    match summary.break_even_month {
        Some(month) => println!("  Break-even: month {}", month),
        None => println!("  Break-even: not reached"),
    }

    Ok(())
}
