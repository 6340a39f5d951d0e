//! Run every forecast request in a JSON file in parallel
//!
//! Usage: cargo run --bin run_batch -- requests.json [batch_summary.csv]
//!
//! Writes one summary row per request, in input order.

use anyhow::{Context, Result};
use revenue_forecast::{request::load_requests, scenario::run_batch};
use std::fs::File;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = args.next().context("Usage: run_batch <requests.json> [output.csv]")?;
    let output = args.next().unwrap_or_else(|| "batch_summary.csv".to_string());

    let start = Instant::now();
    let requests = load_requests(&input).with_context(|| format!("Failed to load {}", input))?;
    println!("Loaded {} requests in {:?}", requests.len(), start.elapsed());

    let run_start = Instant::now();
    let results = run_batch(&requests);
    println!("Forecasts complete in {:?}", run_start.elapsed());

    let file = File::create(&output).with_context(|| format!("Failed to create {}", output))?;
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record([
        "Index",
        "Variant",
        "HorizonMonths",
        "TotalRevenue",
        "TotalCosts",
        "TotalProfit",
        "BreakEvenMonth",
        "Error",
    ])?;

    let mut failures = 0;
    for (index, (request, result)) in requests.iter().zip(&results).enumerate() {
        let row = match result {
            Ok(forecast) => {
                let summary = forecast.summary();
                [
                    index.to_string(),
                    request.business_model_variant.clone(),
                    request.forecast_horizon_months.to_string(),
                    summary.total_revenue.to_string(),
                    summary.total_costs.to_string(),
                    summary.total_profit.to_string(),
                    summary.break_even_month.map(|m| m.to_string()).unwrap_or_default(),
                    String::new(),
                ]
            }
            Err(err) => {
                failures += 1;
                [
                    index.to_string(),
                    request.business_model_variant.clone(),
                    request.forecast_horizon_months.to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    err.to_string(),
                ]
            }
        };
        writer.write_record(&row)?;
    }
    writer.flush()?;

    println!("Output written to {}", output);
    println!("  Succeeded: {}", results.len() - failures);
    println!("  Failed:    {}", failures);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
