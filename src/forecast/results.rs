//! Forecast output structures and annual aggregation

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One simulated month, currency fields rounded to whole units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyForecastEntry {
    /// Month within the forecast year (1-12)
    pub month: u32,
    /// Forecast year (1-indexed, relative to the start of the run)
    pub year: u32,
    pub revenue: i64,
    pub costs: i64,
    pub profit: i64,
}

/// Sum of a forecast year's monthly entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnnualForecastEntry {
    pub year: u32,
    pub revenue: i64,
    pub costs: i64,
    pub profit: i64,
}

impl MonthlyForecastEntry {
    /// 1-indexed month counted from the start of the run
    pub fn absolute_month(&self) -> u32 {
        (self.year.saturating_sub(1)) * 12 + self.month
    }
}

impl AnnualForecastEntry {
    /// Profit margin as a fraction; 0 when there is no revenue
    pub fn margin(&self) -> f64 {
        margin(self.profit, self.revenue)
    }
}

/// profit / revenue guarded against zero revenue
pub fn margin(profit: i64, revenue: i64) -> f64 {
    if revenue == 0 {
        0.0
    } else {
        profit as f64 / revenue as f64
    }
}

/// Roll monthly entries up into one entry per forecast year, ascending by year
///
/// Each monthly figure fits in `i64` on its own, but a year of them may not. A sum
/// that would overflow fails with `NonFiniteValue` naming the month that tipped it.
pub fn aggregate_annual(monthly: &[MonthlyForecastEntry]) -> Result<Vec<AnnualForecastEntry>> {
    let mut years: BTreeMap<u32, AnnualForecastEntry> = BTreeMap::new();

    for entry in monthly {
        let month = entry.absolute_month();
        let annual = years.entry(entry.year).or_insert_with(|| AnnualForecastEntry {
            year: entry.year,
            ..Default::default()
        });
        annual.revenue = checked_total(annual.revenue, entry.revenue, month, "revenue")?;
        annual.costs = checked_total(annual.costs, entry.costs, month, "costs")?;
        annual.profit = checked_total(annual.profit, entry.profit, month, "profit")?;
    }

    Ok(years.into_values().collect())
}

fn checked_total(total: i64, value: i64, month: u32, field: &'static str) -> Result<i64> {
    total
        .checked_add(value)
        .ok_or(ForecastError::NonFiniteValue { month, field })
}

/// Complete forecast for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    /// Monthly entries in simulation order
    pub monthly: Vec<MonthlyForecastEntry>,

    /// Annual roll-up of `monthly`
    pub annual: Vec<AnnualForecastEntry>,

    /// First simulation month (1-indexed, absolute) with positive profit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_even_month: Option<u32>,

    /// Non-fatal issues found while resolving the request
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ForecastResult {
    /// Build a result from finished monthly entries, deriving the annual roll-up
    ///
    /// Fails if any yearly or whole-run total would overflow `i64`.
    pub fn from_monthly(monthly: Vec<MonthlyForecastEntry>, break_even_month: Option<u32>) -> Result<Self> {
        let annual = aggregate_annual(&monthly)?;

        // Whole-run totals must fit too, so summary() never has to saturate
        let (mut revenue, mut costs, mut profit) = (0i64, 0i64, 0i64);
        for year in &annual {
            let month = year.year * 12;
            revenue = checked_total(revenue, year.revenue, month, "revenue")?;
            costs = checked_total(costs, year.costs, month, "costs")?;
            profit = checked_total(profit, year.profit, month, "profit")?;
        }

        Ok(Self {
            monthly,
            annual,
            break_even_month,
            warnings: Vec::new(),
        })
    }

    /// Get summary statistics
    pub fn summary(&self) -> ForecastSummary {
        let (mut total_revenue, mut total_costs, mut total_profit) = (0i64, 0i64, 0i64);
        for year in &self.annual {
            total_revenue = total_revenue.saturating_add(year.revenue);
            total_costs = total_costs.saturating_add(year.costs);
            total_profit = total_profit.saturating_add(year.profit);
        }

        let final_year = self.annual.last().copied().unwrap_or_default();

        ForecastSummary {
            total_months: self.monthly.len() as u32,
            total_revenue,
            total_costs,
            total_profit,
            overall_margin: margin(total_profit, total_revenue),
            final_year_revenue: final_year.revenue,
            final_year_profit: final_year.profit,
            break_even_month: self.break_even_month,
        }
    }
}

/// Summary statistics for a forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub total_months: u32,
    pub total_revenue: i64,
    pub total_costs: i64,
    pub total_profit: i64,
    pub overall_margin: f64,
    pub final_year_revenue: i64,
    pub final_year_profit: i64,
    pub break_even_month: Option<u32>,
}
