//! Export of forecast results for downstream consumers
//!
//! CSV writers for the monthly and annual tables, and a timestamped snapshot that a
//! storage layer can persist keyed by business idea. Storage itself lives elsewhere.

use crate::error::Result;
use crate::forecast::ForecastResult;
use crate::request::ForecastRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

pub const MONTHLY_HEADER: [&str; 5] = ["Year", "Month", "Revenue", "Costs", "Profit"];
pub const ANNUAL_HEADER: [&str; 5] = ["Year", "Revenue", "Costs", "Profit", "Margin"];

/// Write `monthly` as `Year,Month,Revenue,Costs,Profit` rows
pub fn write_monthly_csv<W: Write>(result: &ForecastResult, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(MONTHLY_HEADER)?;

    for row in &result.monthly {
        csv_writer.write_record(&[
            row.year.to_string(),
            row.month.to_string(),
            row.revenue.to_string(),
            row.costs.to_string(),
            row.profit.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write `annual` as `Year,Revenue,Costs,Profit,Margin` rows (margin to 4 dp, 0 with no revenue)
pub fn write_annual_csv<W: Write>(result: &ForecastResult, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(ANNUAL_HEADER)?;

    for row in &result.annual {
        csv_writer.write_record(&[
            row.year.to_string(),
            row.revenue.to_string(),
            row.costs.to_string(),
            row.profit.to_string(),
            format!("{:.4}", row.margin()),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Monthly CSV as a string
pub fn monthly_csv_string(result: &ForecastResult) -> Result<String> {
    let mut buffer = Vec::new();
    write_monthly_csv(result, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// A forecast ready to hand to a storage layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSnapshot {
    pub business_idea_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub request: ForecastRequest,
    pub result: ForecastResult,
}

impl ForecastSnapshot {
    pub fn new(business_idea_id: &str, request: ForecastRequest, result: ForecastResult) -> Self {
        let now = Utc::now();
        Self {
            business_idea_id: business_idea_id.to_string(),
            created_at: now,
            updated_at: now,
            request,
            result,
        }
    }

    /// Swap in a re-run forecast, keeping the creation time
    pub fn update(&mut self, request: ForecastRequest, result: ForecastResult) {
        self.request = request;
        self.result = result;
        self.updated_at = Utc::now();
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BusinessModelVariant;
    use crate::assumptions::CostStructure;

    fn sample() -> (ForecastRequest, ForecastResult) {
        let request = ForecastRequest::new(BusinessModelVariant::StraightSales)
            .with_costs(CostStructure::new(18_000.0, 0.0));
        let result = request.run().unwrap();
        (request, result)
    }

    #[test]
    fn test_monthly_csv_layout() {
        let (_, result) = sample();
        let csv = monthly_csv_string(&result).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "Year,Month,Revenue,Costs,Profit");
        assert_eq!(lines[1], "1,1,20000,18000,2000");
        assert_eq!(lines[10], "1,10,24000,18000,6000");
    }

    #[test]
    fn test_annual_csv_layout() {
        let (_, result) = sample();
        let mut buffer = Vec::new();
        write_annual_csv(&result, &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Year,Revenue,Costs,Profit,Margin");
        // 9 plain months at 20000 plus 3 uplifted at 24000
        assert_eq!(lines[1], "1,252000,216000,36000,0.1429");
    }

    #[test]
    fn test_snapshot_update_keeps_created_at() {
        let (request, result) = sample();
        let mut snapshot = ForecastSnapshot::new("idea-42", request.clone(), result);
        let created = snapshot.created_at;

        let rerun = request.clone().with_horizon(24);
        let rerun_result = rerun.run().unwrap();
        snapshot.update(rerun, rerun_result);

        assert_eq!(snapshot.created_at, created);
        assert!(snapshot.updated_at >= created);
        assert_eq!(snapshot.result.monthly.len(), 24);
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let (request, result) = sample();
        let snapshot = ForecastSnapshot::new("idea-7", request, result);
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"businessIdeaId\": \"idea-7\""));
        assert_eq!(ForecastSnapshot::from_json(&json).unwrap(), snapshot);
    }
}
