//! Scenario runner for batch forecasts
//!
//! Every run owns its own simulation state, so independent scenarios fan out across
//! threads with rayon and come back in input order.

use crate::assumptions::GrowthAssumptions;
use crate::error::Result;
use crate::forecast::ForecastResult;
use crate::request::ForecastRequest;
use rayon::prelude::*;

/// Runs variations of a base request
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(request);
///
/// // Same business model under three growth outlooks
/// let results = runner.run_growth_sweep(&[0.0, 2.5, 5.0]);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: ForecastRequest,
}

impl ScenarioRunner {
    pub fn new(base: ForecastRequest) -> Self {
        Self { base }
    }

    /// Run the base request as-is
    pub fn run(&self) -> Result<ForecastResult> {
        self.base.run()
    }

    /// Run the base request under each set of growth assumptions
    pub fn run_scenarios(&self, scenarios: &[GrowthAssumptions]) -> Vec<Result<ForecastResult>> {
        scenarios
            .par_iter()
            .map(|growth| self.base.clone().with_growth(*growth).run())
            .collect()
    }

    /// Run the base request with each global monthly growth rate (%), other assumptions unchanged
    pub fn run_growth_sweep(&self, monthly_growth_rates: &[f64]) -> Vec<Result<ForecastResult>> {
        let scenarios: Vec<GrowthAssumptions> = monthly_growth_rates
            .iter()
            .map(|&rate| GrowthAssumptions {
                monthly_growth_rate: rate,
                ..self.base.growth_assumptions
            })
            .collect();
        self.run_scenarios(&scenarios)
    }

    pub fn base(&self) -> &ForecastRequest {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut ForecastRequest {
        &mut self.base
    }
}

/// Run unrelated requests in parallel
pub fn run_batch(requests: &[ForecastRequest]) -> Vec<Result<ForecastResult>> {
    let results: Vec<_> = requests.par_iter().map(|request| request.run()).collect();
    let failed = results.iter().filter(|r| r.is_err()).count();
    log::info!("Batch complete: {} requests, {} failed", results.len(), failed);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::CostStructure;
    use crate::error::ForecastError;
    use crate::model::BusinessModelVariant;

    #[test]
    fn test_growth_sweep_orders_and_scales() {
        let base = ForecastRequest::new(BusinessModelVariant::HardwareSaas).with_horizon(24);
        let runner = ScenarioRunner::new(base);

        let results = runner.run_growth_sweep(&[0.0, 2.0, 4.0]);
        assert_eq!(results.len(), 3);

        let totals: Vec<i64> = results
            .iter()
            .map(|r| r.as_ref().unwrap().summary().total_revenue)
            .collect();

        // Higher global growth should give higher total revenue
        assert!(totals[0] < totals[1] && totals[1] < totals[2]);
    }

    #[test]
    fn test_batch_matches_sequential_runs() {
        let requests: Vec<ForecastRequest> = BusinessModelVariant::ALL
            .iter()
            .map(|&variant| {
                ForecastRequest::new(variant)
                    .with_horizon(36)
                    .with_growth(GrowthAssumptions::with_monthly_growth(1.5))
                    .with_costs(CostStructure::new(3_000.0, 12_000.0))
            })
            .collect();

        let parallel = run_batch(&requests);
        for (request, result) in requests.iter().zip(parallel) {
            assert_eq!(result.unwrap(), request.run().unwrap());
        }
    }

    #[test]
    fn test_batch_reports_failures_per_request() {
        let requests = vec![
            ForecastRequest::new(BusinessModelVariant::Saas),
            ForecastRequest::new(BusinessModelVariant::Saas).with_horizon(7),
        ];
        let results = run_batch(&requests);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(ForecastError::UnsupportedHorizon(7))));
    }
}
