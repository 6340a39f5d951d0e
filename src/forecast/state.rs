//! Simulation state carried from month to month

use serde::{Deserialize, Serialize};

/// Running user/subscriber count for stateful variants. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(into = "f64", from = "f64")]
pub struct CumulativeState(f64);

impl CumulativeState {
    pub const ZERO: CumulativeState = CumulativeState(0.0);

    /// Clamps negative (and NaN) counts to zero
    pub fn new(value: f64) -> Self {
        Self(value.max(0.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for CumulativeState {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<CumulativeState> for f64 {
    fn from(state: CumulativeState) -> Self {
        state.0
    }
}

/// State of one forecast run at a point in the simulation
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Current simulation month (1-indexed, 0 before the first advance)
    pub month: u32,

    /// Forecast year (1-indexed)
    pub year: u32,

    /// Month within the forecast year (1-12)
    pub month_in_year: u32,

    /// Carried users/subscribers
    pub cumulative: CumulativeState,

    /// First month with positive profit, once found
    pub break_even_month: Option<u32>,
}

impl SimulationState {
    /// Fresh state for a new run
    pub fn new() -> Self {
        Self {
            month: 0,
            year: 1,
            month_in_year: 0,
            cumulative: CumulativeState::ZERO,
            break_even_month: None,
        }
    }

    /// Advance to next month
    pub fn advance_month(&mut self) {
        self.month += 1;
        self.year = (self.month - 1) / 12 + 1;
        self.month_in_year = (self.month - 1) % 12 + 1;
    }

    /// Record this month's profit; the first positive month sticks
    pub fn record_profit(&mut self, profit: f64) {
        if self.break_even_month.is_none() && profit > 0.0 {
            log::debug!("Break-even reached in month {}", self.month);
            self.break_even_month = Some(self.month);
        }
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_state_never_negative() {
        assert_eq!(CumulativeState::new(-12.5).value(), 0.0);
        assert_eq!(CumulativeState::new(f64::NAN).value(), 0.0);
        assert_eq!(CumulativeState::new(7.0).value(), 7.0);
    }

    #[test]
    fn test_timing_wraps_every_twelve_months() {
        let mut state = SimulationState::new();
        let mut seen = Vec::new();
        for _ in 0..25 {
            state.advance_month();
            seen.push((state.month, state.year, state.month_in_year));
        }
        assert_eq!(seen[0], (1, 1, 1));
        assert_eq!(seen[11], (12, 1, 12));
        assert_eq!(seen[12], (13, 2, 1));
        assert_eq!(seen[24], (25, 3, 1));
    }

    #[test]
    fn test_break_even_is_sticky() {
        let mut state = SimulationState::new();
        for profit in [-10.0, 0.0, 5.0, -3.0, 50.0] {
            state.advance_month();
            state.record_profit(profit);
        }
        assert_eq!(state.break_even_month, Some(3));
    }
}
