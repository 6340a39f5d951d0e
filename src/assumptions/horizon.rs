//! Supported forecast horizons

use crate::error::ForecastError;
use serde::{Deserialize, Serialize};

/// Length of a forecast run. Only whole years from one to five are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ForecastHorizon {
    #[default]
    OneYear,
    TwoYears,
    ThreeYears,
    FourYears,
    FiveYears,
}

impl ForecastHorizon {
    pub const SUPPORTED_MONTHS: [u32; 5] = [12, 24, 36, 48, 60];

    pub fn months(&self) -> u32 {
        match self {
            ForecastHorizon::OneYear => 12,
            ForecastHorizon::TwoYears => 24,
            ForecastHorizon::ThreeYears => 36,
            ForecastHorizon::FourYears => 48,
            ForecastHorizon::FiveYears => 60,
        }
    }

    pub fn years(&self) -> u32 {
        self.months() / 12
    }
}

impl TryFrom<u32> for ForecastHorizon {
    type Error = ForecastError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        match months {
            12 => Ok(ForecastHorizon::OneYear),
            24 => Ok(ForecastHorizon::TwoYears),
            36 => Ok(ForecastHorizon::ThreeYears),
            48 => Ok(ForecastHorizon::FourYears),
            60 => Ok(ForecastHorizon::FiveYears),
            other => Err(ForecastError::UnsupportedHorizon(other)),
        }
    }
}

impl From<ForecastHorizon> for u32 {
    fn from(horizon: ForecastHorizon) -> Self {
        horizon.months()
    }
}
