use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::icons::ConditionIcon;

/// Current conditions for one location, normalized from the service response.
/// Replaced as a whole value on every successful search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Whole degrees Celsius, floor of the reported value.
    pub temperature_c: i32,
    pub location_name: String,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub icon: ConditionIcon,
    pub observation_time: DateTime<Utc>,
}

/// One day of the aggregated forecast window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Calendar date, `"YYYY-MM-DD"`.
    pub date: String,
    /// Mean temperature of the day's samples, fixed to one decimal place.
    pub avg_temp: String,
    pub icon: ConditionIcon,
}
