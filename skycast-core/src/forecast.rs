//! Reduction of a timestamped sample list into a short daily forecast.

use crate::icons::ConditionIcon;
use crate::model::ForecastDay;

/// How many days the aggregated window may hold.
const WINDOW_DAYS: usize = 4;

/// One timestamped observation from the forecast list payload.
#[derive(Debug, Clone)]
pub struct Sample {
    /// `"YYYY-MM-DD HH:MM:SS"`, as supplied by the service.
    pub timestamp: String,
    /// Temperature in whatever units the service returned.
    pub temperature: f64,
    pub icon_code: Option<String>,
}

/// Collapse samples into at most four [`ForecastDay`] records.
///
/// Samples are grouped by the date portion of their timestamp, keeping the
/// first-seen order of distinct dates. The first group is assumed to be the
/// current day (not checked against the wall clock) and is dropped; the next
/// four groups form the window. Each day carries the mean temperature of its
/// samples and the icon of its first sample.
pub fn aggregate_daily(samples: &[Sample]) -> Vec<ForecastDay> {
    let mut groups: Vec<(String, Vec<&Sample>)> = Vec::new();

    for sample in samples {
        let date = sample.timestamp.split(' ').next().unwrap_or_default();
        match groups.iter_mut().find(|(d, _)| d.as_str() == date) {
            Some((_, members)) => members.push(sample),
            None => groups.push((date.to_owned(), vec![sample])),
        }
    }

    groups
        .into_iter()
        .skip(1)
        .take(WINDOW_DAYS)
        .map(|(date, members)| {
            let mean =
                members.iter().map(|s| s.temperature).sum::<f64>() / members.len() as f64;
            let icon =
                ConditionIcon::from_code(members.first().and_then(|s| s.icon_code.as_deref()));

            ForecastDay { date, avg_temp: format_avg_temp(mean), icon }
        })
        .collect()
}

/// One decimal place, ties rounded away from zero: 20.25 -> "20.3".
fn format_avg_temp(mean: f64) -> String {
    format!("{:.1}", (mean * 10.0).round() / 10.0)
}
