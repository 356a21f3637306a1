//! Forecast-window selection and daily extremes.
//!
//! Both operations take the reference instant as a parameter and are fully
//! deterministic; the caller supplies the wall clock.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime};

use super::weather::ForecastPoint;

/// Bounds for the hourly-tile selection.
#[derive(Debug, Clone)]
pub struct SelectionWindow {
    pub horizon_hours: f64,
    pub max_results: usize,
}

impl Default for SelectionWindow {
    fn default() -> Self {
        Self {
            horizon_hours: 9.0,
            max_results: 3,
        }
    }
}

/// Pick the next forecast points after `reference`, closest first.
///
/// A point qualifies when its offset from `reference` is within
/// `[0, horizon_hours]`, inclusive on both ends. Qualifying points are sorted
/// ascending by offset (stable, so upstream order breaks ties) and truncated
/// to `max_results`. An empty series yields an empty result.
pub fn select_upcoming(
    series: &[ForecastPoint],
    reference: NaiveDateTime,
    window: &SelectionWindow,
) -> Vec<ForecastPoint> {
    let mut eligible: Vec<(f64, &ForecastPoint)> = series
        .iter()
        .filter_map(|point| {
            let delta = hours_between(reference, point.time);
            (0.0..=window.horizon_hours)
                .contains(&delta)
                .then_some((delta, point))
        })
        .collect();

    eligible.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    eligible
        .into_iter()
        .take(window.max_results)
        .map(|(_, point)| point.clone())
        .collect()
}

fn hours_between(reference: NaiveDateTime, time: NaiveDateTime) -> f64 {
    (time - reference).num_seconds() as f64 / 3600.0
}

/// Minimum and maximum temperature among the samples falling on `date`.
///
/// Samples on other dates or without a temperature are skipped. `None` when
/// nothing qualifies, never a zero pair.
pub fn daily_extremes(series: &[ForecastPoint], date: NaiveDate) -> Option<(f64, f64)> {
    let mut extremes: Option<(f64, f64)> = None;
    for point in series {
        if point.time.date() != date {
            continue;
        }
        let Some(temp) = point.temperature else {
            continue;
        };
        extremes = Some(match extremes {
            None => (temp, temp),
            Some((min, max)) => (min.min(temp), max.max(temp)),
        });
    }
    extremes
}
