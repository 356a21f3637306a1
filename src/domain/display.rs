//! The wholesale display snapshot handed to the presentation layer.
//!
//! Every refresh cycle builds a new [`DisplayState`]; nothing is patched in
//! place. Each field formats its own absence independently, so one missing
//! upstream value never blanks out its neighbours.

use super::weather::{
    CurrentConditions, FIELD_PLACEHOLDER, ForecastPoint, UNSET_DESCRIPTION, icon_glyph,
};

/// Location line while a refresh is in flight.
pub const LOADING_LOCATION: &str = "Fetching weather...";

/// Location line when current conditions could not be fetched.
pub const FAILED_LOCATION: &str = "Weather unavailable";

/// Companion line shown before the first generated comment and whenever
/// generation is skipped or fails.
pub const FALLBACK_COMMENT: &str = "Enjoy the day, rain or shine!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStatus {
    Loading,
    Ready,
    Failed,
}

/// One upcoming-forecast tile, preformatted.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyTile {
    pub time_label: String,
    pub icon: &'static str,
    pub temp_label: String,
    pub precipitation_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub status: DisplayStatus,
    pub location_line: String,
    pub icon: &'static str,
    pub temperature_line: String,
    pub feels_like_line: String,
    pub humidity_line: String,
    pub pressure_line: String,
    pub wind_line: String,
    pub conditions_line: String,
    pub hourly: Vec<HourlyTile>,
    pub comment: String,
}

impl DisplayState {
    pub fn loading() -> Self {
        Self::placeholder(DisplayStatus::Loading, LOADING_LOCATION)
    }

    pub fn failed() -> Self {
        Self::placeholder(DisplayStatus::Failed, FAILED_LOCATION)
    }

    fn placeholder(status: DisplayStatus, location_line: &str) -> Self {
        Self {
            status,
            location_line: location_line.to_string(),
            icon: " ",
            temperature_line: format_temperature_line(None, None),
            feels_like_line: format_feels_like_line(None),
            humidity_line: format_humidity_line(None),
            pressure_line: format_pressure_line(None),
            wind_line: format_wind_line(None),
            conditions_line: format_conditions_line(None),
            hourly: Vec::new(),
            comment: FALLBACK_COMMENT.to_string(),
        }
    }

    pub fn ready(
        location_line: String,
        current: &CurrentConditions,
        extremes: Option<(f64, f64)>,
        upcoming: &[ForecastPoint],
        comment: String,
    ) -> Self {
        Self {
            status: DisplayStatus::Ready,
            location_line,
            icon: icon_glyph(current.icon_id.as_deref()),
            temperature_line: format_temperature_line(current.temperature, extremes),
            feels_like_line: format_feels_like_line(current.feels_like),
            humidity_line: format_humidity_line(current.humidity),
            pressure_line: format_pressure_line(current.pressure),
            wind_line: format_wind_line(current.wind_speed),
            conditions_line: format_conditions_line(current.description.as_deref()),
            hourly: hourly_tiles(upcoming),
            comment,
        }
    }

    /// Plain-text rendition used by `--one-shot`.
    pub fn render_plain(&self) -> String {
        let mut lines = vec![
            self.location_line.clone(),
            self.temperature_line.clone(),
            self.feels_like_line.clone(),
            self.humidity_line.clone(),
            self.pressure_line.clone(),
            self.wind_line.clone(),
            self.conditions_line.clone(),
        ];
        if !self.hourly.is_empty() {
            lines.push("Upcoming:".to_string());
            for tile in &self.hourly {
                lines.push(format!(
                    "  {} {} {} {}",
                    tile.time_label, tile.icon, tile.temp_label, tile.precipitation_label
                ));
            }
        }
        lines.push(self.comment.clone());
        lines.join("\n")
    }
}

/// `name, CC` when the upstream reported a place; a fixed fallback otherwise.
pub fn format_location(name: Option<&str>, country: Option<&str>) -> String {
    match (name, country) {
        (Some(name), Some(country)) if !country.is_empty() => format!("{name}, {country}"),
        (Some(name), _) => name.to_string(),
        _ => "Unknown location".to_string(),
    }
}

pub fn format_temperature_line(current: Option<f64>, extremes: Option<(f64, f64)>) -> String {
    let (low, high) = match extremes {
        Some((low, high)) => (Some(low), Some(high)),
        None => (None, None),
    };
    format!(
        "Temp: {}°C / High: {}°C Low: {}°C",
        fmt_value(current, 1),
        fmt_value(high, 1),
        fmt_value(low, 1)
    )
}

fn format_feels_like_line(value: Option<f64>) -> String {
    format!("Feels like: {}°C", fmt_value(value, 1))
}

fn format_humidity_line(value: Option<f64>) -> String {
    format!("Humidity: {}%", fmt_value(value, 0))
}

fn format_pressure_line(value: Option<f64>) -> String {
    format!("Pressure: {} hPa", fmt_value(value, 0))
}

fn format_wind_line(value: Option<f64>) -> String {
    format!("Wind: {} m/s", fmt_value(value, 1))
}

fn format_conditions_line(description: Option<&str>) -> String {
    format!("Sky: {}", description.unwrap_or(UNSET_DESCRIPTION))
}

fn fmt_value(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(value) => format!("{value:.precision$}"),
        None => FIELD_PLACEHOLDER.to_string(),
    }
}

pub fn hourly_tiles(points: &[ForecastPoint]) -> Vec<HourlyTile> {
    points
        .iter()
        .map(|point| HourlyTile {
            time_label: point.time.format("%H:%M").to_string(),
            icon: icon_glyph(point.icon_id.as_deref()),
            temp_label: match point.temperature {
                Some(temp) => format!("{temp:.0}°C"),
                None => format!("{FIELD_PLACEHOLDER}°C"),
            },
            precipitation_label: match point.precipitation_probability {
                Some(pop) => format!("Rain: {:.0}%", pop * 100.0),
                None => format!("Rain: {FIELD_PLACEHOLDER}%"),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;

    fn point(temp: Option<f64>, pop: Option<f64>) -> ForecastPoint {
        ForecastPoint {
            time: NaiveDateTime::parse_from_str("2026-08-06 15:00:00", "%Y-%m-%d %H:%M:%S")
                .expect("valid fixed time"),
            temperature: temp,
            description: Some("light rain".to_string()),
            icon_id: Some("10d".to_string()),
            precipitation_probability: pop,
        }
    }

    #[test]
    fn loading_state_shows_placeholders_everywhere() {
        let state = DisplayState::loading();
        assert_eq!(state.status, DisplayStatus::Loading);
        assert_eq!(state.location_line, LOADING_LOCATION);
        assert_eq!(state.temperature_line, "Temp: --°C / High: --°C Low: --°C");
        assert_eq!(state.conditions_line, "Sky: ----");
        assert!(state.hourly.is_empty());
        assert_eq!(state.comment, FALLBACK_COMMENT);
    }

    #[test]
    fn failed_state_keeps_hourly_empty() {
        let state = DisplayState::failed();
        assert_eq!(state.status, DisplayStatus::Failed);
        assert_eq!(state.location_line, FAILED_LOCATION);
        assert!(state.hourly.is_empty());
    }

    #[test]
    fn each_field_renders_its_own_absence() {
        // Current temperature missing, extremes present: the high/low half of
        // the line must not degrade.
        let line = format_temperature_line(None, Some((18.2, 21.0)));
        assert_eq!(line, "Temp: --°C / High: 21.0°C Low: 18.2°C");

        let line = format_temperature_line(Some(19.5), None);
        assert_eq!(line, "Temp: 19.5°C / High: --°C Low: --°C");
    }

    #[test]
    fn ready_state_formats_mixed_availability() {
        let current = CurrentConditions {
            location_name: Some("Shibuya".to_string()),
            country_code: Some("JP".to_string()),
            temperature: Some(21.34),
            feels_like: None,
            humidity: Some(68.0),
            pressure: None,
            wind_speed: Some(3.6),
            description: Some("scattered clouds".to_string()),
            icon_id: Some("03d".to_string()),
        };

        let state = DisplayState::ready(
            format_location(
                current.location_name.as_deref(),
                current.country_code.as_deref(),
            ),
            &current,
            Some((18.2, 24.0)),
            &[point(Some(22.0), Some(0.4))],
            "Grab a light jacket!".to_string(),
        );

        assert_eq!(state.location_line, "Shibuya, JP");
        assert_eq!(state.temperature_line, "Temp: 21.3°C / High: 24.0°C Low: 18.2°C");
        assert_eq!(state.feels_like_line, "Feels like: --°C");
        assert_eq!(state.humidity_line, "Humidity: 68%");
        assert_eq!(state.pressure_line, "Pressure: -- hPa");
        assert_eq!(state.wind_line, "Wind: 3.6 m/s");
        assert_eq!(state.conditions_line, "Sky: scattered clouds");
        assert_eq!(state.icon, "☁");
        assert_eq!(state.hourly.len(), 1);
    }

    #[test]
    fn tiles_render_placeholders_for_absent_fields() {
        let tiles = hourly_tiles(&[point(None, None)]);
        assert_eq!(tiles[0].temp_label, "--°C");
        assert_eq!(tiles[0].precipitation_label, "Rain: --%");
        assert_eq!(tiles[0].time_label, "15:00");
        assert_eq!(tiles[0].icon, "☂");
    }

    #[test]
    fn tiles_scale_precipitation_to_percent() {
        let tiles = hourly_tiles(&[point(Some(21.6), Some(0.35))]);
        assert_eq!(tiles[0].temp_label, "22°C");
        assert_eq!(tiles[0].precipitation_label, "Rain: 35%");
    }

    #[test]
    fn location_falls_back_when_upstream_omits_the_name() {
        assert_eq!(format_location(None, Some("JP")), "Unknown location");
        assert_eq!(format_location(Some("Kyoto"), None), "Kyoto");
        assert_eq!(format_location(Some("Kyoto"), Some("")), "Kyoto");
    }

    #[test]
    fn plain_rendition_lists_tiles_between_fields_and_comment() {
        let current = CurrentConditions {
            location_name: Some("Tokyo".to_string()),
            country_code: Some("JP".to_string()),
            temperature: Some(20.0),
            ..CurrentConditions::default()
        };
        let state = DisplayState::ready(
            "Tokyo, JP".to_string(),
            &current,
            None,
            &[point(Some(21.0), Some(0.1))],
            FALLBACK_COMMENT.to_string(),
        );

        let plain = state.render_plain();
        assert!(plain.starts_with("Tokyo, JP\n"));
        assert!(plain.contains("Upcoming:"));
        assert!(plain.ends_with(FALLBACK_COMMENT));
    }
}
