use chrono::NaiveDateTime;

/// Rendered in place of any absent numeric field.
pub const FIELD_PLACEHOLDER: &str = "--";

/// Shown while no weather description has been received.
pub const UNSET_DESCRIPTION: &str = "----";

/// Current conditions for a location. Every field is optional: the upstream
/// service omits fields freely and an absent value must stay absent all the
/// way to the screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurrentConditions {
    pub location_name: Option<String>,
    pub country_code: Option<String>,
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub wind_speed: Option<f64>,
    pub description: Option<String>,
    pub icon_id: Option<String>,
}

/// One 3-hour forecast sample. Immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub time: NaiveDateTime,
    pub temperature: Option<f64>,
    pub description: Option<String>,
    pub icon_id: Option<String>,
    /// Probability of precipitation in `[0, 1]`.
    pub precipitation_probability: Option<f64>,
}

/// Forecast timestamps arrive as `"YYYY-MM-DD HH:MM:SS"` in the location's
/// local time.
pub fn parse_forecast_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").ok()
}

/// Map a weather icon id (e.g. `"10d"`, `"01n"`) to a terminal glyph. The
/// trailing day/night letter does not change the glyph.
pub fn icon_glyph(icon_id: Option<&str>) -> &'static str {
    let Some(id) = icon_id else {
        return " ";
    };
    match id.get(..2) {
        Some("01") => "☀",
        Some("02") => "⛅",
        Some("03") | Some("04") => "☁",
        Some("09") | Some("10") => "☂",
        Some("11") => "⚡",
        Some("13") => "❄",
        Some("50") => "░",
        _ => "☁",
    }
}
