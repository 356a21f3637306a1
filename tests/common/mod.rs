#![allow(dead_code)]

use chrono::{Duration, Local};
use clap::Parser;
use serde_json::{Value, json};
use skycast::cli::Cli;
use skycast::config::{Config, DEFAULT_PROMPT_TEMPLATE};

pub fn test_config(comment_key: Option<&str>) -> Config {
    Config {
        weather_api_key: "weather-test-key".to_string(),
        comment_api_key: comment_key.map(str::to_string),
        comment_model: "gemini-1.5-flash".to_string(),
        prompt_template: DEFAULT_PROMPT_TEMPLATE.to_string(),
    }
}

pub fn cli_for(base_url: &str, postal_code: Option<&str>) -> Cli {
    let mut args = vec![
        "skycast".to_string(),
        "--weather-url".to_string(),
        base_url.to_string(),
        "--geocode-url".to_string(),
        base_url.to_string(),
        "--comment-url".to_string(),
        base_url.to_string(),
    ];
    if let Some(code) = postal_code {
        args.push("--postal-code".to_string());
        args.push(code.to_string());
    }
    Cli::parse_from(args)
}

/// Timestamp in the upstream forecast format, relative to the wall clock so
/// the selection window sees it as upcoming.
pub fn forecast_timestamp(hours_ahead: i64) -> String {
    (Local::now().naive_local() + Duration::hours(hours_ahead))
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

pub fn current_payload() -> Value {
    json!({
        "name": "Tokyo",
        "sys": {"country": "JP"},
        "main": {"temp": 27.4, "feels_like": 29.1, "humidity": 74, "pressure": 1009},
        "wind": {"speed": 4.1},
        "weather": [{"description": "broken clouds", "icon": "04d"}]
    })
}

pub fn forecast_entry(hours_ahead: i64, temp: f64, pop: f64) -> Value {
    json!({
        "dt_txt": forecast_timestamp(hours_ahead),
        "main": {"temp": temp},
        "weather": [{"description": "light rain", "icon": "10d"}],
        "pop": pop
    })
}

pub fn forecast_payload(entries: Vec<Value>) -> Value {
    json!({"cod": "200", "list": entries})
}

pub fn zip_payload(name: &str, lat: f64, lon: f64) -> Value {
    json!({"zip": "151-0053", "name": name, "lat": lat, "lon": lon, "country": "JP"})
}

pub fn comment_payload(text: &str) -> Value {
    json!({
        "candidates": [
            {"content": {"parts": [{"text": text}]}}
        ]
    })
}
