use reqwest::Client;
use serde::Deserialize;

use crate::domain::weather::{CurrentConditions, ForecastPoint, parse_forecast_timestamp};

use super::FetchError;

const WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Addressing for a weather request: resolved coordinates or a city name,
/// never both.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceQuery {
    Coordinates { latitude: f64, longitude: f64 },
    City(String),
}

/// Client for the current-weather and 3-hourly forecast endpoints.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(WEATHER_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub async fn fetch_current(&self, place: &PlaceQuery) -> Result<CurrentConditions, FetchError> {
        let payload: CurrentResponse = self.get_json("weather", place).await?;
        Ok(into_current(payload))
    }

    /// Fetch the multi-day series of 3-hour samples, in upstream order.
    pub async fn fetch_forecast(&self, place: &PlaceQuery) -> Result<Vec<ForecastPoint>, FetchError> {
        let payload: ForecastResponse = self.get_json("forecast", place).await?;
        Ok(into_series(payload))
    }

    async fn get_json<T>(&self, endpoint: &str, place: &PlaceQuery) -> Result<T, FetchError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}/{endpoint}", self.base_url);
        let mut request = self
            .client
            .get(&url)
            .query(&[("appid", self.api_key.as_str()), ("units", "metric")]);
        request = match place {
            PlaceQuery::Coordinates {
                latitude,
                longitude,
            } => request.query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
            ]),
            PlaceQuery::City(name) => request.query(&[("q", name.as_str())]),
        };

        let response = request.send().await.map_err(FetchError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        response.json().await.map_err(FetchError::Decode)
    }
}

fn into_current(payload: CurrentResponse) -> CurrentConditions {
    let main = payload.main.unwrap_or_default();
    let weather = payload.weather.into_iter().next().unwrap_or_default();
    CurrentConditions {
        location_name: payload.name.filter(|name| !name.is_empty()),
        country_code: payload.sys.and_then(|sys| sys.country),
        temperature: main.temp,
        feels_like: main.feels_like,
        humidity: main.humidity,
        pressure: main.pressure,
        wind_speed: payload.wind.and_then(|wind| wind.speed),
        description: weather.description.filter(|desc| !desc.is_empty()),
        icon_id: weather.icon,
    }
}

fn into_series(payload: ForecastResponse) -> Vec<ForecastPoint> {
    let mut series = Vec::with_capacity(payload.list.len());
    for entry in payload.list {
        // An unreadable timestamp skips the entry, never the whole series.
        let Some(time) = entry.dt_txt.as_deref().and_then(parse_forecast_timestamp) else {
            continue;
        };
        let main = entry.main.unwrap_or_default();
        let weather = entry.weather.into_iter().next().unwrap_or_default();
        series.push(ForecastPoint {
            time,
            temperature: main.temp,
            description: weather.description,
            icon_id: weather.icon,
            precipitation_probability: entry.pop,
        });
    }
    series
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: Option<String>,
    sys: Option<SysBlock>,
    main: Option<MainBlock>,
    wind: Option<WindBlock>,
    #[serde(default)]
    weather: Vec<WeatherBlock>,
}

#[derive(Debug, Deserialize)]
struct SysBlock {
    country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct MainBlock {
    temp: Option<f64>,
    feels_like: Option<f64>,
    humidity: Option<f64>,
    pressure: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct WeatherBlock {
    description: Option<String>,
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    dt_txt: Option<String>,
    main: Option<MainBlock>,
    #[serde(default)]
    weather: Vec<WeatherBlock>,
    pop: Option<f64>,
}
