use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::FetchError;

const GEOCODE_URL: &str = "https://api.openweathermap.org/geo/1.0";

/// Coordinates and display name for a resolved postal code.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

/// Client for the zip-code geocoding endpoint.
#[derive(Debug, Clone)]
pub struct PostalGeocodeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PostalGeocodeClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(GEOCODE_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Resolve a postal code into coordinates and a display name.
    ///
    /// The caller treats every `Err` as "unresolved" and falls back to a
    /// name-based lookup.
    pub async fn resolve(
        &self,
        postal_code: &str,
        country_code: &str,
    ) -> Result<ResolvedPlace, FetchError> {
        let zip = format!("{},{country_code}", normalize_postal_code(postal_code));
        let url = format!("{}/zip", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("zip", zip.as_str()), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let payload: ZipResponse = response.json().await.map_err(FetchError::Decode)?;
        let (Some(latitude), Some(longitude), Some(name)) =
            (payload.lat, payload.lon, payload.name)
        else {
            debug!("zip lookup response was missing coordinates or a name");
            return Err(FetchError::Incomplete);
        };

        Ok(ResolvedPlace {
            latitude,
            longitude,
            name,
        })
    }
}

/// Postal codes are free-form text; separators are stripped before the
/// request is built.
fn normalize_postal_code(raw: &str) -> String {
    raw.chars()
        .filter(|ch| *ch != '-' && !ch.is_whitespace())
        .collect()
}

#[derive(Debug, Deserialize)]
struct ZipResponse {
    lat: Option<f64>,
    lon: Option<f64>,
    name: Option<String>,
}
