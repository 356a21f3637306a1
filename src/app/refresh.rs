//! One refresh cycle: resolve the location, fetch, derive, snapshot.

use chrono::Local;
use tracing::{debug, warn};

use crate::cli::Cli;
use crate::config::Config;
use crate::data::comment::CommentClient;
use crate::data::geocode::{PostalGeocodeClient, ResolvedPlace};
use crate::data::weather::{PlaceQuery, WeatherClient};
use crate::domain::display::{DisplayState, FALLBACK_COMMENT, format_location};
use crate::domain::forecast::{SelectionWindow, daily_extremes, select_upcoming};

/// Owns the service clients and produces one [`DisplayState`] per cycle.
/// Independent of any UI type; `run_cycle` never errors.
pub struct Refresher {
    geocoder: PostalGeocodeClient,
    weather: WeatherClient,
    commenter: CommentClient,
    default_city: String,
    country_code: String,
    window: SelectionWindow,
}

impl Refresher {
    pub fn new(config: &Config, cli: &Cli) -> Self {
        let geocoder = match &cli.geocode_url {
            Some(url) => PostalGeocodeClient::with_base_url(url, config.weather_api_key.clone()),
            None => PostalGeocodeClient::new(config.weather_api_key.clone()),
        };
        let weather = match &cli.weather_url {
            Some(url) => WeatherClient::with_base_url(url, config.weather_api_key.clone()),
            None => WeatherClient::new(config.weather_api_key.clone()),
        };
        let commenter = match &cli.comment_url {
            Some(url) => CommentClient::with_base_url(url, config),
            None => CommentClient::new(config),
        };

        Self {
            geocoder,
            weather,
            commenter,
            default_city: cli.default_city(),
            country_code: cli.country_code.clone(),
            window: cli.window(),
        }
    }

    /// Run one complete refresh and return the wholesale snapshot.
    pub async fn run_cycle(&self, postal_code: Option<&str>) -> DisplayState {
        let resolved = self.resolve_place(postal_code).await;
        let place = match &resolved {
            Some(place) => PlaceQuery::Coordinates {
                latitude: place.latitude,
                longitude: place.longitude,
            },
            None => PlaceQuery::City(self.default_city.clone()),
        };

        // The two fetches are independent of each other.
        let (current, forecast) = tokio::join!(
            self.weather.fetch_current(&place),
            self.weather.fetch_forecast(&place),
        );

        let series = forecast.unwrap_or_else(|err| {
            debug!("forecast fetch failed: {err}");
            Vec::new()
        });

        let current = match current {
            Ok(current) => current,
            Err(err) => {
                warn!("current-conditions fetch failed: {err}");
                return DisplayState::failed();
            }
        };

        let now = Local::now().naive_local();
        let extremes = daily_extremes(&series, now.date());
        let upcoming = select_upcoming(&series, now, &self.window);

        // Only ask for a comment when there is something to comment on.
        let comment = match (current.description.as_deref(), current.temperature) {
            (Some(description), Some(temperature)) => {
                self.commenter.generate(description, temperature).await
            }
            _ => FALLBACK_COMMENT.to_string(),
        };

        // A resolved postal code wins the location line for the whole cycle;
        // otherwise the upstream-reported place is shown.
        let location_line = match &resolved {
            Some(place) => format!("{}, {}", place.name, self.country_code),
            None => format_location(
                current.location_name.as_deref(),
                current.country_code.as_deref(),
            ),
        };

        DisplayState::ready(location_line, &current, extremes, &upcoming, comment)
    }

    async fn resolve_place(&self, postal_code: Option<&str>) -> Option<ResolvedPlace> {
        let code = postal_code.map(str::trim).filter(|code| !code.is_empty())?;
        match self.geocoder.resolve(code, &self.country_code).await {
            Ok(place) => Some(place),
            Err(err) => {
                debug!(
                    "postal-code lookup failed, falling back to {}: {err}",
                    self.default_city
                );
                None
            }
        }
    }
}
