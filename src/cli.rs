use clap::Parser;

use crate::domain::forecast::SelectionWindow;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "skycast",
    version,
    about = "Terminal weather companion with an hourly outlook and AI flavor comments"
)]
pub struct Cli {
    /// City used when no postal code is given or resolution fails (default: Tokyo)
    pub city: Option<String>,

    /// Postal code to resolve into coordinates; separators are allowed
    #[arg(long)]
    pub postal_code: Option<String>,

    /// Country code for postal-code resolution (ISO2)
    #[arg(long, default_value = "JP")]
    pub country_code: String,

    /// Refresh interval in seconds
    #[arg(long, default_value_t = 3600)]
    pub refresh_interval: u64,

    /// Look-ahead horizon for the hourly tiles, in hours
    #[arg(long, default_value_t = 9.0)]
    pub horizon_hours: f64,

    /// Maximum number of hourly tiles
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=8))]
    pub hourly_tiles: u8,

    /// Print one weather snapshot to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// Weather API base URL override
    #[arg(long)]
    pub weather_url: Option<String>,

    /// Geocoding API base URL override
    #[arg(long)]
    pub geocode_url: Option<String>,

    /// Comment API base URL override
    #[arg(long)]
    pub comment_url: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn default_city(&self) -> String {
        self.city.clone().unwrap_or_else(|| "Tokyo".to_string())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.horizon_hours.is_finite() || self.horizon_hours < 0.0 {
            anyhow::bail!("--horizon-hours must be a non-negative number");
        }
        Ok(())
    }

    #[must_use]
    pub fn window(&self) -> SelectionWindow {
        SelectionWindow {
            horizon_hours: self.horizon_hours,
            max_results: usize::from(self.hourly_tiles),
        }
    }
}
