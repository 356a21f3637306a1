use std::env;

use anyhow::{Context, Result};

pub const DEFAULT_COMMENT_MODEL: &str = "gemini-1.5-flash";

/// Prompt sent to the comment service. `{weather_description}` and
/// `{temperature}` are substituted before the request.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "You are a cheerful weather companion. \
The sky is {weather_description} and it is {temperature} degrees Celsius outside. \
Reply with one upbeat sentence of advice for the day, at most 70 characters, no quotes.";

/// Credentials and comment settings, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub weather_api_key: String,
    /// Absent key disables generation; the fixed fallback comment is shown.
    pub comment_api_key: Option<String>,
    pub comment_model: String,
    pub prompt_template: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let weather_api_key = env::var("OPENWEATHER_API_KEY")
            .context("OPENWEATHER_API_KEY is not set")?;
        let comment_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let comment_model =
            env::var("SKYCAST_COMMENT_MODEL").unwrap_or_else(|_| DEFAULT_COMMENT_MODEL.to_string());
        let prompt_template =
            env::var("SKYCAST_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT_TEMPLATE.to_string());

        Ok(Self {
            weather_api_key,
            comment_api_key,
            comment_model,
            prompt_template,
        })
    }
}
