use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::display::FALLBACK_COMMENT;
use crate::domain::weather::UNSET_DESCRIPTION;

use super::FetchError;

const COMMENT_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Character budget for the companion line, continuation marker included.
const COMMENT_BUDGET: usize = 70;
const TRUNCATION_MARKER: &str = "...";

/// Client for the text-generation service that produces the companion line.
#[derive(Debug, Clone)]
pub struct CommentClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    prompt_template: String,
}

impl CommentClient {
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(COMMENT_URL, config)
    }

    pub fn with_base_url(base_url: impl Into<String>, config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: config.comment_api_key.clone(),
            model: config.comment_model.clone(),
            prompt_template: config.prompt_template.clone(),
        }
    }

    /// Produce the companion line for the given conditions.
    ///
    /// Total function: every failure path lands on the fixed fallback, the
    /// result is never empty and never exceeds the 70-character budget.
    pub async fn generate(&self, description: &str, temperature: f64) -> String {
        if description.trim().is_empty() || description == UNSET_DESCRIPTION {
            return FALLBACK_COMMENT.to_string();
        }
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("no comment API key configured, using the fallback line");
            return FALLBACK_COMMENT.to_string();
        };

        match self.request_comment(api_key, description, temperature).await {
            Ok(text) if !text.trim().is_empty() => clamp_comment(&text),
            Ok(_) => {
                debug!("comment service returned empty text");
                FALLBACK_COMMENT.to_string()
            }
            Err(err) => {
                warn!("comment generation failed: {err}");
                FALLBACK_COMMENT.to_string()
            }
        }
    }

    async fn request_comment(
        &self,
        api_key: &str,
        description: &str,
        temperature: f64,
    ) -> Result<String, FetchError> {
        let prompt = render_prompt(&self.prompt_template, description, temperature);
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let payload: GenerateResponse = response.json().await.map_err(FetchError::Decode)?;
        payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or(FetchError::Incomplete)
    }
}

/// Substitute the conditions into the configured prompt template.
pub fn render_prompt(template: &str, description: &str, temperature: f64) -> String {
    template
        .replace("{weather_description}", description)
        .replace("{temperature}", &format!("{temperature:.1}"))
}

/// Clamp to the budget: 67 kept characters plus the marker. Characters, not
/// bytes, so multi-byte text truncates cleanly.
fn clamp_comment(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= COMMENT_BUDGET {
        return trimmed.to_string();
    }
    let kept: String = trimmed
        .chars()
        .take(COMMENT_BUDGET - TRUNCATION_MARKER.chars().count())
        .collect();
    format!("{kept}{TRUNCATION_MARKER}")
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
