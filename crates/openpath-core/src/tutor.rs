//! Client for the external tutoring assistant.
//!
//! Thin wrapper over a Gemini-style `generateContent` endpoint. The
//! tutor has zero influence on gating, streaks or completion state:
//! every failure (missing credential, transport, bad payload) degrades
//! into a user-visible fallback string instead of an error.

use serde_json::{json, Value};

use crate::error::TutorError;
use crate::storage::TutorConfig;

const API_KEY_ENV: &str = "OPENPATH_TUTOR_API_KEY";

pub struct TutorClient {
    base_url: String,
    model: String,
    api_key: Option<String>,
    http: reqwest::Client,
}

impl TutorClient {
    /// Build a client from config, falling back to the
    /// OPENPATH_TUTOR_API_KEY environment variable for the credential.
    pub fn new(config: &TutorConfig) -> Self {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok());
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            http: reqwest::Client::new(),
        }
    }

    /// Ask the tutor a question in the context of the displayed day.
    /// Never fails; the caller gets either the model's answer or a
    /// fallback string it can show as-is.
    pub async fn ask(&self, topic: &str, phase: &str, message: &str) -> String {
        match self.request(topic, phase, message).await {
            Ok(text) => text,
            Err(TutorError::MissingCredential) => format!(
                "The tutor is not configured. Set tutor.api_key in config.toml \
                 or export {API_KEY_ENV}."
            ),
            Err(_) => {
                "Error connecting to the AI tutor. Please check your API key.".to_string()
            }
        }
    }

    async fn request(&self, topic: &str, phase: &str, message: &str) -> Result<String, TutorError> {
        let api_key = self.api_key.as_deref().ok_or(TutorError::MissingCredential)?;
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = json!({
            "system_instruction": {
                "parts": [{ "text": system_instruction(topic, phase) }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": message }]
            }]
        });

        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: Value = response.json().await?;
        payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| TutorError::BadResponse("no candidate text in payload".to_string()))
    }
}

/// The "guided autonomy" mentoring instruction, parameterized by the
/// student's current topic and phase.
fn system_instruction(topic: &str, phase: &str) -> String {
    format!(
        "You are a Mentor for OpenPath, a zero-cost LMS for underprivileged \
         engineering students.\n\n\
         Current Student Context:\n\
         - Topic: {topic}\n\
         - Phase: {phase}\n\n\
         Philosophy: \"Guided Autonomy\".\n\
         - Do NOT give the full code solution immediately.\n\
         - Explain the \"Why\" and \"How\".\n\
         - If they are stuck on a bug, ask for the error message or code snippet.\n\
         - Be encouraging but rigorous.\n\
         - Keep responses concise (under 200 words) to avoid \"Tutorial Hell\".\n\n\
         If the user asks about something unrelated to tech, politely steer \
         them back to {topic}."
    )
}
