//! Google Gemini extraction adapter
//!
//! Implements the ExtractionPort against Gemini's generateContent API.
//! One request per transcript; the response must be schema-conforming JSON
//! or the call fails — there is no repair or retry loop.

use crate::domain::models::MeetingMinutes;
use crate::domain::prompts::PromptTemplates;
use crate::error::{AppError, Result};
use crate::ports::llm::ExtractionPort;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const GOOGLE_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

// Extraction wants determinism; the payload is small.
const TEMPERATURE: f32 = 0.0;
const MAX_OUTPUT_TOKENS: u32 = 1000;

/// Gemini extraction service implementation
pub struct GeminiExtractor {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: String,
}

impl GeminiExtractor {
    /// Create a new Gemini extractor with the given API key and model
    pub fn new(api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl ExtractionPort for GeminiExtractor {
    async fn extract_minutes(&self, transcript: &str) -> Result<MeetingMinutes> {
        let prompt = PromptTemplates::minutes().replace("{transcript}", transcript);

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        log::info!("Calling Gemini generateContent with model: {}", self.model);

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                GOOGLE_API_BASE, self.model
            ))
            .query(&[("key", &self.api_key)])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::ExtractionNetwork(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExtractionAuth(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExtractionNetwork(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let content_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExtractionFormat(format!("unparseable response: {}", e)))?;

        let generated: String = content_response
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if generated.is_empty() {
            return Err(AppError::ExtractionFormat(
                "no text in model response".to_string(),
            ));
        }

        let minutes = parse_minutes(&generated)?;
        log::info!(
            "Extraction successful: {} participant(s), {} action item(s), {} decision(s)",
            minutes.participants.len(),
            minutes.action_items.len(),
            minutes.decisions.len()
        );

        Ok(minutes)
    }

    fn provider_name(&self) -> &str {
        "google"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Parse the model's generated text into minutes.
///
/// Tolerates a Markdown code fence around the JSON; anything that does not
/// deserialize into the minutes schema is a format error.
fn parse_minutes(generated: &str) -> Result<MeetingMinutes> {
    let body = strip_code_fence(generated);
    serde_json::from_str(body).map_err(|e| AppError::ExtractionFormat(e.to_string()))
}

fn strip_code_fence(s: &str) -> &str {
    let s = s.trim();
    if let Some(rest) = s.strip_prefix("```") {
        let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest);
        return rest
            .rsplit_once("```")
            .map(|(body, _)| body)
            .unwrap_or(rest)
            .trim();
    }
    s
}
