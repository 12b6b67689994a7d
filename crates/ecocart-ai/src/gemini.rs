//! Gemini HTTP client for product analysis.
//!
//! Speaks the generateContent REST wire format: text parts plus optional
//! inline base64 image data for vision requests.

use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::AiConfig;
use crate::error::{classify_provider_error, AiError, AiResult};
use crate::prompt;

/// Gemini analysis client.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ProviderError>,
}

#[derive(Deserialize)]
struct ProviderError {
    #[serde(default)]
    message: String,
}

impl GeminiClient {
    /// Build a client from injected configuration.
    pub fn new(config: &AiConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Whether a credential was configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Model identifier used for requests.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Produce a sustainability analysis for a product.
    ///
    /// When an image URL is given, the image is fetched and sent inline
    /// for vision analysis; any failure on that path falls back to the
    /// text-only prompt instead of surfacing an error.
    pub async fn analyze_product(
        &self,
        product_name: &str,
        image_url: Option<&str>,
    ) -> AiResult<String> {
        if let Some(url) = image_url {
            match self.analyze_with_image(product_name, url).await {
                Ok(analysis) => return Ok(analysis),
                Err(err) => {
                    warn!(%url, error = %err, "image analysis failed, falling back to text-only");
                }
            }
        }

        self.generate(vec![Part::Text {
            text: prompt::text_only_prompt(product_name),
        }])
        .await
    }

    /// Probe the service with a fixed prompt; returns the model's reply.
    pub async fn connection_test(&self) -> AiResult<String> {
        self.generate(vec![Part::Text {
            text: prompt::TEST_PROMPT.to_string(),
        }])
        .await
    }

    async fn analyze_with_image(&self, product_name: &str, url: &str) -> AiResult<String> {
        let (mime_type, data) = self.fetch_image(url).await?;
        self.generate(vec![
            Part::Text {
                text: prompt::vision_prompt(product_name),
            },
            Part::InlineData {
                inline_data: InlineData { mime_type, data },
            },
        ])
        .await
    }

    /// Call generateContent and extract the first candidate's text.
    async fn generate(&self, parts: Vec<Part>) -> AiResult<String> {
        let api_key = self.api_key.as_deref().ok_or(AiError::MissingApiKey)?;

        let request = GenerateRequest {
            contents: vec![Content { parts }],
        };

        let response = self
            .http
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.error)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(classify_provider_error(status.as_u16(), &message));
        }

        let result: GenerateResponse = response.json().await?;

        let text = result
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|text| !text.is_empty())
            .ok_or(AiError::EmptyResponse)?;

        debug!(chars = text.len(), "received analysis text");

        Ok(text)
    }

    /// Fetch an image and base64-encode it for inline transport.
    async fn fetch_image(&self, url: &str) -> AiResult<(String, String)> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AiError::Provider {
                status: status.as_u16(),
                message: format!("image fetch failed for {url}"),
            });
        }

        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("image/png")
            .to_string();
        let bytes = response.bytes().await?;
        let data = base64::engine::general_purpose::STANDARD.encode(&bytes);

        Ok((mime_type, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: "describe this".to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/png".to_string(),
                            data: "aGVsbG8=".to_string(),
                        },
                    },
                ],
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        let parts = &json["contents"][0]["parts"];

        assert_eq!(parts[0]["text"], "describe this");
        assert_eq!(parts[1]["inline_data"]["mime_type"], "image/png");
        assert_eq!(parts[1]["inline_data"]["data"], "aGVsbG8=");
    }

    #[test]
    fn test_response_text_extraction() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Part one. "}, {"text": "Part two."}]}}
            ]
        }"#;

        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap();

        assert_eq!(text, "Part one. Part two.");
    }

    #[test]
    fn test_error_envelope_parsing() {
        let raw = r#"{"error": {"code": 429, "message": "quota exhausted", "status": "RESOURCE_EXHAUSTED"}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(raw).unwrap();

        assert_eq!(envelope.error.unwrap().message, "quota exhausted");
    }

    #[test]
    fn test_client_without_key_is_unconfigured() {
        let client = GeminiClient::new(&AiConfig::default());
        assert!(!client.is_configured());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = AiConfig {
            base_url: "http://localhost:9090/".to_string(),
            ..AiConfig::default()
        };
        let client = GeminiClient::new(&config);

        assert_eq!(client.base_url, "http://localhost:9090");
    }
}
