//! Gemini Provider - Implementation of GuidanceProvider for Google's
//! Gemini API.
//!
//! Both requests use constrained JSON generation (`responseMimeType` +
//! `responseSchema`), so the model replies with a machine-readable payload.
//! The payload is still untrusted: it is parsed into strict wire DTOs and
//! converted to domain types with validation, and anything that does not
//! fit the schema is rejected whole.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_suggestion_model("gemini-3-flash-preview")
//!     .with_guidance_model("gemini-3-pro-preview");
//!
//! let provider = GeminiProvider::new(config);
//! ```

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::domain::foundation::{Age, BilingualList, BilingualText, ConfidenceScore};
use crate::domain::guidance::{DosageTable, MedicationGuidance, SymptomSuggestion};
use crate::ports::{GuidanceProvider, ProviderError};

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model used for symptom suggestion (Request A).
    pub suggestion_model: String,
    /// Model used for medication guidance (Request B).
    pub guidance_model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            suggestion_model: "gemini-3-flash-preview".to_string(),
            guidance_model: "gemini-3-pro-preview".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the suggestion model.
    pub fn with_suggestion_model(mut self, model: impl Into<String>) -> Self {
        self.suggestion_model = model.into();
        self
    }

    /// Sets the guidance model.
    pub fn with_guidance_model(mut self, model: impl Into<String>) -> Self {
        self.guidance_model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds provider configuration from the app-level guidance config.
    ///
    /// `AppConfig::validate()` is expected to have run, so a missing key
    /// becomes an empty secret and the API will reject it.
    pub fn from_app_config(config: &crate::config::GuidanceConfig) -> Self {
        Self::new(config.api_key.clone().unwrap_or_default())
            .with_suggestion_model(&config.suggestion_model)
            .with_guidance_model(&config.guidance_model)
            .with_base_url(&config.base_url)
            .with_timeout(config.timeout())
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// JSON schema constraining the suggestion response.
static SUGGESTION_SCHEMA: Lazy<serde_json::Value> = Lazy::new(|| {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "labelEn": { "type": "STRING" },
                "labelTa": { "type": "STRING" },
            },
            "required": ["id", "labelEn", "labelTa"],
        },
    })
});

/// JSON schema constraining the guidance response.
static GUIDANCE_SCHEMA: Lazy<serde_json::Value> = Lazy::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "possibleConditionEn": { "type": "STRING" },
            "possibleConditionTa": { "type": "STRING" },
            "medicineEn": { "type": "STRING" },
            "medicineTa": { "type": "STRING" },
            "dosageInfo": {
                "type": "OBJECT",
                "properties": {
                    "infant": { "type": "STRING" },
                    "child": { "type": "STRING" },
                    "adult": { "type": "STRING" },
                    "elderly": { "type": "STRING" },
                },
            },
            "timingEn": { "type": "STRING" },
            "timingTa": { "type": "STRING" },
            "durationEn": { "type": "STRING" },
            "durationTa": { "type": "STRING" },
            "confidenceScore": { "type": "NUMBER" },
            "precautionsEn": { "type": "ARRAY", "items": { "type": "STRING" } },
            "precautionsTa": { "type": "ARRAY", "items": { "type": "STRING" } },
        },
        "required": [
            "possibleConditionEn", "possibleConditionTa",
            "medicineEn", "medicineTa", "dosageInfo",
            "timingEn", "timingTa", "durationEn",
            "durationTa", "confidenceScore",
            "precautionsEn", "precautionsTa",
        ],
    })
});

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the generateContent endpoint URL for a model.
    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, model
        )
    }

    fn suggestion_prompt(text: &str) -> String {
        format!(
            "Based on these symptoms: \"{}\", suggest 5-8 more specific related symptoms \
             to help narrow down the condition. Provide them in English and Tamil.",
            text
        )
    }

    fn guidance_prompt(symptoms: &[String], age: Option<Age>) -> String {
        let age_str = match age {
            Some(age) => format!("{} years old", age.years()),
            None => "unspecified age".to_string(),
        };
        format!(
            "User symptoms: {}. User age: {}. \
             Provide precautionary healthcare guidance. \
             Rules: \
             1. Do not give a final medical diagnosis. \
             2. Suggest over-the-counter (OTC) or standard first-aid remedies. \
             3. Include dosage for infants (0-2), children (3-12), adults (13-64), and elderly (65+) \
             if age is not specified. If age IS specified, prioritize that group but still mention \
             others for context. \
             4. Provide content in both English and Tamil. \
             5. Include a confidence score (0-100) based on how common the symptom/medicine \
             pairing is.",
            symptoms.join(", "),
            age_str
        )
    }

    /// Sends a constrained-JSON generateContent request.
    async fn send_request(
        &self,
        model: &str,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<Response, ProviderError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            },
        };

        self.client
            .post(self.generate_url(model))
            .header("x-goog-api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    ProviderError::network(format!("Connection failed: {}", e))
                } else {
                    ProviderError::network(e.to_string())
                }
            })
    }

    /// Maps non-success statuses to provider errors.
    async fn handle_response_status(response: Response) -> Result<Response, ProviderError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(ProviderError::AuthenticationFailed),
            code => Err(ProviderError::http(code, error_body)),
        }
    }

    /// Extracts the generated JSON text from a generateContent response.
    async fn extract_payload(response: Response) -> Result<String, ProviderError> {
        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::invalid_response(e.to_string()))?;

        let candidate = body
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::invalid_response("no candidates in response"))?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect();

        if text.trim().is_empty() {
            return Err(ProviderError::invalid_response("empty candidate text"));
        }

        Ok(text)
    }

    /// Parses and validates a suggestion payload.
    fn parse_suggestions(payload: &str) -> Result<Vec<SymptomSuggestion>, ProviderError> {
        let dtos: Vec<SuggestionDto> = serde_json::from_str(payload.trim())
            .map_err(|e| ProviderError::invalid_response(e.to_string()))?;

        if dtos.is_empty() {
            return Err(ProviderError::invalid_response("empty suggestion list"));
        }

        Ok(dtos.into_iter().map(SuggestionDto::into_domain).collect())
    }

    /// Parses and validates a guidance payload.
    fn parse_guidance(payload: &str) -> Result<MedicationGuidance, ProviderError> {
        let dto: GuidanceDto = serde_json::from_str(payload.trim())
            .map_err(|e| ProviderError::invalid_response(e.to_string()))?;

        dto.into_domain()
    }
}

#[async_trait]
impl GuidanceProvider for GeminiProvider {
    async fn suggest_symptoms(
        &self,
        text: &str,
    ) -> Result<Vec<SymptomSuggestion>, ProviderError> {
        tracing::debug!(model = %self.config.suggestion_model, "requesting symptom suggestions");

        let response = self
            .send_request(
                &self.config.suggestion_model,
                Self::suggestion_prompt(text),
                SUGGESTION_SCHEMA.clone(),
            )
            .await?;
        let response = Self::handle_response_status(response).await?;
        let payload = Self::extract_payload(response).await?;

        Self::parse_suggestions(&payload).map_err(|e| {
            tracing::warn!(error = %e, "suggestion response failed validation");
            e
        })
    }

    async fn medication_guidance(
        &self,
        symptoms: &[String],
        age: Option<Age>,
    ) -> Result<MedicationGuidance, ProviderError> {
        tracing::debug!(
            model = %self.config.guidance_model,
            symptom_count = symptoms.len(),
            "requesting medication guidance"
        );

        let response = self
            .send_request(
                &self.config.guidance_model,
                Self::guidance_prompt(symptoms, age),
                GUIDANCE_SCHEMA.clone(),
            )
            .await?;
        let response = Self::handle_response_status(response).await?;
        let payload = Self::extract_payload(response).await?;

        Self::parse_guidance(&payload).map_err(|e| {
            tracing::warn!(error = %e, "guidance response failed validation");
            e
        })
    }
}

// --- Wire DTOs ---

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// One suggestion as generated by the model.
#[derive(Debug, Deserialize)]
struct SuggestionDto {
    id: String,
    #[serde(rename = "labelEn")]
    label_en: String,
    #[serde(rename = "labelTa")]
    label_ta: String,
}

impl SuggestionDto {
    fn into_domain(self) -> SymptomSuggestion {
        SymptomSuggestion::new(self.id, BilingualText::new(self.label_en, self.label_ta))
    }
}

/// The guidance record as generated by the model.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GuidanceDto {
    possible_condition_en: String,
    possible_condition_ta: String,
    medicine_en: String,
    medicine_ta: String,
    dosage_info: DosageDto,
    timing_en: String,
    timing_ta: String,
    duration_en: String,
    duration_ta: String,
    confidence_score: f64,
    precautions_en: Vec<String>,
    precautions_ta: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DosageDto {
    infant: Option<String>,
    child: Option<String>,
    adult: Option<String>,
    elderly: Option<String>,
}

impl GuidanceDto {
    fn into_domain(self) -> Result<MedicationGuidance, ProviderError> {
        if !self.confidence_score.is_finite()
            || !(0.0..=100.0).contains(&self.confidence_score)
        {
            return Err(ProviderError::invalid_response(format!(
                "confidence score {} outside [0,100]",
                self.confidence_score
            )));
        }
        let confidence = ConfidenceScore::new(self.confidence_score.round() as u8);

        Ok(MedicationGuidance {
            possible_condition: BilingualText::new(
                self.possible_condition_en,
                self.possible_condition_ta,
            ),
            medicine: BilingualText::new(self.medicine_en, self.medicine_ta),
            dosage: DosageTable {
                infant: self.dosage_info.infant,
                child: self.dosage_info.child,
                adult: self.dosage_info.adult,
                elderly: self.dosage_info.elderly,
            },
            timing: BilingualText::new(self.timing_en, self.timing_ta),
            duration: BilingualText::new(self.duration_en, self.duration_ta),
            confidence,
            precautions: BilingualList::new(self.precautions_en, self.precautions_ta),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AgeGroup, Language};

    #[test]
    fn suggestion_prompt_embeds_the_text() {
        let prompt = GeminiProvider::suggestion_prompt("fever and headache");
        assert!(prompt.contains("\"fever and headache\""));
        assert!(prompt.contains("5-8"));
        assert!(prompt.contains("English and Tamil"));
    }

    #[test]
    fn guidance_prompt_mentions_age_when_given() {
        let symptoms = vec!["fever".to_string(), "chills".to_string()];
        let prompt =
            GeminiProvider::guidance_prompt(&symptoms, Some(Age::try_new(5).unwrap()));
        assert!(prompt.contains("fever, chills"));
        assert!(prompt.contains("5 years old"));
    }

    #[test]
    fn guidance_prompt_handles_unspecified_age() {
        let symptoms = vec!["fever".to_string()];
        let prompt = GeminiProvider::guidance_prompt(&symptoms, None);
        assert!(prompt.contains("unspecified age"));
    }

    #[test]
    fn parse_suggestions_accepts_well_formed_payload() {
        let payload = r#"[
            {"id": "s1", "labelEn": "High fever", "labelTa": "அதிக காய்ச்சல்"},
            {"id": "s2", "labelEn": "Chills", "labelTa": "குளிர்"}
        ]"#;
        let suggestions = GeminiProvider::parse_suggestions(payload).unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].id, "s1");
        assert_eq!(suggestions[0].label.localized(Language::En), "High fever");
        assert_eq!(suggestions[1].label.localized(Language::Ta), "குளிர்");
    }

    #[test]
    fn parse_suggestions_rejects_missing_fields() {
        let payload = r#"[{"id": "s1", "labelEn": "High fever"}]"#;
        let err = GeminiProvider::parse_suggestions(payload).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }

    #[test]
    fn parse_suggestions_rejects_empty_list() {
        let err = GeminiProvider::parse_suggestions("[]").unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }

    #[test]
    fn parse_suggestions_rejects_non_json() {
        let err = GeminiProvider::parse_suggestions("I'm sorry, I can't do that").unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }

    fn guidance_payload(confidence: &str) -> String {
        format!(
            r#"{{
                "possibleConditionEn": "Common cold", "possibleConditionTa": "சளி",
                "medicineEn": "Paracetamol", "medicineTa": "பாராசிட்டமால்",
                "dosageInfo": {{"infant": "", "child": "5ml twice daily", "adult": "500mg"}},
                "timingEn": "After food", "timingTa": "உணவுக்குப் பிறகு",
                "durationEn": "3 days", "durationTa": "3 நாட்கள்",
                "confidenceScore": {},
                "precautionsEn": ["Stay hydrated"], "precautionsTa": ["நீரேற்றமாக இருங்கள்"]
            }}"#,
            confidence
        )
    }

    #[test]
    fn parse_guidance_accepts_well_formed_payload() {
        let guidance = GeminiProvider::parse_guidance(&guidance_payload("72")).unwrap();
        assert_eq!(guidance.medicine.localized(Language::En), "Paracetamol");
        assert_eq!(guidance.confidence.value(), 72);
        // Empty string kept distinct from the absent elderly key.
        assert_eq!(guidance.dosage.for_group(AgeGroup::Infant), Some(""));
        assert_eq!(guidance.dosage.for_group(AgeGroup::Elderly), None);
        assert_eq!(
            guidance.dosage.for_group(AgeGroup::Child),
            Some("5ml twice daily")
        );
    }

    #[test]
    fn parse_guidance_rounds_fractional_confidence() {
        let guidance = GeminiProvider::parse_guidance(&guidance_payload("71.6")).unwrap();
        assert_eq!(guidance.confidence.value(), 72);
    }

    #[test]
    fn parse_guidance_rejects_out_of_range_confidence() {
        let err = GeminiProvider::parse_guidance(&guidance_payload("140")).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }

    #[test]
    fn parse_guidance_rejects_missing_bilingual_field() {
        let payload = r#"{"possibleConditionEn": "Common cold"}"#;
        let err = GeminiProvider::parse_guidance(payload).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }

    #[test]
    fn schemas_require_every_mandatory_field() {
        let suggestion_required = SUGGESTION_SCHEMA["items"]["required"].as_array().unwrap();
        assert_eq!(suggestion_required.len(), 3);

        let guidance_required = GUIDANCE_SCHEMA["required"].as_array().unwrap();
        assert_eq!(guidance_required.len(), 12);
        assert!(guidance_required.iter().any(|v| v == "confidenceScore"));
        assert!(guidance_required.iter().any(|v| v == "dosageInfo"));
    }

    #[test]
    fn generate_url_targets_the_model() {
        let provider = GeminiProvider::new(GeminiConfig::new("test-key"));
        assert_eq!(
            provider.generate_url("gemini-3-flash-preview"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn config_builder_overrides_defaults() {
        let config = GeminiConfig::new("test-key")
            .with_suggestion_model("model-a")
            .with_guidance_model("model-b")
            .with_base_url("http://localhost:8080")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.suggestion_model, "model-a");
        assert_eq!(config.guidance_model, "model-b");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
