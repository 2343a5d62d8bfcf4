//! Gemini API translation service adapter

use async_trait::async_trait;
use base64::Engine;
use tracing::debug;

use crate::application::ports::{ServiceError, TranslationService};
use crate::domain::config::{
    DEFAULT_AUDIO_MODEL, DEFAULT_TEXT_MODEL, DEFAULT_TTS_MODEL, DEFAULT_VOICE,
};
use crate::domain::translation::{
    prompt, strip_data_uri_prefix, AudioData, SpeechAudio, SupportedLanguage,
};

use super::wire::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    PrebuiltVoiceConfig, SpeechConfig, SystemInstruction, VoiceConfig,
};

/// Gemini API base URL
pub const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Models and voice used by [`GeminiClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiModels {
    pub text: String,
    pub audio: String,
    pub tts: String,
    pub voice: String,
}

impl Default for GeminiModels {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT_MODEL.to_string(),
            audio: DEFAULT_AUDIO_MODEL.to_string(),
            tts: DEFAULT_TTS_MODEL.to_string(),
            voice: DEFAULT_VOICE.to_string(),
        }
    }
}

/// Gemini REST client
pub struct GeminiClient {
    api_key: String,
    models: GeminiModels,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a client with the default models
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_models(api_key, GeminiModels::default())
    }

    pub fn with_models(api_key: impl Into<String>, models: GeminiModels) -> Self {
        Self {
            api_key: api_key.into(),
            models,
            base_url: API_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Point the client at another endpoint root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn models(&self) -> &GeminiModels {
        &self.models
    }

    /// Build the API URL for a model
    fn api_url(&self, model: &str) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        )
    }

    fn json_config() -> GenerationConfig {
        GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(prompt::response_schema()),
            ..Default::default()
        }
    }

    fn system_instruction() -> SystemInstruction {
        SystemInstruction {
            parts: vec![Part::text(prompt::system_instruction())],
        }
    }

    fn build_text_request(text: &str, target: SupportedLanguage) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part::text(prompt::text_request(text, target))],
            }],
            system_instruction: Some(Self::system_instruction()),
            generation_config: Some(Self::json_config()),
        }
    }

    fn build_audio_request(audio: &AudioData, target: SupportedLanguage) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part::inline(audio.mime_type(), audio.to_base64()),
                    Part::text(prompt::audio_request(target)),
                ],
            }],
            system_instruction: Some(Self::system_instruction()),
            generation_config: Some(Self::json_config()),
        }
    }

    fn build_speech_request(&self, text: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part::text(text)],
            }],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["AUDIO".to_string()]),
                speech_config: Some(SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: self.models.voice.clone(),
                        },
                    },
                }),
                ..Default::default()
            }),
        }
    }

    /// POST one request and return the parsed envelope
    async fn send(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ServiceError> {
        debug!(model, "POST generateContent");

        let response = self
            .client
            .post(self.api_url(model))
            .json(body)
            .send()
            .await
            .map_err(|e| ServiceError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(ServiceError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ServiceError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ServiceError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::ParseError(e.to_string()))?;

        if let Some(error) = response.error {
            return Err(ServiceError::ApiError(error.message));
        }

        Ok(response)
    }

    async fn generate_json(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<String, ServiceError> {
        self.send(model, body)
            .await?
            .text()
            .ok_or(ServiceError::EmptyResponse)
    }
}

#[async_trait]
impl TranslationService for GeminiClient {
    async fn analyze_text(
        &self,
        text: &str,
        target: SupportedLanguage,
    ) -> Result<String, ServiceError> {
        let body = Self::build_text_request(text, target);
        self.generate_json(&self.models.text, &body).await
    }

    async fn analyze_audio(
        &self,
        audio: &AudioData,
        target: SupportedLanguage,
    ) -> Result<String, ServiceError> {
        let body = Self::build_audio_request(audio, target);
        self.generate_json(&self.models.audio, &body).await
    }

    async fn synthesize_speech(&self, text: &str) -> Result<Option<SpeechAudio>, ServiceError> {
        let body = self.build_speech_request(text);
        let response = self.send(&self.models.tts, &body).await?;

        let Some(inline) = response.inline_data() else {
            return Ok(None);
        };

        let data = base64::engine::general_purpose::STANDARD
            .decode(strip_data_uri_prefix(inline.data.trim()))
            .map_err(|e| ServiceError::ParseError(format!("invalid audio payload: {}", e)))?;

        Ok(Some(SpeechAudio::new(data, inline.mime_type.clone())))
    }
}
