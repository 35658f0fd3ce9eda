//! Wire types for the Gemini `generateContent` request.

use crate::CompletionRequest;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

/// A single content turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Content {
    parts: Vec<Part>,
}

/// One text fragment of a content turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Part {
    text: String,
}

/// Sampling and output-format controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    temperature: f64,
    response_mime_type: String,
}

impl From<&CompletionRequest> for GenerateContentRequest {
    fn from(req: &CompletionRequest) -> Self {
        let parts = req
            .fragments()
            .iter()
            .map(|text| Part { text: text.clone() })
            .collect();

        Self {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                temperature: *req.temperature(),
                response_mime_type: "application/json".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let req = CompletionRequest::new(vec!["system".into(), "user".into()], 0.5);
        let body = serde_json::to_value(GenerateContentRequest::from(&req)).expect("serialize");

        assert_eq!(
            body,
            json!({
                "contents": [{ "parts": [{ "text": "system" }, { "text": "user" }] }],
                "generationConfig": {
                    "temperature": 0.5,
                    "responseMimeType": "application/json"
                }
            })
        );
    }
}
