//! Inbound generation request and its validation.

use crate::Freakyness;
use derive_getters::Getters;
use scrapwright_error::{GenerationError, GenerationErrorKind};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

/// One available offcut, passed to the model exactly as the caller sent it.
pub type ScrapwoodPiece = serde_json::Value;

/// A validated generation request.
///
/// Construct through [`GenerationRequest::from_slice`] or
/// [`GenerationRequest::new`]; both reject an empty prompt or inventory.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct GenerationRequest {
    /// Natural-language description of the object to build
    prompt: String,
    /// Ordered inventory of available pieces, never empty
    scrapwood: Vec<ScrapwoodPiece>,
    /// Resolved sampling temperature
    freakyness: Freakyness,
}

/// Wire shape before validation; every field may be missing.
#[derive(Debug, Deserialize)]
struct RawGenerationRequest {
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    scrapwood: Option<Vec<ScrapwoodPiece>>,
    #[serde(default)]
    freakyness: Option<f64>,
}

impl GenerationRequest {
    /// Build a request from already-extracted fields.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationErrorKind::BadRequest`] when `prompt` is empty or
    /// `scrapwood` has no pieces.
    #[track_caller]
    pub fn new(
        prompt: impl Into<String>,
        scrapwood: Vec<ScrapwoodPiece>,
        freakyness: Option<f64>,
    ) -> Result<Self, GenerationError> {
        let prompt = prompt.into();
        if prompt.is_empty() || scrapwood.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::BadRequest));
        }
        Ok(Self {
            prompt,
            scrapwood,
            freakyness: Freakyness::resolve(freakyness),
        })
    }

    /// Parse and validate a raw JSON request body.
    ///
    /// The body must be a JSON object. Malformed JSON, other top-level values
    /// and wrongly-typed fields are reported the same way as missing ones.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationErrorKind::BadRequest`] for any body that does not
    /// carry a non-empty `prompt` and a non-empty `scrapwood` array.
    #[instrument(skip_all, fields(body_len = body.len()))]
    pub fn from_slice(body: &[u8]) -> Result<Self, GenerationError> {
        // Struct deserialisation also accepts arrays by position, so insist on a map
        let object: Map<String, Value> = serde_json::from_slice(body).map_err(|e| {
            debug!(error = %e, "Request body is not a JSON object");
            GenerationError::new(GenerationErrorKind::BadRequest)
        })?;
        let raw = RawGenerationRequest::deserialize(Value::Object(object)).map_err(|e| {
            debug!(error = %e, "Request body did not match the expected shape");
            GenerationError::new(GenerationErrorKind::BadRequest)
        })?;

        match (raw.prompt, raw.scrapwood) {
            (Some(prompt), Some(scrapwood)) => Self::new(prompt, scrapwood, raw.freakyness),
            _ => Err(GenerationError::new(GenerationErrorKind::BadRequest)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> Result<GenerationRequest, GenerationError> {
        GenerationRequest::from_slice(body.to_string().as_bytes())
    }

    #[test]
    fn test_valid_request_defaults_freakyness() {
        let req = parse(json!({
            "prompt": "a simple stool",
            "scrapwood": [{ "width": 0.1, "height": 2, "depth": 0.05 }]
        }))
        .expect("valid request");

        assert_eq!(req.prompt(), "a simple stool");
        assert_eq!(req.scrapwood().len(), 1);
        assert_eq!(req.freakyness().value(), 0.5);
    }

    #[test]
    fn test_explicit_freakyness_is_kept() {
        let req = parse(json!({
            "prompt": "a bird house",
            "scrapwood": [{ "id": "a" }, { "id": "b" }],
            "freakyness": 1.2
        }))
        .expect("valid request");

        assert_eq!(req.freakyness().value(), 1.2);
    }

    #[test]
    fn test_null_freakyness_uses_default() {
        let req = parse(json!({
            "prompt": "a shelf",
            "scrapwood": [1],
            "freakyness": null
        }))
        .expect("valid request");

        assert_eq!(req.freakyness().value(), 0.5);
    }

    #[test]
    fn test_pieces_are_passed_through_verbatim() {
        let piece = json!({ "label": "oak", "nested": { "grain": [1, 2, 3] } });
        let req = parse(json!({ "prompt": "x", "scrapwood": [piece.clone()] }))
            .expect("valid request");

        assert_eq!(req.scrapwood()[0], piece);
    }

    #[test]
    fn test_rejects_missing_or_empty_fields() {
        let bodies = [
            json!({ "scrapwood": [{}] }),
            json!({ "prompt": "a stool" }),
            json!({ "prompt": "a stool", "scrapwood": [] }),
            json!({ "prompt": "", "scrapwood": [{}] }),
            json!({ "prompt": 42, "scrapwood": [{}] }),
            json!({ "prompt": "a stool", "scrapwood": "pine" }),
            json!({ "prompt": "a stool", "scrapwood": [{}], "freakyness": "very" }),
            json!(["not", "an", "object"]),
            json!(["a stool", [{ "width": 1 }]]),
            json!(["a stool", [{ "width": 1 }], 0.5]),
            json!("a stool"),
            json!(null),
        ];

        for body in bodies {
            let err = parse(body.clone()).expect_err("should be rejected");
            assert_eq!(err.kind, GenerationErrorKind::BadRequest, "body: {body}");
        }
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = GenerationRequest::from_slice(b"{ not json").expect_err("invalid json");
        assert_eq!(err.kind, GenerationErrorKind::BadRequest);

        let err = GenerationRequest::from_slice(b"").expect_err("empty body");
        assert_eq!(err.kind, GenerationErrorKind::BadRequest);
    }
}
