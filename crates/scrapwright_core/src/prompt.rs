//! Prompt fragments sent to the completion provider.

use crate::GenerationRequest;
use derive_getters::Getters;
use scrapwright_error::{GenerationError, GenerationErrorKind};

/// Fixed instruction describing the design task and the exact output schema.
pub const SYSTEM_INSTRUCTION: &str = r#"You are an expert furniture designer and woodworker. Your task is to design a 3D assembly of an object using ONLY the pieces of scrap wood provided in the user's inventory.

MATERIAL RULES:
- You work in a closed world. You may only use the pieces listed in the inventory.
- Never invent new pieces and never exceed the dimensions of an available piece.
- You do not have to use every piece.

CUTTING PROTOCOL:
- You may cut a piece to make it shorter, narrower or thinner.
- When you cut a piece, update the original part's "dimensions" and "origin" so they describe the remaining piece that is used in the design.
- For every cut, create a NEW part for the removed offcut. Its "id" must be derived from the original id (for example "plank-1-offcut-1") and it must carry "status": "discarded".
- The dimensions of a used part plus its discarded offcuts must add up to the original piece.

STYLE:
- Be creative. The result does not need to be symmetrical and may look unconventional, as long as it resembles the requested object.

OUTPUT FORMAT:
- Respond with raw JSON only. Do not wrap it in markdown, code fences or any explanatory text.
- The JSON must match this schema exactly:
{
  "objectName": "string",
  "parts": [
    {
      "id": "string, unique across all parts",
      "origin": { "x": number, "y": number, "z": number },
      "dimensions": { "width": number, "height": number, "depth": number },
      "connections": ["id of every part this part touches or is joined to"],
      "status": "discarded (optional, only for removed offcuts)"
    }
  ]
}

COORDINATE SYSTEM:
- All values are in meters.
- The ground is the X-Z plane at y = 0.
- +Y points up, +X points right, +Z points back.
- The origin (0, 0, 0) is the center of the object's base on the ground.
- "origin" is the center of the part; "width" runs along X, "height" along Y and "depth" along Z."#;

/// The ordered pair of text fragments for one request.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PromptFragments {
    /// Fixed task description, always [`SYSTEM_INSTRUCTION`]
    system: String,
    /// Per-request instruction embedding inventory and object description
    user: String,
}

impl PromptFragments {
    /// Build both fragments for a validated request.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationErrorKind::Unexpected`] if the inventory cannot be
    /// serialised.
    pub fn for_request(request: &GenerationRequest) -> Result<Self, GenerationError> {
        let inventory = serde_json::to_string_pretty(request.scrapwood()).map_err(|e| {
            GenerationError::new(GenerationErrorKind::Unexpected(format!(
                "Failed to serialize scrapwood inventory: {}",
                e
            )))
        })?;

        let user = format!(
            "Here is my inventory of available scrap wood pieces:\n{}\n\nDesign the following object using only these pieces: \"{}\"",
            inventory,
            request.prompt()
        );

        Ok(Self {
            system: SYSTEM_INSTRUCTION.to_string(),
            user,
        })
    }

    /// Fragments in the order the provider receives them.
    pub fn into_parts(self) -> Vec<String> {
        vec![self.system, self.user]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stool_request() -> GenerationRequest {
        GenerationRequest::new(
            "a simple stool",
            vec![json!({ "width": 0.1, "height": 2, "depth": 0.05 })],
            None,
        )
        .expect("valid request")
    }

    #[test]
    fn test_system_instruction_describes_contract() {
        for needle in [
            "ONLY the pieces",
            "Never invent new pieces",
            "\"status\": \"discarded\"",
            "raw JSON only",
            "\"objectName\"",
            "\"connections\"",
            "+Y points up",
            "center of the object's base",
        ] {
            assert!(SYSTEM_INSTRUCTION.contains(needle), "missing: {needle}");
        }
    }

    #[test]
    fn test_user_fragment_embeds_prompt_and_inventory() {
        let request = stool_request();
        let fragments = PromptFragments::for_request(&request).expect("fragments");

        assert!(fragments.user().contains("a simple stool"));
        let inventory = serde_json::to_string_pretty(request.scrapwood()).expect("serialize");
        assert!(fragments.user().contains(&inventory));
    }

    #[test]
    fn test_fragment_order_is_system_then_user() {
        let fragments = PromptFragments::for_request(&stool_request()).expect("fragments");
        let user = fragments.user().clone();
        let parts = fragments.into_parts();

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], SYSTEM_INSTRUCTION);
        assert_eq!(parts[1], user);
    }
}
