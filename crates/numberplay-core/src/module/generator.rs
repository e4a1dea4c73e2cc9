//! Turning generator responses into modules.
//!
//! The external generation service receives a free-text prompt and returns
//! a text blob that should contain one JSON object, possibly inside a
//! markdown code fence. Everything here is pure string work; the network
//! call itself is the caller's business.

use uuid::Uuid;

use super::{validate, LearningModule};
use crate::error::ModuleError;

/// Parse a generator response into a validated module.
///
/// The JSON payload is looked for in a ```` ```json ```` fence first, then
/// any fence, then the raw text. A fresh id is assigned and the incoming
/// description is kept aside for later re-editing.
///
/// # Errors
/// Returns a descriptive error if no JSON parses or validation fails; no
/// partial module is produced.
pub fn parse_response(response: &str) -> Result<LearningModule, ModuleError> {
    let payload = extract_json(response);
    let mut module: LearningModule =
        serde_json::from_str(payload).map_err(|e| ModuleError::ParseFailed(e.to_string()))?;

    module.id = Uuid::new_v4().to_string();
    module.original_description = Some(module.description.clone());

    validate(&module)?;
    Ok(module)
}

/// Build the prompt sent to the generation service.
pub fn build_prompt(kind: &str, difficulty: &str, description: &str) -> String {
    format!(
        r#"
Create a math learning module for children with the following specifications:
- Type: {kind}
- Difficulty: {difficulty}
- Description: {description}

Your response should be structured as a valid JSON object with the following format:
{{
  "title": "Module title",
  "type": "The module type",
  "difficulty": "The difficulty level",
  "description": "A short description of what this module teaches",
  "instructions": "Instructions for the student",
  "problems": [
    {{
      "question": "The problem question text",
      "answer": "The correct answer or answer logic",
      "hints": ["Optional hint 1", "Optional hint 2"],
      "explanation": "Explanation of the answer"
    }}
  ],
  "visualAids": {{}}
}}

Include 5-10 problems. Ensure your response contains only valid JSON.
"#
    )
}

fn extract_json(response: &str) -> &str {
    if let Some(inner) = fenced(response, "```json") {
        return inner;
    }
    if let Some(inner) = fenced(response, "```") {
        return inner;
    }
    response.trim()
}

fn fenced<'a>(text: &'a str, opener: &str) -> Option<&'a str> {
    let start = text.find(opener)? + opener.len();
    let rest = &text[start..];
    let end = rest.find("```")?;
    Some(rest[..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODULE_JSON: &str = r#"{
        "title": "Rounding Safari",
        "type": "rounding",
        "difficulty": "medium",
        "description": "Round animal counts",
        "instructions": "Round each number",
        "problems": [
            {"question": "Round 47 to the nearest ten", "answer": 50},
            {"question": "Round 123 to the nearest hundred", "answer": "100",
             "hints": ["Look at the tens digit"], "explanation": "2 rounds down"}
        ]
    }"#;

    #[test]
    fn parses_json_fenced_response() {
        let response = format!("Here is your module!\n```json\n{MODULE_JSON}\n```\nEnjoy!");
        let module = parse_response(&response).unwrap();
        assert_eq!(module.title, "Rounding Safari");
        assert_eq!(module.problems.len(), 2);
        assert!(!module.id.is_empty());
        assert_eq!(
            module.original_description.as_deref(),
            Some("Round animal counts")
        );
    }

    #[test]
    fn parses_bare_fenced_response() {
        let response = format!("```\n{MODULE_JSON}\n```");
        assert!(parse_response(&response).is_ok());
    }

    #[test]
    fn parses_unfenced_response() {
        assert!(parse_response(MODULE_JSON).is_ok());
    }

    #[test]
    fn each_parse_assigns_a_fresh_id() {
        let a = parse_response(MODULE_JSON).unwrap();
        let b = parse_response(MODULE_JSON).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn non_json_response_fails_descriptively() {
        let err = parse_response("Sorry, I can't help with that.").unwrap_err();
        assert!(matches!(err, ModuleError::ParseFailed(_)));
    }

    #[test]
    fn valid_json_missing_fields_is_rejected() {
        let response = r#"{"title": "Half a module", "problems": []}"#;
        let err = parse_response(response).unwrap_err();
        assert!(matches!(err, ModuleError::MissingField("type")));
    }

    #[test]
    fn prompt_carries_the_specification() {
        let prompt = build_prompt("fractions", "easy", "halves and quarters");
        assert!(prompt.contains("Type: fractions"));
        assert!(prompt.contains("Difficulty: easy"));
        assert!(prompt.contains("halves and quarters"));
        assert!(prompt.contains("\"problems\""));
    }
}
