//! AI-generated learning modules.
//!
//! A module is the structured payload distilled from a free-text generator
//! response: a titled, difficulty-tagged set of problems. Parsing and
//! validation live in [`generator`]; persistence lives in [`manager`].

pub mod generator;
pub mod manager;

pub use generator::{build_prompt, parse_response};
pub use manager::ModuleStore;

use serde::{Deserialize, Serialize};

use crate::error::ModuleError;

/// One problem inside a learning module.
///
/// Answers arrive from the generator as either strings or numbers, so the
/// field stays a raw JSON value until display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleProblem {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl ModuleProblem {
    /// The answer rendered for display.
    pub fn answer_text(&self) -> String {
        match &self.answer {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    fn answer_present(&self) -> bool {
        match &self.answer {
            serde_json::Value::Null => false,
            serde_json::Value::String(s) => !s.trim().is_empty(),
            _ => true,
        }
    }
}

/// A complete learning module.
///
/// Field names mirror the generator's JSON contract; `type` becomes `kind`
/// on the Rust side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningModule {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub problems: Vec<ModuleProblem>,
    #[serde(rename = "visualAids", default, skip_serializing_if = "Option::is_none")]
    pub visual_aids: Option<serde_json::Value>,
    /// The description as it came out of the generator, kept for re-editing.
    #[serde(
        rename = "originalDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub original_description: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Check that a module carries everything a game page needs.
///
/// Rejection is all-or-nothing; no partial module is accepted.
///
/// # Errors
/// Returns the first missing/empty required field, or the offending
/// problem index.
pub fn validate(module: &LearningModule) -> Result<(), ModuleError> {
    required(&module.title, "title")?;
    required(&module.kind, "type")?;
    required(&module.difficulty, "difficulty")?;
    required(&module.description, "description")?;
    required(&module.instructions, "instructions")?;

    if module.problems.is_empty() {
        return Err(ModuleError::NoProblems);
    }
    for (index, problem) in module.problems.iter().enumerate() {
        if problem.question.trim().is_empty() || !problem.answer_present() {
            return Err(ModuleError::InvalidProblem { index });
        }
    }
    Ok(())
}

fn required(value: &str, field: &'static str) -> Result<(), ModuleError> {
    if value.trim().is_empty() {
        Err(ModuleError::MissingField(field))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LearningModule {
        LearningModule {
            id: "m1".into(),
            title: "Fractions".into(),
            kind: "fractions".into(),
            difficulty: "easy".into(),
            description: "Intro to halves".into(),
            instructions: "Answer each question".into(),
            problems: vec![ModuleProblem {
                question: "What is half of 4?".into(),
                answer: serde_json::json!(2),
                hints: None,
                explanation: None,
            }],
            visual_aids: None,
            original_description: None,
            created_at: None,
        }
    }

    #[test]
    fn complete_module_is_valid() {
        assert!(validate(&sample()).is_ok());
    }

    #[test]
    fn each_required_field_is_enforced() {
        for field in ["title", "type", "difficulty", "description", "instructions"] {
            let mut module = sample();
            match field {
                "title" => module.title.clear(),
                "type" => module.kind.clear(),
                "difficulty" => module.difficulty.clear(),
                "description" => module.description.clear(),
                _ => module.instructions.clear(),
            }
            let err = validate(&module).unwrap_err();
            assert!(matches!(err, ModuleError::MissingField(f) if f == field));
        }
    }

    #[test]
    fn empty_problem_list_is_rejected() {
        let mut module = sample();
        module.problems.clear();
        assert!(matches!(validate(&module), Err(ModuleError::NoProblems)));
    }

    #[test]
    fn problem_without_answer_is_rejected() {
        let mut module = sample();
        module.problems.push(ModuleProblem {
            question: "Unanswerable".into(),
            answer: serde_json::Value::Null,
            hints: None,
            explanation: None,
        });
        assert!(matches!(
            validate(&module),
            Err(ModuleError::InvalidProblem { index: 1 })
        ));
    }

    #[test]
    fn numeric_and_string_answers_both_count() {
        let mut module = sample();
        module.problems[0].answer = serde_json::json!("two");
        assert!(validate(&module).is_ok());
        module.problems[0].answer = serde_json::json!(0);
        assert!(validate(&module).is_ok());
        module.problems[0].answer = serde_json::json!("   ");
        assert!(validate(&module).is_err());
    }
}
