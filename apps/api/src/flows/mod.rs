//! Prompt flows: each is one validated request/response round trip to the
//! model with a hardcoded fallback.
//!
//! Order within a run: validate input → render prompt → one model call →
//! parse + validate output. Invalid input is the only error a caller sees;
//! model failures and bad output degrade to `Flow::fallback()`.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::{strip_json_fences, CompletionModel};

pub mod enrichment;
pub mod handlers;
pub mod interview;
pub mod job_posting;
pub mod prompts;
pub mod screening;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("{0}")]
    Validation(String),
}

/// Schema check for flow inputs and outputs.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub trait Flow {
    const NAME: &'static str;

    type Input: Validate + Send + Sync;
    type Output: Validate + DeserializeOwned + Serialize + Send;

    fn system() -> String;

    fn render_prompt(input: &Self::Input) -> String;

    fn fallback() -> Self::Output;
}

/// A flow result. `fallback` is set when the output is `Flow::fallback()`.
#[derive(Debug, Clone, Serialize)]
pub struct FlowOutcome<T> {
    pub result: T,
    pub fallback: bool,
}

pub async fn run_flow<F: Flow>(
    model: &dyn CompletionModel,
    input: &F::Input,
) -> Result<FlowOutcome<F::Output>, FlowError> {
    input.validate().map_err(FlowError::Validation)?;

    let prompt = F::render_prompt(input);
    let reply = model.complete(&prompt, &F::system()).await;

    let parsed = match reply {
        Ok(Some(text)) => parse_output::<F::Output>(&text),
        Ok(None) => Err("model returned no output".to_string()),
        Err(e) => Err(format!("model call failed: {e}")),
    };

    match parsed {
        Ok(result) => {
            info!(flow = F::NAME, "Flow completed");
            Ok(FlowOutcome {
                result,
                fallback: false,
            })
        }
        Err(reason) => {
            warn!(flow = F::NAME, "Using fallback output: {reason}");
            Ok(FlowOutcome {
                result: F::fallback(),
                fallback: true,
            })
        }
    }
}

fn parse_output<T: DeserializeOwned + Validate>(text: &str) -> Result<T, String> {
    let output: T = serde_json::from_str(strip_json_fences(text))
        .map_err(|e| format!("malformed output: {e}"))?;
    output
        .validate()
        .map_err(|e| format!("output failed validation: {e}"))?;
    Ok(output)
}

// ────────────────────────────────────────────────────────────────────────────
// Field checks shared by the flow schemas
// ────────────────────────────────────────────────────────────────────────────

/// Cap for free-text fields (resumes, descriptions, bios).
pub const MAX_LONG_TEXT: usize = 20_000;
/// Cap for single-line fields (titles, names, locations).
pub const MAX_SHORT_TEXT: usize = 200;
/// Cap on list inputs (skills, requirements).
pub const MAX_LIST_ITEMS: usize = 30;

pub fn require_text(field: &str, value: &str, max_chars: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} cannot be empty"));
    }
    check_len(field, value, max_chars)
}

pub fn optional_text(field: &str, value: Option<&str>, max_chars: usize) -> Result<(), String> {
    match value {
        Some(v) => check_len(field, v, max_chars),
        None => Ok(()),
    }
}

pub fn require_items(field: &str, items: &[String], max_items: usize) -> Result<(), String> {
    if items.len() > max_items {
        return Err(format!("{field} accepts at most {max_items} items"));
    }
    if items.iter().any(|item| item.trim().is_empty()) {
        return Err(format!("{field} cannot contain blank items"));
    }
    items
        .iter()
        .try_for_each(|item| check_len(field, item, MAX_SHORT_TEXT))
}

fn check_len(field: &str, value: &str, max_chars: usize) -> Result<(), String> {
    if value.chars().count() > max_chars {
        return Err(format!("{field} must be at most {max_chars} characters"));
    }
    Ok(())
}

/// Renders a list as `- item` lines, or `(none)` when empty.
pub fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return "(none)".to_string();
    }
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fills `{name}` markers in a single pass over the template. Substituted
/// values are never rescanned, so braces inside user text stay literal.
/// Unknown markers are left as written.
pub fn render_template(template: &str, fields: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let field = after.find('}').and_then(|close| {
            let name = &after[..close];
            fields
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match field {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
