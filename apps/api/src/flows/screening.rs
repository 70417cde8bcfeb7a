//! Resume screening: scores a resume against a job description.

use serde::{Deserialize, Serialize};

use crate::flows::prompts::{SCREENING_PERSONA, SCREENING_PROMPT_TEMPLATE};
use crate::flows::{render_template, require_text, Flow, Validate, MAX_LONG_TEXT, MAX_SHORT_TEXT};
use crate::llm_client::prompts::{system_prompt, FAIRNESS_INSTRUCTION};

#[derive(Debug, Clone, Deserialize)]
pub struct ScreeningInput {
    pub job_title: String,
    pub job_description: String,
    pub resume_text: String,
}

impl Validate for ScreeningInput {
    fn validate(&self) -> Result<(), String> {
        require_text("job_title", &self.job_title, MAX_SHORT_TEXT)?;
        require_text("job_description", &self.job_description, MAX_LONG_TEXT)?;
        require_text("resume_text", &self.resume_text, MAX_LONG_TEXT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Advance,
    Hold,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub match_score: u8,
    pub summary: String,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendation: Recommendation,
}

impl Validate for ScreeningResult {
    fn validate(&self) -> Result<(), String> {
        if self.match_score > 100 {
            return Err(format!("match_score {} is above 100", self.match_score));
        }
        if self.summary.trim().is_empty() {
            return Err("summary is empty".to_string());
        }
        Ok(())
    }
}

pub struct ResumeScreening;

impl Flow for ResumeScreening {
    const NAME: &'static str = "resume_screening";

    type Input = ScreeningInput;
    type Output = ScreeningResult;

    fn system() -> String {
        system_prompt(SCREENING_PERSONA)
    }

    fn render_prompt(input: &ScreeningInput) -> String {
        render_template(
            SCREENING_PROMPT_TEMPLATE,
            &[
                ("fairness", FAIRNESS_INSTRUCTION),
                ("job_title", input.job_title.trim()),
                ("job_description", input.job_description.trim()),
                ("resume_text", input.resume_text.trim()),
            ],
        )
    }

    fn fallback() -> ScreeningResult {
        ScreeningResult {
            match_score: 0,
            summary: "This resume could not be screened automatically. Please review it manually."
                .to_string(),
            strengths: vec![],
            gaps: vec![],
            recommendation: Recommendation::Hold,
        }
    }
}
