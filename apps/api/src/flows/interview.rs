//! Interview simulation: one practice-interview turn per call.

use serde::{Deserialize, Serialize};

use crate::flows::prompts::{INTERVIEW_PERSONA, INTERVIEW_PROMPT_TEMPLATE};
use crate::flows::{
    bullet_list, render_template, require_items, require_text, Flow, Validate, MAX_LIST_ITEMS,
    MAX_LONG_TEXT, MAX_SHORT_TEXT,
};
use crate::llm_client::prompts::system_prompt;

/// Longest transcript accepted; practice sessions end well before this.
pub const MAX_TRANSCRIPT_TURNS: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewTurn {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InterviewInput {
    pub job_title: String,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    #[serde(default)]
    pub transcript: Vec<InterviewTurn>,
}

impl Validate for InterviewInput {
    fn validate(&self) -> Result<(), String> {
        require_text("job_title", &self.job_title, MAX_SHORT_TEXT)?;
        require_items("focus_areas", &self.focus_areas, MAX_LIST_ITEMS)?;
        if self.transcript.len() > MAX_TRANSCRIPT_TURNS {
            return Err(format!(
                "transcript accepts at most {MAX_TRANSCRIPT_TURNS} turns"
            ));
        }
        for (i, turn) in self.transcript.iter().enumerate() {
            require_text(&format!("transcript[{i}].question"), &turn.question, MAX_LONG_TEXT)?;
            require_text(&format!("transcript[{i}].answer"), &turn.answer, MAX_LONG_TEXT)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewReply {
    pub question: String,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl Validate for InterviewReply {
    fn validate(&self) -> Result<(), String> {
        if self.question.trim().is_empty() {
            return Err("question is empty".to_string());
        }
        Ok(())
    }
}

fn render_transcript(turns: &[InterviewTurn]) -> String {
    if turns.is_empty() {
        return "(empty)".to_string();
    }
    turns
        .iter()
        .enumerate()
        .map(|(i, turn)| {
            format!(
                "Q{n}: {q}\nA{n}: {a}",
                n = i + 1,
                q = turn.question.trim(),
                a = turn.answer.trim()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub struct InterviewSimulation;

impl Flow for InterviewSimulation {
    const NAME: &'static str = "interview_simulation";

    type Input = InterviewInput;
    type Output = InterviewReply;

    fn system() -> String {
        system_prompt(INTERVIEW_PERSONA)
    }

    fn render_prompt(input: &InterviewInput) -> String {
        let focus_areas = bullet_list(&input.focus_areas);
        let transcript = render_transcript(&input.transcript);

        render_template(
            INTERVIEW_PROMPT_TEMPLATE,
            &[
                ("job_title", input.job_title.trim()),
                ("focus_areas", &focus_areas),
                ("transcript", &transcript),
            ],
        )
    }

    fn fallback() -> InterviewReply {
        InterviewReply {
            question: "Tell me about a recent project you are proud of and the part you played in it."
                .to_string(),
            feedback: None,
            tips: vec![
                "Structure answers as situation, task, action, result.".to_string(),
            ],
        }
    }
}
