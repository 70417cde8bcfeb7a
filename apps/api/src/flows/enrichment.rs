//! Profile enrichment: suggests a headline, summary and missing skills for a
//! candidate profile.

use serde::{Deserialize, Serialize};

use crate::flows::prompts::{ENRICHMENT_PERSONA, ENRICHMENT_PROMPT_TEMPLATE};
use crate::flows::{
    bullet_list, optional_text, render_template, require_items, require_text, Flow, Validate, MAX_LIST_ITEMS,
    MAX_LONG_TEXT, MAX_SHORT_TEXT,
};
use crate::llm_client::prompts::{system_prompt, FAIRNESS_INSTRUCTION};

const MAX_SUGGESTED_SKILLS: usize = 8;

#[derive(Debug, Clone, Deserialize)]
pub struct EnrichmentInput {
    pub name: String,
    #[serde(default)]
    pub headline: Option<String>,
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Validate for EnrichmentInput {
    fn validate(&self) -> Result<(), String> {
        require_text("name", &self.name, MAX_SHORT_TEXT)?;
        optional_text("headline", self.headline.as_deref(), MAX_SHORT_TEXT)?;
        require_text("bio", &self.bio, MAX_LONG_TEXT)?;
        require_items("skills", &self.skills, MAX_LIST_ITEMS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    Junior,
    Mid,
    Senior,
    Lead,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEnrichment {
    pub headline: String,
    pub summary: String,
    #[serde(default)]
    pub suggested_skills: Vec<String>,
    pub seniority: Seniority,
}

impl Validate for ProfileEnrichment {
    fn validate(&self) -> Result<(), String> {
        if self.headline.trim().is_empty() {
            return Err("headline is empty".to_string());
        }
        if self.suggested_skills.len() > MAX_SUGGESTED_SKILLS {
            return Err(format!(
                "{} suggested skills exceeds {MAX_SUGGESTED_SKILLS}",
                self.suggested_skills.len()
            ));
        }
        Ok(())
    }
}

pub struct ProfileEnrichmentFlow;

impl Flow for ProfileEnrichmentFlow {
    const NAME: &'static str = "profile_enrichment";

    type Input = EnrichmentInput;
    type Output = ProfileEnrichment;

    fn system() -> String {
        system_prompt(ENRICHMENT_PERSONA)
    }

    fn render_prompt(input: &EnrichmentInput) -> String {
        let headline = input
            .headline
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .unwrap_or("(none)");

        let skills = bullet_list(&input.skills);

        render_template(
            ENRICHMENT_PROMPT_TEMPLATE,
            &[
                ("fairness", FAIRNESS_INSTRUCTION),
                ("name", input.name.trim()),
                ("headline", headline),
                ("skills", &skills),
                ("bio", input.bio.trim()),
            ],
        )
    }

    fn fallback() -> ProfileEnrichment {
        ProfileEnrichment {
            headline: "Professional open to new opportunities".to_string(),
            summary: "We could not generate suggestions right now. Your profile is unchanged."
                .to_string(),
            suggested_skills: vec![],
            seniority: Seniority::Mid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::run_flow;
    use crate::llm_client::testing::ScriptedModel;

    fn input() -> EnrichmentInput {
        EnrichmentInput {
            name: "Sam Okafor".to_string(),
            headline: None,
            bio: "Frontend developer, 3 years with React and TypeScript, mentored two interns."
                .to_string(),
            skills: vec!["React".to_string()],
        }
    }

    #[test]
    fn test_prompt_defaults_missing_headline() {
        let prompt = ProfileEnrichmentFlow::render_prompt(&input());
        assert!(prompt.contains("CURRENT HEADLINE: (none)"));
        assert!(prompt.contains("- React"));
    }

    #[test]
    fn test_blank_bio_fails_validation() {
        let mut bad = input();
        bad.bio = "\n".to_string();
        assert!(bad.validate().unwrap_err().contains("bio"));
    }

    #[tokio::test]
    async fn test_too_many_suggestions_falls_back() {
        let skills: Vec<String> = (0..=MAX_SUGGESTED_SKILLS).map(|i| format!("skill{i}")).collect();
        let reply = serde_json::json!({
            "headline": "Frontend Developer",
            "summary": "I build interfaces.",
            "suggested_skills": skills,
            "seniority": "mid"
        });
        let model = ScriptedModel::replying(&reply.to_string());

        let outcome = run_flow::<ProfileEnrichmentFlow>(&model, &input()).await.unwrap();
        assert!(outcome.fallback);
        assert_eq!(outcome.result, ProfileEnrichmentFlow::fallback());
    }

    #[tokio::test]
    async fn test_valid_enrichment_is_returned() {
        let model = ScriptedModel::replying(
            r#"{"headline": "Frontend Developer | React & TypeScript", "summary": "I build fast UIs.",
                "suggested_skills": ["TypeScript", "Mentoring"], "seniority": "mid"}"#,
        );
        let outcome = run_flow::<ProfileEnrichmentFlow>(&model, &input()).await.unwrap();
        assert!(!outcome.fallback);
        assert_eq!(outcome.result.suggested_skills.len(), 2);
        assert_eq!(outcome.result.seniority, Seniority::Mid);
    }
}
