//! Job posting generation: expands a handful of requirements into a full
//! posting for the Posting Studio.

use serde::{Deserialize, Serialize};

use crate::flows::prompts::{JOB_POSTING_PERSONA, JOB_POSTING_PROMPT_TEMPLATE};
use crate::flows::{
    bullet_list, optional_text, render_template, require_items, require_text, Flow, Validate,
    MAX_LIST_ITEMS, MAX_SHORT_TEXT,
};
use crate::llm_client::prompts::system_prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl EmploymentType {
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Internship => "Internship",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobPostingInput {
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub key_requirements: Vec<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

impl Validate for JobPostingInput {
    fn validate(&self) -> Result<(), String> {
        require_text("title", &self.title, MAX_SHORT_TEXT)?;
        require_text("department", &self.department, MAX_SHORT_TEXT)?;
        require_text("location", &self.location, MAX_SHORT_TEXT)?;
        if self.key_requirements.is_empty() {
            return Err("key_requirements needs at least one item".to_string());
        }
        require_items("key_requirements", &self.key_requirements, MAX_LIST_ITEMS)?;
        optional_text("company_name", self.company_name.as_deref(), MAX_SHORT_TEXT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub summary: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
}

impl Validate for JobPosting {
    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() || self.summary.trim().is_empty() {
            return Err("title and summary are required".to_string());
        }
        if self.responsibilities.is_empty() || self.requirements.is_empty() {
            return Err("responsibilities and requirements cannot be empty".to_string());
        }
        Ok(())
    }
}

pub struct JobPostingGeneration;

impl Flow for JobPostingGeneration {
    const NAME: &'static str = "job_posting";

    type Input = JobPostingInput;
    type Output = JobPosting;

    fn system() -> String {
        system_prompt(JOB_POSTING_PERSONA)
    }

    fn render_prompt(input: &JobPostingInput) -> String {
        let company = input
            .company_name
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or("(unspecified)");

        let key_requirements = bullet_list(&input.key_requirements);

        render_template(
            JOB_POSTING_PROMPT_TEMPLATE,
            &[
                ("title", input.title.trim()),
                ("department", input.department.trim()),
                ("location", input.location.trim()),
                ("employment_type", input.employment_type.label()),
                ("company_name", company),
                ("key_requirements", &key_requirements),
            ],
        )
    }

    fn fallback() -> JobPosting {
        JobPosting {
            title: "Open Position".to_string(),
            summary: "We are growing our team and looking for someone to join us. \
                Edit this draft to describe the role."
                .to_string(),
            responsibilities: vec!["Describe the day-to-day work of this role.".to_string()],
            requirements: vec!["List the skills and experience this role needs.".to_string()],
            benefits: vec!["Describe compensation, benefits, and perks.".to_string()],
        }
    }
}
