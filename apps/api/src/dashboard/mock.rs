//! Seed datasets behind the dashboards. Nothing here is persisted.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::auth::role::Role;
use crate::flows::job_posting::EmploymentType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Draft,
    Open,
    Paused,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Applied,
    Screening,
    Interview,
    Offer,
    Hired,
    Rejected,
}

#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub status: JobStatus,
    pub posted_on: NaiveDate,
    pub description: String,
    pub requirements: Vec<String>,
    pub hiring_manager: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub job_id: String,
    pub stage: PipelineStage,
    pub match_score: Option<u8>,
    pub applied_on: NaiveDate,
    pub headline: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Interview {
    pub id: String,
    pub candidate_id: String,
    pub job_id: String,
    pub interviewer: String,
    pub scheduled_at: NaiveDateTime,
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, hour: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(hour, min, 0).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn jobs() -> Vec<Job> {
    vec![
        Job {
            id: "job-101".to_string(),
            title: "Senior Backend Engineer".to_string(),
            department: "Engineering".to_string(),
            location: "Berlin (Hybrid)".to_string(),
            employment_type: EmploymentType::FullTime,
            status: JobStatus::Open,
            posted_on: date(2026, 8, 4),
            description: "Own the services behind our hiring pipeline: APIs, queues and data \
                models used by thousands of recruiters."
                .to_string(),
            requirements: strings(&["5+ years backend development", "Rust or Go", "PostgreSQL"]),
            hiring_manager: "Jordan Patel".to_string(),
        },
        Job {
            id: "job-102".to_string(),
            title: "Product Designer".to_string(),
            department: "Design".to_string(),
            location: "Remote (EU)".to_string(),
            employment_type: EmploymentType::FullTime,
            status: JobStatus::Open,
            posted_on: date(2026, 8, 19),
            description: "Shape the candidate and recruiter experience end to end, from research \
                to polished UI."
                .to_string(),
            requirements: strings(&["Portfolio of shipped products", "Figma", "Design systems"]),
            hiring_manager: "Jordan Patel".to_string(),
        },
        Job {
            id: "job-103".to_string(),
            title: "Talent Sourcer".to_string(),
            department: "People".to_string(),
            location: "Lisbon".to_string(),
            employment_type: EmploymentType::Contract,
            status: JobStatus::Paused,
            posted_on: date(2026, 7, 1),
            description: "Build pipelines of engineering talent across Europe.".to_string(),
            requirements: strings(&["2+ years sourcing", "Boolean search", "LinkedIn Recruiter"]),
            hiring_manager: "Riley Morgan".to_string(),
        },
        Job {
            id: "job-104".to_string(),
            title: "Data Analyst Intern".to_string(),
            department: "Analytics".to_string(),
            location: "Berlin".to_string(),
            employment_type: EmploymentType::Internship,
            status: JobStatus::Draft,
            posted_on: date(2026, 9, 30),
            description: "Help us measure funnel health and time-to-hire.".to_string(),
            requirements: strings(&["SQL", "Spreadsheets", "Curiosity"]),
            hiring_manager: "Jordan Patel".to_string(),
        },
        Job {
            id: "job-105".to_string(),
            title: "Customer Success Manager".to_string(),
            department: "Customer".to_string(),
            location: "London".to_string(),
            employment_type: EmploymentType::FullTime,
            status: JobStatus::Closed,
            posted_on: date(2026, 5, 12),
            description: "Guide customers from onboarding to renewal.".to_string(),
            requirements: strings(&["B2B SaaS experience", "Excellent communication"]),
            hiring_manager: "Avery Chen".to_string(),
        },
    ]
}

pub fn candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "cand-201".to_string(),
            name: "Sam Okafor".to_string(),
            email: "sam.okafor@example.com".to_string(),
            job_id: "job-102".to_string(),
            stage: PipelineStage::Interview,
            match_score: Some(78),
            applied_on: date(2026, 8, 25),
            headline: "Frontend developer moving into product design".to_string(),
            skills: strings(&["React", "Figma", "User research"]),
        },
        Candidate {
            id: "cand-202".to_string(),
            name: "Mina Kowalski".to_string(),
            email: "mina.k@example.com".to_string(),
            job_id: "job-101".to_string(),
            stage: PipelineStage::Screening,
            match_score: Some(88),
            applied_on: date(2026, 8, 10),
            headline: "Backend engineer, distributed systems".to_string(),
            skills: strings(&["Rust", "Kafka", "PostgreSQL"]),
        },
        Candidate {
            id: "cand-203".to_string(),
            name: "Diego Alvarez".to_string(),
            email: "diego.alvarez@example.com".to_string(),
            job_id: "job-101".to_string(),
            stage: PipelineStage::Applied,
            match_score: None,
            applied_on: date(2026, 9, 2),
            headline: "Go developer, fintech".to_string(),
            skills: strings(&["Go", "gRPC", "AWS"]),
        },
        Candidate {
            id: "cand-204".to_string(),
            name: "Priya Nair".to_string(),
            email: "priya.nair@example.com".to_string(),
            job_id: "job-102".to_string(),
            stage: PipelineStage::Offer,
            match_score: Some(91),
            applied_on: date(2026, 8, 21),
            headline: "Senior product designer, marketplaces".to_string(),
            skills: strings(&["Figma", "Prototyping", "Design systems"]),
        },
        Candidate {
            id: "cand-205".to_string(),
            name: "Sam Okafor".to_string(),
            email: "sam.okafor@example.com".to_string(),
            job_id: "job-101".to_string(),
            stage: PipelineStage::Rejected,
            match_score: Some(41),
            applied_on: date(2026, 8, 6),
            headline: "Frontend developer moving into product design".to_string(),
            skills: strings(&["React", "TypeScript"]),
        },
    ]
}

pub fn interviews() -> Vec<Interview> {
    vec![
        Interview {
            id: "int-301".to_string(),
            candidate_id: "cand-201".to_string(),
            job_id: "job-102".to_string(),
            interviewer: "Jordan Patel".to_string(),
            scheduled_at: at(2026, 10, 21, 14, 0),
            kind: "Portfolio review".to_string(),
        },
        Interview {
            id: "int-302".to_string(),
            candidate_id: "cand-202".to_string(),
            job_id: "job-101".to_string(),
            interviewer: "Riley Morgan".to_string(),
            scheduled_at: at(2026, 10, 20, 10, 30),
            kind: "Recruiter screen".to_string(),
        },
        Interview {
            id: "int-303".to_string(),
            candidate_id: "cand-204".to_string(),
            job_id: "job-102".to_string(),
            interviewer: "Jordan Patel".to_string(),
            scheduled_at: at(2026, 10, 23, 16, 0),
            kind: "Final round".to_string(),
        },
    ]
}

pub fn team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Avery Chen".to_string(),
            email: "avery.chen@talentdesk.dev".to_string(),
            role: Role::Admin,
            active: true,
        },
        TeamMember {
            name: "Riley Morgan".to_string(),
            email: "riley.morgan@talentdesk.dev".to_string(),
            role: Role::Recruiter,
            active: true,
        },
        TeamMember {
            name: "Jordan Patel".to_string(),
            email: "jordan.patel@talentdesk.dev".to_string(),
            role: Role::HiringManager,
            active: true,
        },
        TeamMember {
            name: "Casey Brooks".to_string(),
            email: "casey.brooks@talentdesk.dev".to_string(),
            role: Role::Recruiter,
            active: false,
        },
    ]
}
