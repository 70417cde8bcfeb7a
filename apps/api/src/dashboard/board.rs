//! In-memory job board seeded from the mock datasets. Edits last for the life
//! of the process.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::auth::role::Role;
use crate::auth::session::Session;
use crate::dashboard::mock::{self, Candidate, Interview, Job, JobStatus, PipelineStage, TeamMember};
use crate::errors::AppError;
use crate::flows::job_posting::EmploymentType;
use crate::flows::{require_items, require_text, MAX_LIST_ITEMS, MAX_LONG_TEXT, MAX_SHORT_TEXT};
use crate::navigation::routes::DashboardSection;

#[derive(Debug)]
struct BoardData {
    jobs: Vec<Job>,
    candidates: Vec<Candidate>,
    interviews: Vec<Interview>,
    team: Vec<TeamMember>,
}

pub struct JobBoard {
    data: RwLock<BoardData>,
}

/// Body of `POST /api/v1/jobs`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub status: Option<JobStatus>,
}

impl NewJob {
    fn validate(&self) -> Result<(), AppError> {
        require_text("title", &self.title, MAX_SHORT_TEXT)
            .and_then(|_| require_text("department", &self.department, MAX_SHORT_TEXT))
            .and_then(|_| require_text("location", &self.location, MAX_SHORT_TEXT))
            .and_then(|_| require_text("description", &self.description, MAX_LONG_TEXT))
            .and_then(|_| require_items("requirements", &self.requirements, MAX_LIST_ITEMS))
            .map_err(AppError::Validation)
    }
}

/// A candidate's own view of one application.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationView {
    pub candidate_id: String,
    pub job_id: String,
    pub job_title: String,
    pub stage: PipelineStage,
    pub applied_on: chrono::NaiveDate,
}

impl Default for JobBoard {
    fn default() -> Self {
        Self::seeded()
    }
}

impl JobBoard {
    pub fn seeded() -> Self {
        Self {
            data: RwLock::new(BoardData {
                jobs: mock::jobs(),
                candidates: mock::candidates(),
                interviews: mock::interviews(),
                team: mock::team(),
            }),
        }
    }

    /// Jobs visible on the public board.
    pub async fn open_jobs(&self) -> Vec<Job> {
        let data = self.data.read().await;
        data.jobs
            .iter()
            .filter(|j| j.status == JobStatus::Open)
            .cloned()
            .collect()
    }

    pub async fn open_job(&self, id: &str) -> Option<Job> {
        let data = self.data.read().await;
        data.jobs
            .iter()
            .find(|j| j.id == id && j.status == JobStatus::Open)
            .cloned()
    }

    pub async fn create_job(&self, new_job: NewJob, hiring_manager: &str) -> Result<Job, AppError> {
        new_job.validate()?;

        let mut data = self.data.write().await;
        let next_id = data
            .jobs
            .iter()
            .filter_map(|j| j.id.strip_prefix("job-")?.parse::<u32>().ok())
            .max()
            .unwrap_or(100)
            + 1;

        let job = Job {
            id: format!("job-{next_id}"),
            title: new_job.title.trim().to_string(),
            department: new_job.department.trim().to_string(),
            location: new_job.location.trim().to_string(),
            employment_type: new_job.employment_type,
            status: new_job.status.unwrap_or(JobStatus::Draft),
            posted_on: Utc::now().date_naive(),
            description: new_job.description.trim().to_string(),
            requirements: new_job.requirements,
            hiring_manager: hiring_manager.to_string(),
        };
        data.jobs.push(job.clone());
        Ok(job)
    }

    pub async fn set_job_status(&self, id: &str, status: JobStatus) -> Result<Job, AppError> {
        let mut data = self.data.write().await;
        let job = data
            .jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
        job.status = status;
        Ok(job.clone())
    }

    /// Removes a job together with its candidates and interviews.
    pub async fn delete_job(&self, id: &str) -> Result<(), AppError> {
        let mut data = self.data.write().await;
        let before = data.jobs.len();
        data.jobs.retain(|j| j.id != id);
        if data.jobs.len() == before {
            return Err(AppError::NotFound(format!("Job {id} not found")));
        }
        data.candidates.retain(|c| c.job_id != id);
        data.interviews.retain(|i| i.job_id != id);
        Ok(())
    }

    pub async fn move_candidate(
        &self,
        id: &str,
        stage: PipelineStage,
    ) -> Result<Candidate, AppError> {
        let mut data = self.data.write().await;
        let candidate = data
            .candidates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
        candidate.stage = stage;
        Ok(candidate.clone())
    }

    pub async fn applications_for(&self, email: &str) -> Vec<ApplicationView> {
        let data = self.data.read().await;
        data.candidates
            .iter()
            .filter(|c| c.email == email)
            .map(|c| ApplicationView {
                candidate_id: c.id.clone(),
                job_id: c.job_id.clone(),
                job_title: data
                    .jobs
                    .iter()
                    .find(|j| j.id == c.job_id)
                    .map(|j| j.title.clone())
                    .unwrap_or_default(),
                stage: c.stage,
                applied_on: c.applied_on,
            })
            .collect()
    }

    /// Data behind one dashboard section for the signed-in user.
    pub async fn section_data(&self, session: &Session, section: DashboardSection) -> Value {
        if section == DashboardSection::Applications {
            return json!({ "applications": self.applications_for(&session.email).await });
        }

        let data = self.data.read().await;
        match section {
            DashboardSection::Overview => overview(&data, session),
            DashboardSection::Jobs => json!({ "jobs": data.jobs }),
            DashboardSection::Postings => json!({
                "drafts": data.jobs.iter().filter(|j| j.status == JobStatus::Draft).collect::<Vec<_>>(),
                "employment_types": [
                    EmploymentType::FullTime,
                    EmploymentType::PartTime,
                    EmploymentType::Contract,
                    EmploymentType::Internship,
                ],
            }),
            DashboardSection::Candidates => json!({ "candidates": data.candidates }),
            DashboardSection::Screening => json!({
                "jobs": data.jobs.iter().filter(|j| j.status == JobStatus::Open).collect::<Vec<_>>(),
                "unscreened": data.candidates.iter().filter(|c| c.match_score.is_none()).collect::<Vec<_>>(),
            }),
            DashboardSection::Interviews => {
                let mut interviews: Vec<&Interview> = data
                    .interviews
                    .iter()
                    .filter(|i| session.role != Role::HiringManager || i.interviewer == session.name)
                    .collect();
                interviews.sort_by_key(|i| i.scheduled_at);
                json!({ "interviews": interviews })
            }
            DashboardSection::Users => json!({ "team": data.team }),
            DashboardSection::Settings => json!({
                "workspace": "Talentdesk Demo",
                "timezone": "Europe/Berlin",
                "ai_features_enabled": true,
            }),
            DashboardSection::Practice => json!({
                "suggested_roles": data.jobs.iter()
                    .filter(|j| j.status == JobStatus::Open)
                    .map(|j| j.title.as_str())
                    .collect::<Vec<_>>(),
            }),
            DashboardSection::Profile => {
                let latest = data
                    .candidates
                    .iter()
                    .filter(|c| c.email == session.email)
                    .max_by_key(|c| c.applied_on);
                json!({
                    "name": session.name,
                    "email": session.email,
                    "headline": latest.map(|c| c.headline.as_str()),
                    "skills": latest.map(|c| c.skills.clone()).unwrap_or_default(),
                })
            }
            DashboardSection::Applications => Value::Null,
        }
    }
}

fn overview(data: &BoardData, session: &Session) -> Value {
    if session.role == Role::Candidate {
        let mine: Vec<&Candidate> = data
            .candidates
            .iter()
            .filter(|c| c.email == session.email)
            .collect();
        return json!({
            "applications": mine.len(),
            "active_applications": mine.iter()
                .filter(|c| !matches!(c.stage, PipelineStage::Rejected | PipelineStage::Hired))
                .count(),
            "open_jobs": data.jobs.iter().filter(|j| j.status == JobStatus::Open).count(),
        });
    }

    let stage_count =
        |stage: PipelineStage| data.candidates.iter().filter(|c| c.stage == stage).count();

    json!({
        "open_jobs": data.jobs.iter().filter(|j| j.status == JobStatus::Open).count(),
        "total_candidates": data.candidates.len(),
        "upcoming_interviews": data.interviews.len(),
        "pipeline": {
            "applied": stage_count(PipelineStage::Applied),
            "screening": stage_count(PipelineStage::Screening),
            "interview": stage_count(PipelineStage::Interview),
            "offer": stage_count(PipelineStage::Offer),
            "hired": stage_count(PipelineStage::Hired),
        },
    })
}
