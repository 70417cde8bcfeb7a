// All LLM prompt constants for the flows.
// Templates use `{placeholder}` markers filled by `flows::render_template` before sending.

/// Persona for resume screening.
pub const SCREENING_PERSONA: &str = "You are an experienced technical recruiter who screens \
    resumes against job descriptions and explains your reasoning briefly.";

/// Replace: {job_title}, {job_description}, {resume_text}, {fairness}
pub const SCREENING_PROMPT_TEMPLATE: &str = r#"Screen the resume below for the role of {job_title}.

{fairness}

JOB DESCRIPTION:
{job_description}

RESUME:
{resume_text}

Return a JSON object with this EXACT schema (no extra fields):
{
  "match_score": 0,
  "summary": "Two sentences on overall fit.",
  "strengths": ["Concrete strength tied to the job"],
  "gaps": ["Requirement the resume does not show"],
  "recommendation": "advance"
}

Rules:
- match_score is an integer from 0 to 100
- recommendation is exactly one of "advance", "hold", "reject"
- at most 5 strengths and 5 gaps, each under 20 words"#;

/// Persona for the interview simulator.
pub const INTERVIEW_PERSONA: &str = "You are a friendly but rigorous interviewer running a \
    practice interview. You ask one question at a time and give constructive feedback.";

/// Replace: {job_title}, {focus_areas}, {transcript}
pub const INTERVIEW_PROMPT_TEMPLATE: &str = r#"Continue a practice interview for the role of {job_title}.

FOCUS AREAS:
{focus_areas}

TRANSCRIPT SO FAR:
{transcript}

If the transcript is empty, open the interview. Otherwise give feedback on the
candidate's most recent answer and ask the next question. Do not repeat a
question already asked.

Return a JSON object with this EXACT schema:
{
  "question": "The next interview question",
  "feedback": "Feedback on the last answer, or null when opening",
  "tips": ["Short actionable tip"]
}

Rules:
- at most 3 tips
- the question must be a single question"#;

/// Persona for job posting generation.
pub const JOB_POSTING_PERSONA: &str = "You are an employer-branding copywriter who writes \
    clear, inclusive job postings free of jargon and gendered language.";

/// Replace: {title}, {department}, {location}, {employment_type}, {company_name}, {key_requirements}
pub const JOB_POSTING_PROMPT_TEMPLATE: &str = r#"Write a job posting.

TITLE: {title}
DEPARTMENT: {department}
LOCATION: {location}
EMPLOYMENT TYPE: {employment_type}
COMPANY: {company_name}

KEY REQUIREMENTS:
{key_requirements}

Return a JSON object with this EXACT schema:
{
  "title": "Polished job title",
  "summary": "One paragraph introducing the role",
  "responsibilities": ["What the person will do"],
  "requirements": ["What the person needs"],
  "benefits": ["What the company offers"]
}

Rules:
- 4 to 8 responsibilities, 3 to 8 requirements, 3 to 6 benefits
- only list requirements grounded in KEY REQUIREMENTS
- do not invent salary figures"#;

/// Persona for profile enrichment.
pub const ENRICHMENT_PERSONA: &str = "You are a career coach who helps candidates present \
    their experience accurately and compellingly.";

/// Replace: {name}, {headline}, {bio}, {skills}, {fairness}
pub const ENRICHMENT_PROMPT_TEMPLATE: &str = r#"Improve the candidate profile below.

{fairness}

NAME: {name}
CURRENT HEADLINE: {headline}

BIO:
{bio}

LISTED SKILLS:
{skills}

Return a JSON object with this EXACT schema:
{
  "headline": "A concise professional headline under 120 characters",
  "summary": "A 2-3 sentence professional summary written in first person",
  "suggested_skills": ["Skill evidenced in the bio but missing from the list"],
  "seniority": "mid"
}

Rules:
- seniority is exactly one of "junior", "mid", "senior", "lead"
- suggested_skills must not repeat LISTED SKILLS; at most 8
- use only facts from the bio"#;
