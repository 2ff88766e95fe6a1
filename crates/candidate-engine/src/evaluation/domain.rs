use serde::{Deserialize, Serialize};

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

/// Identifier wrapper for candidate profiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// Job posting as read by the evaluation core. Produced and owned by the
/// caller; the core never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: JobId,
    #[serde(default)]
    pub company_name: Option<String>,

    /// Job country, used by the eligibility gate.
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,

    pub title: String,
    pub industry: String,
    #[serde(default)]
    pub sub_industry: Option<String>,
    pub functional_area: String,

    pub min_experience_years: u32,
    #[serde(default)]
    pub max_experience_years: Option<u32>,
    #[serde(default)]
    pub require_gcc_experience: bool,

    pub salary_min: u32,
    pub salary_max: u32,
    pub currency: String,

    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub required_education: Option<String>,
    /// Nonempty list restricts eligible nationalities.
    #[serde(default)]
    pub preferred_nationalities: Vec<String>,

    /// Full description text, input to semantic scoring.
    pub job_description: String,
    #[serde(default)]
    pub desired_candidate_profile: Option<String>,
}

/// Structured employment history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentRecord {
    pub company_name: String,
    pub job_title: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub duration_months: Option<u32>,
    #[serde(default)]
    pub is_current: bool,
}

/// Structured education entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub education_level: String,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub graduation_year: Option<i32>,
}

/// Candidate profile as read by the evaluation core. Callers typically build
/// this from an upstream CV-extraction step; the core only requires the
/// fields below and makes no assumption about how they were produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub candidate_id: CandidateId,
    #[serde(default)]
    pub full_name: Option<String>,

    pub nationality: String,
    /// Current country of residence, used by the eligibility gate.
    pub current_country: String,
    #[serde(default)]
    pub visa_status: Option<String>,
    /// Visa expiry as an ISO date or timestamp string; parsed defensively.
    #[serde(default)]
    pub visa_expiry: Option<String>,

    #[serde(default)]
    pub current_salary: Option<u32>,
    pub expected_salary: u32,
    pub currency: String,

    pub total_experience_years: f64,
    #[serde(default)]
    pub gcc_experience_years: Option<f64>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub education_level: Option<String>,
    #[serde(default)]
    pub education_history: Vec<EducationRecord>,

    #[serde(default)]
    pub employment_history: Vec<EmploymentRecord>,
    /// Short professional summary, input to domain scoring.
    #[serde(default)]
    pub employment_summary: Option<String>,
    /// Extracted CV text, input to semantic scoring.
    #[serde(default)]
    pub cv_text: Option<String>,
}

/// Lowercase/trimmed form used for every case-insensitive comparison in the
/// gate and the scorers.
pub(crate) fn normalized(raw: &str) -> String {
    raw.trim().to_lowercase()
}
