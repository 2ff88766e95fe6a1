use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::domain::{normalized, Candidate, Job};
use super::scoring::skills::SkillsBreakdown;

/// Employment stints shorter than this count toward the job-hopping signal.
const SHORT_STINT_MONTHS: u32 = 24;
/// Job-hopping only considered once the history is at least this long.
const SHORT_STINT_MIN_HISTORY: usize = 3;

const PROGRESSION_KEYWORDS: [&str; 6] =
    ["senior", "lead", "principal", "director", "manager", "head"];

/// Identifies one derived feature; used by adjustment-rule conditions and in
/// the triggering snapshots attached to fired rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKey {
    GccExperienceYears,
    RequiredSkillCount,
    RequiredSkillMatchRate,
    ExperienceOverMaxYears,
    SalaryPosition,
    YearsSinceGraduation,
    ShortStintCount,
    HasCareerProgression,
    IndustryContinuityCount,
}

impl FeatureKey {
    pub const fn label(self) -> &'static str {
        match self {
            FeatureKey::GccExperienceYears => "gcc_experience_years",
            FeatureKey::RequiredSkillCount => "required_skill_count",
            FeatureKey::RequiredSkillMatchRate => "required_skill_match_rate",
            FeatureKey::ExperienceOverMaxYears => "experience_over_max_years",
            FeatureKey::SalaryPosition => "salary_position",
            FeatureKey::YearsSinceGraduation => "years_since_graduation",
            FeatureKey::ShortStintCount => "short_stint_count",
            FeatureKey::HasCareerProgression => "has_career_progression",
            FeatureKey::IndustryContinuityCount => "industry_continuity_count",
        }
    }
}

/// Strongly-typed snapshot of the derived signals the adjustment rules run
/// against. Built once per evaluation, after scoring and before adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationFeatures {
    pub gcc_experience_years: f64,
    pub required_skill_count: usize,
    pub required_skill_match_rate: f64,
    pub experience_over_max_years: f64,
    /// Position of the expected salary inside the advertised range; 0.5 when
    /// the range is degenerate.
    pub salary_position: f64,
    /// None when no education entry carries a graduation year.
    pub years_since_graduation: Option<f64>,
    pub short_stint_count: u32,
    pub has_career_progression: bool,
    /// Consecutive most-recent employment entries in the posting's industry.
    pub industry_continuity_count: u32,
}

impl EvaluationFeatures {
    pub fn derive(
        job: &Job,
        candidate: &Candidate,
        skills: &SkillsBreakdown,
        today: NaiveDate,
    ) -> Self {
        let gcc_experience_years = candidate.gcc_experience_years.unwrap_or(0.0);

        let experience_over_max_years = match job.max_experience_years {
            Some(max_years) => (candidate.total_experience_years - max_years as f64).max(0.0),
            None => 0.0,
        };

        let salary_position = if job.salary_max > job.salary_min {
            let range = (job.salary_max - job.salary_min) as f64;
            (candidate.expected_salary as f64 - job.salary_min as f64) / range
        } else {
            0.5
        };

        let years_since_graduation = candidate
            .education_history
            .iter()
            .filter_map(|entry| entry.graduation_year)
            .max()
            .map(|latest| (today.year() - latest).max(0) as f64);

        let short_stint_count = if candidate.employment_history.len() >= SHORT_STINT_MIN_HISTORY {
            candidate
                .employment_history
                .iter()
                .filter(|entry| {
                    entry
                        .duration_months
                        .map(|months| months < SHORT_STINT_MONTHS)
                        .unwrap_or(false)
                })
                .count() as u32
        } else {
            0
        };

        let has_career_progression = candidate.employment_history.len() >= 2
            && candidate.employment_history.iter().any(|entry| {
                let title = normalized(&entry.job_title);
                PROGRESSION_KEYWORDS.iter().any(|kw| title.contains(kw))
            });

        let job_industry = normalized(&job.industry);
        let industry_continuity_count = candidate
            .employment_history
            .iter()
            .take_while(|entry| {
                entry
                    .industry
                    .as_deref()
                    .map(|industry| normalized(industry) == job_industry)
                    .unwrap_or(false)
            })
            .count() as u32;

        Self {
            gcc_experience_years,
            required_skill_count: job.required_skills.len(),
            required_skill_match_rate: skills.required_match_rate,
            experience_over_max_years,
            salary_position,
            years_since_graduation,
            short_stint_count,
            has_career_progression,
            industry_continuity_count,
        }
    }

    /// Numeric view of a feature. None for a boolean key, and for
    /// `YearsSinceGraduation` when no graduation year is known; a condition
    /// on an absent value never holds.
    pub fn numeric(&self, key: FeatureKey) -> Option<f64> {
        match key {
            FeatureKey::GccExperienceYears => Some(self.gcc_experience_years),
            FeatureKey::RequiredSkillCount => Some(self.required_skill_count as f64),
            FeatureKey::RequiredSkillMatchRate => Some(self.required_skill_match_rate),
            FeatureKey::ExperienceOverMaxYears => Some(self.experience_over_max_years),
            FeatureKey::SalaryPosition => Some(self.salary_position),
            FeatureKey::YearsSinceGraduation => self.years_since_graduation,
            FeatureKey::ShortStintCount => Some(self.short_stint_count as f64),
            FeatureKey::IndustryContinuityCount => Some(self.industry_continuity_count as f64),
            FeatureKey::HasCareerProgression => None,
        }
    }

    pub fn flag(&self, key: FeatureKey) -> Option<bool> {
        match key {
            FeatureKey::HasCareerProgression => Some(self.has_career_progression),
            _ => None,
        }
    }

    /// Display form of a feature value for the triggering snapshots.
    pub fn display(&self, key: FeatureKey) -> String {
        match key {
            FeatureKey::HasCareerProgression => self.has_career_progression.to_string(),
            FeatureKey::YearsSinceGraduation => match self.years_since_graduation {
                Some(years) => format!("{years:.1}"),
                None => "unknown".to_string(),
            },
            FeatureKey::RequiredSkillCount => self.required_skill_count.to_string(),
            FeatureKey::ShortStintCount => self.short_stint_count.to_string(),
            FeatureKey::IndustryContinuityCount => self.industry_continuity_count.to_string(),
            other => format!("{:.2}", self.numeric(other).unwrap_or(0.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::evaluation::domain::{Candidate, CandidateId, EducationRecord, EmploymentRecord, Job, JobId};
    use crate::evaluation::scoring::skills::SkillsBreakdown;

    fn job() -> Job {
        Job {
            job_id: JobId("job-f".to_string()),
            company_name: None,
            country: "UAE".to_string(),
            state: None,
            city: None,
            title: "Planner".to_string(),
            industry: "Logistics".to_string(),
            sub_industry: None,
            functional_area: "Operations".to_string(),
            min_experience_years: 3,
            max_experience_years: Some(6),
            require_gcc_experience: false,
            salary_min: 10_000,
            salary_max: 20_000,
            currency: "AED".to_string(),
            required_skills: vec!["Logistics Planning".to_string()],
            preferred_skills: Vec::new(),
            required_education: None,
            preferred_nationalities: Vec::new(),
            job_description: "Plan shipments".to_string(),
            desired_candidate_profile: None,
        }
    }

    fn candidate() -> Candidate {
        Candidate {
            candidate_id: CandidateId("cand-f".to_string()),
            full_name: None,
            nationality: "Indian".to_string(),
            current_country: "UAE".to_string(),
            visa_status: Some("Work Visa".to_string()),
            visa_expiry: None,
            current_salary: None,
            expected_salary: 15_000,
            currency: "AED".to_string(),
            total_experience_years: 8.0,
            gcc_experience_years: Some(3.0),
            skills: vec!["Logistics Planning".to_string()],
            education_level: Some("Bachelors".to_string()),
            education_history: Vec::new(),
            employment_history: Vec::new(),
            employment_summary: None,
            cv_text: None,
        }
    }

    fn breakdown(rate: f64) -> SkillsBreakdown {
        SkillsBreakdown {
            matched_required: Vec::new(),
            matched_preferred: Vec::new(),
            missing_required: Vec::new(),
            missing_preferred: Vec::new(),
            required_match_score: rate * 100.0,
            preferred_match_score: 100.0,
            required_match_rate: rate,
            exact_matches: 0,
            synonym_matches: 0,
            semantic_matches: 0,
        }
    }

    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date")
    }

    fn stint(months: u32, title: &str, industry: Option<&str>) -> EmploymentRecord {
        EmploymentRecord {
            company_name: "Co".to_string(),
            job_title: title.to_string(),
            industry: industry.map(str::to_string),
            duration_months: Some(months),
            is_current: false,
        }
    }

    #[test]
    fn derives_salary_position_and_overqualification() {
        let features = EvaluationFeatures::derive(&job(), &candidate(), &breakdown(1.0), reference_date());

        assert!((features.salary_position - 0.5).abs() < 1e-9);
        assert!((features.experience_over_max_years - 2.0).abs() < 1e-9);
        assert_eq!(features.gcc_experience_years, 3.0);
        assert_eq!(features.required_skill_count, 1);
    }

    #[test]
    fn degenerate_salary_range_defaults_to_midpoint() {
        let mut job = job();
        job.salary_max = job.salary_min;
        let features = EvaluationFeatures::derive(&job, &candidate(), &breakdown(1.0), reference_date());
        assert_eq!(features.salary_position, 0.5);
    }

    #[test]
    fn short_stints_only_count_with_three_or_more_jobs() {
        let mut candidate = candidate();
        candidate.employment_history = vec![
            stint(12, "Analyst", None),
            stint(18, "Coordinator", None),
        ];
        let features = EvaluationFeatures::derive(&job(), &candidate, &breakdown(1.0), reference_date());
        assert_eq!(features.short_stint_count, 0);

        candidate.employment_history.push(stint(10, "Clerk", None));
        let features = EvaluationFeatures::derive(&job(), &candidate, &breakdown(1.0), reference_date());
        assert_eq!(features.short_stint_count, 3);
    }

    #[test]
    fn career_progression_needs_keyword_titles() {
        let mut candidate = candidate();
        candidate.employment_history = vec![
            stint(30, "Logistics Manager", None),
            stint(30, "Analyst", None),
        ];
        let features = EvaluationFeatures::derive(&job(), &candidate, &breakdown(1.0), reference_date());
        assert!(features.has_career_progression);
    }

    #[test]
    fn industry_continuity_stops_at_first_mismatch() {
        let mut candidate = candidate();
        candidate.employment_history = vec![
            stint(30, "Planner", Some("Logistics")),
            stint(30, "Planner", Some("Retail")),
            stint(30, "Planner", Some("Logistics")),
        ];
        let features = EvaluationFeatures::derive(&job(), &candidate, &breakdown(1.0), reference_date());
        assert_eq!(features.industry_continuity_count, 1);
    }

    #[test]
    fn graduation_recency_uses_latest_degree() {
        let mut candidate = candidate();
        candidate.education_history = vec![
            EducationRecord {
                education_level: "Bachelors".to_string(),
                field_of_study: None,
                institution: None,
                graduation_year: Some(2015),
            },
            EducationRecord {
                education_level: "Masters".to_string(),
                field_of_study: None,
                institution: None,
                graduation_year: Some(2024),
            },
        ];
        let features = EvaluationFeatures::derive(&job(), &candidate, &breakdown(1.0), reference_date());
        assert_eq!(features.years_since_graduation, Some(2.0));
    }
}
