use std::sync::Arc;

use chrono::NaiveDate;

use crate::evaluation::domain::{
    Candidate, CandidateId, EducationRecord, EmploymentRecord, Job, JobId,
};
use crate::evaluation::Evaluator;
use crate::resources::EngineResources;

/// Fixed reference date so visa and graduation recency checks are stable.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date")
}

pub(super) fn evaluator() -> Evaluator {
    Evaluator::new(Arc::new(EngineResources::default()))
}

/// GCC logistics posting used across the suites.
pub(super) fn logistics_job() -> Job {
    Job {
        job_id: JobId("job-2041".to_string()),
        company_name: Some("Gulf Freight Co".to_string()),
        country: "UAE".to_string(),
        state: None,
        city: Some("Dubai".to_string()),
        title: "Supply Chain Manager - GCC".to_string(),
        industry: "Logistics".to_string(),
        sub_industry: Some("Freight Forwarding".to_string()),
        functional_area: "Operations".to_string(),
        min_experience_years: 5,
        max_experience_years: Some(10),
        require_gcc_experience: true,
        salary_min: 100_000,
        salary_max: 150_000,
        currency: "AED".to_string(),
        required_skills: vec![
            "Supply Chain Management".to_string(),
            "Logistics Planning".to_string(),
            "Inventory Management".to_string(),
            "Transportation Management System".to_string(),
        ],
        preferred_skills: vec![
            "SAP".to_string(),
            "Power BI".to_string(),
            "Six Sigma".to_string(),
        ],
        required_education: None,
        preferred_nationalities: Vec::new(),
        job_description: "Lead end-to-end supply chain operations across the GCC region, \
                          owning freight forwarding, inventory and carrier performance."
            .to_string(),
        desired_candidate_profile: None,
    }
}

/// Strong GCC veteran matching the logistics posting.
pub(super) fn gcc_candidate() -> Candidate {
    Candidate {
        candidate_id: CandidateId("cand-1001".to_string()),
        full_name: Some("Ahmed Al-Mansouri".to_string()),
        nationality: "Emirati".to_string(),
        current_country: "UAE".to_string(),
        visa_status: None,
        visa_expiry: None,
        current_salary: Some(135_000),
        expected_salary: 145_000,
        currency: "AED".to_string(),
        total_experience_years: 8.0,
        gcc_experience_years: Some(8.0),
        skills: vec![
            "Supply Chain Management".to_string(),
            "Logistics Planning".to_string(),
            "Inventory Management".to_string(),
            "Transportation Management System".to_string(),
            "SAP".to_string(),
            "Power BI".to_string(),
            "Six Sigma Green Belt".to_string(),
        ],
        education_level: Some("Bachelors".to_string()),
        education_history: vec![EducationRecord {
            education_level: "Bachelors".to_string(),
            field_of_study: Some("Supply Chain Management".to_string()),
            institution: Some("University of Dubai".to_string()),
            graduation_year: Some(2017),
        }],
        employment_history: vec![
            EmploymentRecord {
                company_name: "Aramex".to_string(),
                job_title: "Supply Chain Manager".to_string(),
                industry: Some("Logistics".to_string()),
                duration_months: Some(48),
                is_current: true,
            },
            EmploymentRecord {
                company_name: "DP World".to_string(),
                job_title: "Logistics Supervisor".to_string(),
                industry: Some("Logistics".to_string()),
                duration_months: Some(48),
                is_current: false,
            },
        ],
        employment_summary: Some(
            "Logistics leader with deep freight forwarding and GCC distribution experience"
                .to_string(),
        ),
        cv_text: Some(
            "Supply chain operations leader covering freight forwarding, inventory planning \
             and carrier management across the GCC region."
                .to_string(),
        ),
    }
}

/// Minimal eligible pair for targeted gate mutations.
pub(super) fn plain_job() -> Job {
    Job {
        job_id: JobId("job-basic".to_string()),
        company_name: None,
        country: "UAE".to_string(),
        state: None,
        city: None,
        title: "Operations Coordinator".to_string(),
        industry: "Logistics".to_string(),
        sub_industry: None,
        functional_area: "Operations".to_string(),
        min_experience_years: 2,
        max_experience_years: None,
        require_gcc_experience: false,
        salary_min: 8_000,
        salary_max: 12_000,
        currency: "AED".to_string(),
        required_skills: vec!["Logistics Planning".to_string()],
        preferred_skills: Vec::new(),
        required_education: None,
        preferred_nationalities: Vec::new(),
        job_description: "Coordinate daily logistics operations".to_string(),
        desired_candidate_profile: None,
    }
}

pub(super) fn plain_candidate() -> Candidate {
    Candidate {
        candidate_id: CandidateId("cand-basic".to_string()),
        full_name: None,
        nationality: "Indian".to_string(),
        current_country: "UAE".to_string(),
        visa_status: Some("Work Visa".to_string()),
        visa_expiry: None,
        current_salary: None,
        expected_salary: 10_000,
        currency: "AED".to_string(),
        total_experience_years: 4.0,
        gcc_experience_years: Some(2.0),
        skills: vec!["Logistics Planning".to_string()],
        education_level: Some("Bachelors".to_string()),
        education_history: Vec::new(),
        employment_history: Vec::new(),
        employment_summary: Some("Logistics coordinator".to_string()),
        cv_text: Some("Coordinates daily logistics operations and carrier bookings".to_string()),
    }
}
