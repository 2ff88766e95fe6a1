use clap::Args;

use candidate_engine::config::AppConfig;
use candidate_engine::error::AppError;
use candidate_engine::evaluation::domain::{
    Candidate, CandidateId, EmploymentRecord, Job, JobId,
};
use candidate_engine::evaluation::explain::readable_trace;
use chrono::{Local, NaiveDate};

use crate::infra::{bootstrap_evaluator, parse_date};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Inflate the sample candidate's experience to demonstrate a hard
    /// rejection instead of a scored result.
    #[arg(long)]
    pub(crate) overqualified: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let evaluator = bootstrap_evaluator(&config.engine);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let job = sample_job();
    let mut candidate = sample_candidate();
    if args.overqualified {
        candidate.total_experience_years = 22.0;
    }

    let result = evaluator.evaluate(&job, &candidate, today)?;

    println!("== Candidate Evaluation Demo ==");
    println!(
        "Job: {} ({})",
        job.title,
        job.company_name.as_deref().unwrap_or("unknown company")
    );
    println!(
        "Candidate: {} ({:.1}y experience)",
        candidate.full_name.as_deref().unwrap_or("unnamed"),
        candidate.total_experience_years
    );
    println!();
    println!("Decision: {}", result.decision.label());
    println!(
        "Scores: base {} -> adjusted {} -> total {}",
        result.base_score, result.adjusted_score, result.total_score
    );

    if let Some(reason) = &result.rejection_reason {
        println!(
            "Rejected by {}: {reason}",
            result.rejection_rule_code.as_deref().unwrap_or("?")
        );
    }

    if !result.section_scores.is_empty() {
        println!();
        println!("Section scores:");
        for (section, score) in &result.section_scores {
            let explanation = result
                .section_explanations
                .get(section)
                .map(String::as_str)
                .unwrap_or("");
            println!("  {:<12} {:>3}  {}", section.label(), score, explanation);
        }
    }

    if !result.adjustments.is_empty() {
        println!();
        println!("Contextual adjustments:");
        for adjustment in &result.adjustments {
            println!(
                "  {:+.1}  {} ({})",
                adjustment.points, adjustment.rule_name, adjustment.reason
            );
        }
    }

    if !result.interactions.is_empty() {
        println!();
        println!("Feature interactions:");
        for interaction in &result.interactions {
            println!(
                "  {:+.1}  {}  {}",
                interaction.impact, interaction.interaction_id, interaction.explanation
            );
        }
    }

    if let Some(confidence) = &result.confidence {
        println!();
        println!(
            "Confidence: {} ({:.2}; agreement {:.2}, completeness {:.2})",
            confidence.level.label(),
            confidence.confidence_score,
            confidence.signal_agreement,
            confidence.data_completeness
        );
        for factor in &confidence.uncertainty_factors {
            println!("  uncertainty: {factor}");
        }
    }

    println!();
    println!("Rule trace:");
    for line in readable_trace(&result.rule_trace) {
        println!("  {line}");
    }

    Ok(())
}

fn sample_job() -> Job {
    Job {
        job_id: JobId("demo-job-001".to_string()),
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
            "Transportation Management".to_string(),
        ],
        preferred_skills: vec![
            "SAP".to_string(),
            "Power BI".to_string(),
            "Six Sigma".to_string(),
        ],
        required_education: Some("Bachelors".to_string()),
        preferred_nationalities: Vec::new(),
        job_description: "Lead supply chain operations for the GCC region, owning freight \
                          forwarding, inventory and carrier performance."
            .to_string(),
        desired_candidate_profile: Some(
            "Seasoned logistics leader with hands-on GCC distribution experience".to_string(),
        ),
    }
}

fn sample_candidate() -> Candidate {
    Candidate {
        candidate_id: CandidateId("demo-cand-001".to_string()),
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
            "Transportation Management".to_string(),
            "SAP".to_string(),
            "Power BI".to_string(),
            "Six Sigma Green Belt".to_string(),
        ],
        education_level: Some("Bachelors".to_string()),
        education_history: Vec::new(),
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
