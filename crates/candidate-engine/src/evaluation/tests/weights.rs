use super::common::*;
use crate::evaluation::scoring::Section;
use crate::evaluation::weights::{determine_job_level, select_weights, JobLevel};

fn assert_normalized(weights: &std::collections::BTreeMap<Section, f64>) {
    let total: f64 = weights.values().sum();
    assert!(
        (total - 1.0).abs() < 0.01,
        "weights must sum to 1.0, got {total}"
    );
}

#[test]
fn executive_title_keywords_take_precedence() {
    let mut job = plain_job();
    job.title = "Senior Director of Operations".to_string();
    // Contains both a senior and an executive keyword; executive wins.
    assert_eq!(determine_job_level(&job), JobLevel::Executive);
}

#[test]
fn senior_title_keywords_beat_experience_fallback() {
    let mut job = plain_job();
    job.title = "Senior Logistics Analyst".to_string();
    job.min_experience_years = 0;
    assert_eq!(determine_job_level(&job), JobLevel::Senior);
}

#[test]
fn entry_title_keywords_are_detected() {
    let mut job = plain_job();
    job.title = "Graduate Trainee - Operations".to_string();
    job.min_experience_years = 8;
    assert_eq!(determine_job_level(&job), JobLevel::Entry);
}

#[test]
fn experience_fallback_banding() {
    let mut job = plain_job();
    job.title = "Operations Person".to_string();

    job.min_experience_years = 12;
    assert_eq!(determine_job_level(&job), JobLevel::Executive);
    job.min_experience_years = 6;
    assert_eq!(determine_job_level(&job), JobLevel::Senior);
    job.min_experience_years = 3;
    assert_eq!(determine_job_level(&job), JobLevel::Mid);
    job.min_experience_years = 0;
    assert_eq!(determine_job_level(&job), JobLevel::Entry);
}

#[test]
fn every_profile_is_normalized() {
    for title in [
        "Chief Supply Chain Officer",
        "Senior Planner",
        "Junior Coordinator",
        "Operations Person",
    ] {
        let mut job = plain_job();
        job.title = title.to_string();
        let profile = select_weights(&job);
        assert_normalized(&profile.weights);
    }
}

#[test]
fn long_required_skill_list_boosts_skills_weight() {
    let mut job = plain_job();
    job.title = "Operations Person".to_string();
    job.min_experience_years = 3;
    let baseline = select_weights(&job).weights[&Section::Skills];

    job.required_skills = (0..12).map(|i| format!("Skill {i}")).collect();
    let boosted_profile = select_weights(&job);

    assert!(boosted_profile.weights[&Section::Skills] > baseline);
    assert_normalized(&boosted_profile.weights);
}

#[test]
fn long_profile_text_boosts_semantic_weight() {
    let mut job = plain_job();
    job.title = "Operations Person".to_string();
    job.min_experience_years = 3;
    let baseline = select_weights(&job).weights[&Section::Semantic];

    job.desired_candidate_profile = Some("x".repeat(250));
    let boosted_profile = select_weights(&job);

    assert!(boosted_profile.weights[&Section::Semantic] > baseline);
    assert_normalized(&boosted_profile.weights);
}

#[test]
fn boosted_weights_respect_the_cap() {
    let mut job = plain_job();
    job.required_skills = (0..40).map(|i| format!("Skill {i}")).collect();
    job.desired_candidate_profile = Some("y".repeat(5_000));

    let profile = select_weights(&job);
    // Pre-normalization values are capped at 0.50; after renormalization no
    // single section can exceed the cap against the untouched remainder.
    for weight in profile.weights.values() {
        assert!(*weight <= 0.55, "weight {weight} escaped the boost cap");
    }
    assert_normalized(&profile.weights);
}

#[test]
fn gcc_fixture_job_resolves_to_senior_profile() {
    let profile = select_weights(&logistics_job());
    assert_eq!(profile.job_level, JobLevel::Senior);
    assert_normalized(&profile.weights);
    assert_eq!(profile.weights.len(), 4);
}
