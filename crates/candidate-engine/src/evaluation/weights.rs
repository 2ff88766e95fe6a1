use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{normalized, Job};
use super::scoring::Section;

/// Inferred seniority of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobLevel {
    Entry,
    Mid,
    Senior,
    Executive,
    Unknown,
}

impl JobLevel {
    pub const fn label(self) -> &'static str {
        match self {
            JobLevel::Entry => "entry",
            JobLevel::Mid => "mid",
            JobLevel::Senior => "senior",
            JobLevel::Executive => "executive",
            JobLevel::Unknown => "unknown",
        }
    }
}

const EXECUTIVE_KEYWORDS: [&str; 8] = [
    "director",
    "vp",
    "vice president",
    "chief",
    "ceo",
    "coo",
    "cfo",
    "head of",
];

const SENIOR_KEYWORDS: [&str; 7] = ["senior", "sr.", "sr ", "lead", "principal", "staff", "expert"];

const ENTRY_KEYWORDS: [&str; 8] = [
    "junior", "jr.", "jr ", "entry", "trainee", "intern", "graduate", "associate",
];

/// Weight caps applied to the two job-specific boosts.
const BOOSTED_WEIGHT_CAP: f64 = 0.50;
const SKILLS_BOOST_FACTOR: f64 = 1.15;
const SEMANTIC_BOOST_FACTOR: f64 = 1.10;
const SKILLS_BOOST_REQUIRED_COUNT: usize = 10;
const SEMANTIC_BOOST_PROFILE_CHARS: usize = 200;

/// Normalized weight vector over the scored sections plus the level it was
/// derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightProfile {
    pub job_level: JobLevel,
    pub weights: BTreeMap<Section, f64>,
}

/// Infer the job's seniority level. Title keywords win over the
/// experience-requirement fallback; executive keywords outrank senior
/// keywords, which outrank entry keywords.
pub fn determine_job_level(job: &Job) -> JobLevel {
    let title = normalized(&job.title);

    if EXECUTIVE_KEYWORDS.iter().any(|kw| title.contains(kw)) {
        return JobLevel::Executive;
    }
    if SENIOR_KEYWORDS.iter().any(|kw| title.contains(kw)) {
        return JobLevel::Senior;
    }
    if ENTRY_KEYWORDS.iter().any(|kw| title.contains(kw)) {
        return JobLevel::Entry;
    }

    match job.min_experience_years {
        years if years >= 10 => JobLevel::Executive,
        years if years >= 5 => JobLevel::Senior,
        years if years >= 2 => JobLevel::Mid,
        _ => JobLevel::Entry,
    }
}

fn base_profile(level: JobLevel) -> [(Section, f64); 4] {
    match level {
        JobLevel::Entry => [
            (Section::Skills, 0.30),
            (Section::Experience, 0.10),
            (Section::Semantic, 0.40),
            (Section::Domain, 0.20),
        ],
        JobLevel::Mid => [
            (Section::Skills, 0.25),
            (Section::Experience, 0.20),
            (Section::Semantic, 0.30),
            (Section::Domain, 0.25),
        ],
        JobLevel::Senior => [
            (Section::Skills, 0.20),
            (Section::Experience, 0.25),
            (Section::Semantic, 0.25),
            (Section::Domain, 0.30),
        ],
        JobLevel::Executive => [
            (Section::Skills, 0.15),
            (Section::Experience, 0.30),
            (Section::Semantic, 0.20),
            (Section::Domain, 0.35),
        ],
        JobLevel::Unknown => [
            (Section::Skills, 0.40),
            (Section::Experience, 0.20),
            (Section::Semantic, 0.40),
            (Section::Domain, 0.00),
        ],
    }
}

/// Select and normalize the weight profile for a job: level lookup, then the
/// two bounded job-specific boosts, renormalizing after each step so the
/// vector always sums to 1.
pub fn select_weights(job: &Job) -> WeightProfile {
    let job_level = determine_job_level(job);

    let mut weights: BTreeMap<Section, f64> = base_profile(job_level).into_iter().collect();
    renormalize(&mut weights);

    if job.required_skills.len() > SKILLS_BOOST_REQUIRED_COUNT {
        if let Some(weight) = weights.get_mut(&Section::Skills) {
            *weight = (*weight * SKILLS_BOOST_FACTOR).min(BOOSTED_WEIGHT_CAP);
        }
    }

    let profile_chars = job
        .desired_candidate_profile
        .as_deref()
        .map(|text| text.chars().count())
        .unwrap_or(0);
    if profile_chars > SEMANTIC_BOOST_PROFILE_CHARS {
        if let Some(weight) = weights.get_mut(&Section::Semantic) {
            *weight = (*weight * SEMANTIC_BOOST_FACTOR).min(BOOSTED_WEIGHT_CAP);
        }
    }

    renormalize(&mut weights);

    WeightProfile { job_level, weights }
}

fn renormalize(weights: &mut BTreeMap<Section, f64>) {
    let total: f64 = weights.values().sum();
    if total > 0.0 {
        for weight in weights.values_mut() {
            *weight /= total;
        }
    }
}
