use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Candidate, Job};
use super::scoring::Section;

/// Score thresholds shared by decision banding; proximity to any of them
/// lowers confidence.
pub const DECISION_BOUNDARIES: [u8; 3] = [85, 60, 40];

const COMPLETENESS_WEIGHT: f64 = 0.40;
const AGREEMENT_WEIGHT: f64 = 0.35;
const BOUNDARY_WEIGHT: f64 = 0.25;

const MAX_UNCERTAINTY_FACTORS: usize = 5;
const MAX_MISSING_FIELD_FACTORS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ConfidenceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
            ConfidenceLevel::VeryHigh => "very_high",
        }
    }

    fn from_score(score: f64) -> Self {
        if score >= 0.85 {
            ConfidenceLevel::VeryHigh
        } else if score >= 0.70 {
            ConfidenceLevel::High
        } else if score >= 0.50 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

/// Composite uncertainty assessment for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceMetrics {
    pub level: ConfidenceLevel,
    pub confidence_score: f64,
    pub signal_agreement: f64,
    pub data_completeness: f64,
    /// Ranked, capped list of uncertainty factor tags.
    pub uncertainty_factors: Vec<String>,
}

/// Quantify how trustworthy the final score is, from data completeness,
/// inter-signal agreement, and distance to the decision boundaries.
pub fn assess(
    total_score: u8,
    section_scores: &BTreeMap<Section, u8>,
    job: &Job,
    candidate: &Candidate,
) -> ConfidenceMetrics {
    let (data_completeness, critical_missing) = assess_data_completeness(job, candidate);
    let signal_agreement = signal_agreement(section_scores);
    let boundary_confidence = boundary_distance(total_score);

    let confidence_score = (data_completeness * COMPLETENESS_WEIGHT
        + signal_agreement * AGREEMENT_WEIGHT
        + boundary_confidence * BOUNDARY_WEIGHT)
        .clamp(0.0, 1.0);

    let uncertainty_factors = uncertainty_factors(
        data_completeness,
        &critical_missing,
        signal_agreement,
        boundary_confidence,
        job,
        candidate,
    );

    ConfidenceMetrics {
        level: ConfidenceLevel::from_score(confidence_score),
        confidence_score,
        signal_agreement,
        data_completeness,
        uncertainty_factors,
    }
}

/// Populated critical fields over total critical fields. A zero count or an
/// empty list counts as unpopulated, matching how sparse ATS records look in
/// practice.
fn assess_data_completeness(job: &Job, candidate: &Candidate) -> (f64, Vec<String>) {
    let candidate_fields: [(&str, bool); 5] = [
        (
            "candidate.total_experience_years",
            candidate.total_experience_years > 0.0,
        ),
        ("candidate.skills", !candidate.skills.is_empty()),
        ("candidate.expected_salary", candidate.expected_salary > 0),
        ("candidate.nationality", !candidate.nationality.trim().is_empty()),
        (
            "candidate.current_country",
            !candidate.current_country.trim().is_empty(),
        ),
    ];

    let job_fields: [(&str, bool); 4] = [
        ("job.required_skills", !job.required_skills.is_empty()),
        ("job.min_experience_years", job.min_experience_years > 0),
        ("job.salary_min", job.salary_min > 0),
        ("job.salary_max", job.salary_max > 0),
    ];

    let total = candidate_fields.len() + job_fields.len();
    let mut populated = 0;
    let mut missing = Vec::new();

    for (name, is_populated) in candidate_fields.into_iter().chain(job_fields) {
        if is_populated {
            populated += 1;
        } else {
            missing.push(name.to_string());
        }
    }

    (populated as f64 / total as f64, missing)
}

/// Agreement between scoring signals as 1 minus the normalized coefficient
/// of variation. Neutral 0.5 with fewer than two signals; a zero mean means
/// the signals agree perfectly (all zero).
fn signal_agreement(section_scores: &BTreeMap<Section, u8>) -> f64 {
    if section_scores.len() < 2 {
        return 0.5;
    }

    let scores: Vec<f64> = section_scores.values().map(|s| *s as f64).collect();
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;

    if mean == 0.0 {
        return 1.0;
    }

    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / scores.len() as f64;
    let coefficient_of_variation = variance.sqrt() / mean;

    (1.0 - coefficient_of_variation / 0.5).clamp(0.0, 1.0)
}

/// Confidence from distance to the nearest decision boundary; 10+ points
/// away is full confidence.
fn boundary_distance(score: u8) -> f64 {
    let min_distance = DECISION_BOUNDARIES
        .iter()
        .map(|boundary| (score as f64 - *boundary as f64).abs())
        .fold(f64::INFINITY, f64::min);

    (min_distance / 10.0).clamp(0.0, 1.0)
}

fn uncertainty_factors(
    data_completeness: f64,
    critical_missing: &[String],
    signal_agreement: f64,
    boundary_confidence: f64,
    job: &Job,
    candidate: &Candidate,
) -> Vec<String> {
    let mut factors = Vec::new();

    if data_completeness < 0.8 {
        factors.push(format!(
            "incomplete_data ({}% complete)",
            (data_completeness * 100.0) as u32
        ));
    }

    for missing in critical_missing.iter().take(MAX_MISSING_FIELD_FACTORS) {
        factors.push(format!("missing_{}", missing.replace('.', "_")));
    }

    if signal_agreement < 0.6 {
        factors.push(format!("conflicting_signals (agreement={signal_agreement:.2})"));
    }

    if boundary_confidence < 0.3 {
        factors.push("score_near_decision_boundary".to_string());
    }

    if candidate.total_experience_years == 0.0 {
        factors.push("no_work_experience".to_string());
    }

    if candidate.skills.is_empty() {
        factors.push("no_skills_listed".to_string());
    }

    if let Some(max_years) = job.max_experience_years {
        if candidate.total_experience_years > max_years as f64 * 1.5 {
            factors.push("significant_overqualification".to_string());
        }
    }

    if candidate.expected_salary as f64 > job.salary_max as f64 * 1.2 {
        factors.push("salary_expectation_very_high".to_string());
    }

    factors.truncate(MAX_UNCERTAINTY_FACTORS);
    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(entries: &[(Section, u8)]) -> BTreeMap<Section, u8> {
        entries.iter().copied().collect()
    }

    #[test]
    fn agreement_is_neutral_with_one_signal() {
        assert_eq!(signal_agreement(&sections(&[(Section::Skills, 80)])), 0.5);
    }

    #[test]
    fn agreement_is_perfect_for_identical_signals() {
        let agreement = signal_agreement(&sections(&[
            (Section::Skills, 80),
            (Section::Experience, 80),
            (Section::Semantic, 80),
        ]));
        assert!((agreement - 1.0).abs() < 1e-9);
    }

    #[test]
    fn agreement_is_perfect_for_all_zero_signals() {
        let agreement = signal_agreement(&sections(&[
            (Section::Skills, 0),
            (Section::Experience, 0),
        ]));
        assert_eq!(agreement, 1.0);
    }

    #[test]
    fn boundary_distance_is_zero_on_a_threshold() {
        assert_eq!(boundary_distance(60), 0.0);
        assert_eq!(boundary_distance(85), 0.0);
    }

    #[test]
    fn boundary_distance_saturates_ten_points_out() {
        assert_eq!(boundary_distance(50), 1.0);
        assert_eq!(boundary_distance(100), 1.0);
    }
}
