use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Candidate, Job};
use super::scoring::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Compensation,
    Amplification,
    PatternDetection,
}

/// A detected nonlinear relationship between section scores and raw
/// attributes that plain weighted averaging would miss. Impacts are additive
/// to the final score; an impact of 0 marks a purely informational pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureInteraction {
    pub interaction_id: String,
    pub features: Vec<String>,
    pub kind: InteractionKind,
    pub impact: f64,
    pub explanation: String,
}

impl FeatureInteraction {
    fn new(
        interaction_id: &str,
        features: &[&str],
        kind: InteractionKind,
        impact: f64,
        explanation: &str,
    ) -> Self {
        Self {
            interaction_id: interaction_id.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            kind,
            impact,
            explanation: explanation.to_string(),
        }
    }
}

/// Detect the five tracked cross-signal patterns over the weighted section
/// scores (skills, experience, semantic, domain) and raw attributes.
pub fn detect(
    job: &Job,
    candidate: &Candidate,
    section_scores: &BTreeMap<Section, u8>,
) -> Vec<FeatureInteraction> {
    let mut interactions = Vec::new();

    let skills = section_scores.get(&Section::Skills).copied().unwrap_or(0);
    let experience = section_scores
        .get(&Section::Experience)
        .copied()
        .unwrap_or(0);
    let semantic = section_scores.get(&Section::Semantic).copied().unwrap_or(0);

    // Exceptional skills offsetting a thin experience record, as long as the
    // candidate is not severely underqualified.
    if skills >= 90
        && experience < 70
        && candidate.total_experience_years >= job.min_experience_years as f64 * 0.7
    {
        interactions.push(FeatureInteraction::new(
            "SKILLS_COMP_EXP",
            &["skills", "experience"],
            InteractionKind::Compensation,
            3.0,
            "Exceptional skills (>90) partially compensate for lower experience. \
             Candidate may be a fast learner or self-taught expert.",
        ));
    }

    // A long record offsetting partial skill coverage.
    if experience >= 90 && (60..85).contains(&skills) {
        if let Some(max_years) = job.max_experience_years {
            if candidate.total_experience_years >= max_years as f64 {
                interactions.push(FeatureInteraction::new(
                    "EXP_COMP_SKILLS",
                    &["experience", "skills"],
                    InteractionKind::Compensation,
                    2.0,
                    "Extensive experience (>max) partially compensates for missing skills. \
                     Senior candidates can learn new technologies quickly.",
                ));
            }
        }
    }

    // Strong skills at a discounted ask.
    if skills >= 85 && candidate.expected_salary as f64 <= job.salary_max as f64 * 0.9 {
        interactions.push(FeatureInteraction::new(
            "SALARY_SKILLS_TRADEOFF",
            &["salary", "skills"],
            InteractionKind::Amplification,
            4.0,
            "Exceptional skills + reasonable salary expectations = highly attractive candidate. \
             This combination increases value significantly.",
        ));
    }

    // Informational only: strong skills with weak semantic alignment.
    if skills >= 75 && semantic < 60 {
        interactions.push(FeatureInteraction::new(
            "CAREER_CHANGER",
            &["semantic", "skills"],
            InteractionKind::PatternDetection,
            0.0,
            "High skills but low semantic match suggests career change. \
             May need extra screening but could be high-potential hire.",
        ));
    }

    // Every tracked signal exceptional at once.
    if !section_scores.is_empty() && section_scores.values().all(|score| *score >= 85) {
        interactions.push(FeatureInteraction::new(
            "PERFECT_CANDIDATE_AMP",
            &["skills", "experience", "semantic"],
            InteractionKind::Amplification,
            5.0,
            "All scoring signals are exceptional (>85). \
             This is a rare perfect match - prioritize immediate contact.",
        ));
    }

    interactions
}
