//! The evaluation pipeline: gate, section scorers, weighting, aggregation,
//! contextual adjustment, interaction detection, confidence, and the final
//! decision category.

pub mod adjust;
pub mod aggregate;
pub mod confidence;
pub mod domain;
pub mod explain;
pub mod features;
pub mod gate;
pub mod interactions;
pub mod router;
pub mod scoring;
pub mod weights;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::resources::EngineResources;

use adjust::{AdjustmentRecord, ContextualAdjuster};
use aggregate::AggregationError;
use confidence::{ConfidenceLevel, ConfidenceMetrics};
use domain::{Candidate, CandidateId, Job, JobId};
use features::EvaluationFeatures;
use gate::GateOutcome;
use interactions::FeatureInteraction;
use scoring::skills::SkillsBreakdown;
use scoring::Section;
use weights::JobLevel;

pub use adjust::{AdjustmentKind, AdjustmentRule, RuleCondition};
pub use gate::HardRule;

/// Terminal decision category for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Rejected,
    StrongMatch,
    PotentialMatch,
    WeakMatch,
    LowConfidence,
    NotRecommended,
}

impl Decision {
    pub const fn label(self) -> &'static str {
        match self {
            Decision::Rejected => "REJECTED",
            Decision::StrongMatch => "STRONG_MATCH",
            Decision::PotentialMatch => "POTENTIAL_MATCH",
            Decision::WeakMatch => "WEAK_MATCH",
            Decision::LowConfidence => "LOW_CONFIDENCE",
            Decision::NotRecommended => "NOT_RECOMMENDED",
        }
    }

    /// Band an eligible total score, demoting to `LowConfidence` when the
    /// confidence engine reports a low-trust result. Band boundaries are the
    /// same thresholds the confidence engine measures distance to.
    fn categorize(total_score: u8, confidence_level: ConfidenceLevel) -> Self {
        let banded = if total_score >= 85 {
            Decision::StrongMatch
        } else if total_score >= 60 {
            Decision::PotentialMatch
        } else if total_score >= 40 {
            Decision::WeakMatch
        } else {
            Decision::NotRecommended
        };

        if confidence_level == ConfidenceLevel::Low && banded != Decision::NotRecommended {
            Decision::LowConfidence
        } else {
            banded
        }
    }
}

/// Errors surfaced by the evaluation pipeline. Gate rejections are not
/// errors; they come back as a normal result with `decision == Rejected`.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
}

/// Immutable aggregate of everything one evaluation produced. Created once
/// per call and owned by the caller; nothing here is mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub job_id: JobId,
    pub candidate_id: CandidateId,
    pub decision: Decision,
    pub is_eligible: bool,

    pub total_score: u8,
    pub base_score: u8,
    pub adjusted_score: u8,

    pub section_scores: BTreeMap<Section, u8>,
    pub section_explanations: BTreeMap<Section, String>,
    pub contributions: BTreeMap<Section, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_level: Option<JobLevel>,

    pub rule_trace: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_rule_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<SkillsBreakdown>,
    pub adjustments: Vec<AdjustmentRecord>,
    pub interactions: Vec<FeatureInteraction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<ConfidenceMetrics>,

    pub engine_version: String,
}

/// Orchestrates one Job x Candidate evaluation against the shared read-only
/// resources. A single instance serves any number of concurrent calls.
pub struct Evaluator {
    resources: Arc<EngineResources>,
    adjuster: ContextualAdjuster,
}

impl Evaluator {
    pub fn new(resources: Arc<EngineResources>) -> Self {
        Self::with_adjuster(resources, ContextualAdjuster::default())
    }

    pub fn with_adjuster(resources: Arc<EngineResources>, adjuster: ContextualAdjuster) -> Self {
        Self {
            resources,
            adjuster,
        }
    }

    pub fn resources(&self) -> &EngineResources {
        &self.resources
    }

    /// Run the full pipeline. `today` anchors the visa-expiry and
    /// graduation-recency checks, so identical inputs with the same date
    /// always produce identical results.
    pub fn evaluate(
        &self,
        job: &Job,
        candidate: &Candidate,
        today: NaiveDate,
    ) -> Result<EvaluationResult, EvaluationError> {
        let gate_outcome = gate::evaluate_gate(job, candidate, today);
        if !gate_outcome.is_eligible {
            return Ok(Self::rejected_result(job, candidate, gate_outcome));
        }

        let skills_score = scoring::skills::score(
            &self.resources.taxonomy,
            self.resources.embeddings.as_ref(),
            &job.required_skills,
            &job.preferred_skills,
            &candidate.skills,
        );
        let experience_score = scoring::experience::score(
            job.min_experience_years,
            job.max_experience_years,
            candidate.total_experience_years,
        );
        let education_score = scoring::education::score(candidate.education_level.as_deref());
        let salary_score =
            scoring::salary::score(job.salary_min, job.salary_max, candidate.expected_salary);
        let domain_score = scoring::domain_fit::score(
            &job.industry,
            job.sub_industry.as_deref(),
            candidate.employment_summary.as_deref(),
        );
        let semantic_score = scoring::semantic::score(
            self.resources.embeddings.as_ref(),
            &job.job_description,
            job.desired_candidate_profile.as_deref(),
            candidate.cv_text.as_deref().unwrap_or(""),
        );

        let mut section_scores = BTreeMap::new();
        let mut section_explanations = BTreeMap::new();
        for (section, score) in [
            (Section::Skills, &skills_score.section),
            (Section::Experience, &experience_score),
            (Section::Education, &education_score),
            (Section::Salary, &salary_score),
            (Section::Domain, &domain_score.section),
            (Section::Semantic, &semantic_score),
        ] {
            section_scores.insert(section, score.score);
            section_explanations.insert(section, score.explanation.clone());
        }

        let weight_profile = weights::select_weights(job);
        let aggregation = aggregate::aggregate(&section_scores, &weight_profile.weights)?;

        let evaluation_features =
            EvaluationFeatures::derive(job, candidate, &skills_score.breakdown, today);
        let (adjusted_score, adjustments) = self
            .adjuster
            .apply(aggregation.base_score, &evaluation_features);

        // Interaction detection and signal agreement inspect the weighted
        // sections only; education and salary stay in the audit maps.
        let weighted_sections: BTreeMap<Section, u8> = section_scores
            .iter()
            .filter(|(section, _)| weight_profile.weights.contains_key(*section))
            .map(|(section, score)| (*section, *score))
            .collect();

        let detected = interactions::detect(job, candidate, &weighted_sections);
        let interaction_impact: f64 = detected.iter().map(|i| i.impact).sum();
        let total_score = (adjusted_score as f64 + interaction_impact)
            .clamp(0.0, 100.0)
            .round() as u8;

        let confidence_metrics =
            confidence::assess(total_score, &weighted_sections, job, candidate);
        let decision = Decision::categorize(total_score, confidence_metrics.level);

        let section_explanations =
            explain::merge_contributions(&section_explanations, &aggregation.contributions);

        Ok(EvaluationResult {
            job_id: job.job_id.clone(),
            candidate_id: candidate.candidate_id.clone(),
            decision,
            is_eligible: true,
            total_score,
            base_score: aggregation.base_score,
            adjusted_score,
            section_scores,
            section_explanations,
            contributions: aggregation.contributions,
            job_level: Some(weight_profile.job_level),
            rule_trace: gate_outcome.rule_trace,
            rejection_reason: None,
            rejection_rule_code: None,
            skills: Some(skills_score.breakdown),
            adjustments,
            interactions: detected,
            confidence: Some(confidence_metrics),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    fn rejected_result(job: &Job, candidate: &Candidate, gate: GateOutcome) -> EvaluationResult {
        EvaluationResult {
            job_id: job.job_id.clone(),
            candidate_id: candidate.candidate_id.clone(),
            decision: Decision::Rejected,
            is_eligible: false,
            total_score: 0,
            base_score: 0,
            adjusted_score: 0,
            section_scores: BTreeMap::new(),
            section_explanations: BTreeMap::new(),
            contributions: BTreeMap::new(),
            job_level: None,
            rule_trace: gate.rule_trace,
            rejection_reason: gate.rejection_reason,
            rejection_rule_code: gate.rejection_rule.map(|rule| rule.code().to_string()),
            skills: None,
            adjustments: Vec::new(),
            interactions: Vec::new(),
            confidence: None,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
