use serde::{Deserialize, Serialize};

use super::{round_score, SectionScore};
use crate::evaluation::domain::normalized;
use crate::resources::embedding::{cosine_similarity, EmbeddingProvider};
use crate::resources::taxonomy::SkillTaxonomy;

const EXACT_CONFIDENCE: f64 = 1.0;
const SYNONYM_CONFIDENCE: f64 = 0.95;
const SEMANTIC_CONFIDENCE: f64 = 0.85;
/// Cosine floor for counting two skills as a semantic match.
const SEMANTIC_MATCH_THRESHOLD: f32 = 0.75;

const REQUIRED_WEIGHT: f64 = 0.7;
const PREFERRED_WEIGHT: f64 = 0.3;

/// How a job skill was matched against the candidate's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    Exact,
    Synonym,
    Semantic,
}

impl MatchStrategy {
    pub const fn label(self) -> &'static str {
        match self {
            MatchStrategy::Exact => "exact",
            MatchStrategy::Synonym => "synonym",
            MatchStrategy::Semantic => "semantic",
        }
    }

    const fn confidence(self) -> f64 {
        match self {
            MatchStrategy::Exact => EXACT_CONFIDENCE,
            MatchStrategy::Synonym => SYNONYM_CONFIDENCE,
            MatchStrategy::Semantic => SEMANTIC_CONFIDENCE,
        }
    }
}

/// One resolved job-skill/candidate-skill pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub job_skill: String,
    pub candidate_skill: String,
    pub strategy: MatchStrategy,
    pub confidence: f64,
}

/// Matched/missing sets split by required vs preferred, with per-strategy
/// counts and the confidence-weighted sub-scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsBreakdown {
    pub matched_required: Vec<SkillMatch>,
    pub matched_preferred: Vec<SkillMatch>,
    pub missing_required: Vec<String>,
    pub missing_preferred: Vec<String>,
    pub required_match_score: f64,
    pub preferred_match_score: f64,
    /// Count-based fraction of required skills matched; 1.0 when the job
    /// lists none. Consumed by the contextual adjustment rules.
    pub required_match_rate: f64,
    pub exact_matches: usize,
    pub synonym_matches: usize,
    pub semantic_matches: usize,
}

impl SkillsBreakdown {
    fn vacuous() -> Self {
        Self {
            matched_required: Vec::new(),
            matched_preferred: Vec::new(),
            missing_required: Vec::new(),
            missing_preferred: Vec::new(),
            required_match_score: 100.0,
            preferred_match_score: 100.0,
            required_match_rate: 1.0,
            exact_matches: 0,
            synonym_matches: 0,
            semantic_matches: 0,
        }
    }
}

/// Skills section result: the 0-100 score plus the full matching breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsScore {
    pub section: SectionScore,
    pub breakdown: SkillsBreakdown,
}

/// Multi-strategy matching of required and preferred job skills against the
/// candidate's list: exact equality, taxonomy synonym, then embedding cosine
/// above a fixed threshold, each carrying its own confidence weight.
/// Required and preferred match rates combine 70/30 into the overall score.
pub fn score(
    taxonomy: &SkillTaxonomy,
    embeddings: &dyn EmbeddingProvider,
    required_skills: &[String],
    preferred_skills: &[String],
    candidate_skills: &[String],
) -> SkillsScore {
    if required_skills.is_empty() && preferred_skills.is_empty() {
        return SkillsScore {
            section: SectionScore::new(100, "No skills specified for this job"),
            breakdown: SkillsBreakdown::vacuous(),
        };
    }

    let matcher = Matcher::new(taxonomy, embeddings, candidate_skills);

    let (matched_required, missing_required) = matcher.match_all(required_skills);
    let (matched_preferred, missing_preferred) = matcher.match_all(preferred_skills);

    let required_match_score = weighted_rate(&matched_required, required_skills.len());
    let preferred_match_score = weighted_rate(&matched_preferred, preferred_skills.len());

    let overall = if required_skills.is_empty() {
        preferred_match_score
    } else if preferred_skills.is_empty() {
        required_match_score
    } else {
        required_match_score * REQUIRED_WEIGHT + preferred_match_score * PREFERRED_WEIGHT
    };

    let required_match_rate = if required_skills.is_empty() {
        1.0
    } else {
        matched_required.len() as f64 / required_skills.len() as f64
    };

    let mut exact_matches = 0;
    let mut synonym_matches = 0;
    let mut semantic_matches = 0;
    for matched in matched_required.iter().chain(matched_preferred.iter()) {
        match matched.strategy {
            MatchStrategy::Exact => exact_matches += 1,
            MatchStrategy::Synonym => synonym_matches += 1,
            MatchStrategy::Semantic => semantic_matches += 1,
        }
    }

    let explanation = build_explanation(
        required_skills.len(),
        matched_required.len(),
        preferred_skills.len(),
        matched_preferred.len(),
        exact_matches,
        synonym_matches,
        semantic_matches,
    );

    SkillsScore {
        section: SectionScore::new(round_score(overall), explanation),
        breakdown: SkillsBreakdown {
            matched_required,
            matched_preferred,
            missing_required,
            missing_preferred,
            required_match_score,
            preferred_match_score,
            required_match_rate,
            exact_matches,
            synonym_matches,
            semantic_matches,
        },
    }
}

struct Matcher<'a> {
    taxonomy: &'a SkillTaxonomy,
    embeddings: &'a dyn EmbeddingProvider,
    candidate_skills: &'a [String],
    candidate_vectors: Vec<Vec<f32>>,
}

impl<'a> Matcher<'a> {
    fn new(
        taxonomy: &'a SkillTaxonomy,
        embeddings: &'a dyn EmbeddingProvider,
        candidate_skills: &'a [String],
    ) -> Self {
        let refs: Vec<&str> = candidate_skills.iter().map(String::as_str).collect();
        let candidate_vectors = if refs.is_empty() {
            Vec::new()
        } else {
            embeddings.encode(&refs)
        };

        Self {
            taxonomy,
            embeddings,
            candidate_skills,
            candidate_vectors,
        }
    }

    fn match_all(&self, job_skills: &[String]) -> (Vec<SkillMatch>, Vec<String>) {
        let mut matched = Vec::new();
        let mut missing = Vec::new();

        for job_skill in job_skills {
            match self.match_one(job_skill) {
                Some(skill_match) => matched.push(skill_match),
                None => missing.push(job_skill.clone()),
            }
        }

        (matched, missing)
    }

    fn match_one(&self, job_skill: &str) -> Option<SkillMatch> {
        let job_normalized = normalized(job_skill);

        for candidate_skill in self.candidate_skills {
            if normalized(candidate_skill) == job_normalized {
                return Some(self.resolved(job_skill, candidate_skill, MatchStrategy::Exact));
            }
        }

        for candidate_skill in self.candidate_skills {
            if self.taxonomy.are_synonyms(job_skill, candidate_skill) {
                return Some(self.resolved(job_skill, candidate_skill, MatchStrategy::Synonym));
            }
        }

        if self.candidate_skills.is_empty() {
            return None;
        }

        let job_vector = self.embeddings.encode(&[job_skill]).remove(0);
        let mut best: Option<(usize, f32)> = None;
        for (index, candidate_vector) in self.candidate_vectors.iter().enumerate() {
            let similarity = cosine_similarity(&job_vector, candidate_vector);
            if similarity >= SEMANTIC_MATCH_THRESHOLD {
                match best {
                    Some((_, current)) if current >= similarity => {}
                    _ => best = Some((index, similarity)),
                }
            }
        }

        best.map(|(index, _)| {
            self.resolved(
                job_skill,
                &self.candidate_skills[index],
                MatchStrategy::Semantic,
            )
        })
    }

    fn resolved(
        &self,
        job_skill: &str,
        candidate_skill: &str,
        strategy: MatchStrategy,
    ) -> SkillMatch {
        SkillMatch {
            job_skill: job_skill.to_string(),
            candidate_skill: candidate_skill.to_string(),
            strategy,
            confidence: strategy.confidence(),
        }
    }
}

/// Confidence-weighted match rate on a 0-100 scale; 100 for an empty list.
fn weighted_rate(matches: &[SkillMatch], total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }

    let confidence_sum: f64 = matches.iter().map(|m| m.confidence).sum();
    confidence_sum / total as f64 * 100.0
}

fn build_explanation(
    required_total: usize,
    required_matched: usize,
    preferred_total: usize,
    preferred_matched: usize,
    exact: usize,
    synonym: usize,
    semantic: usize,
) -> String {
    let mut parts = Vec::new();

    if required_total > 0 {
        let pct = (required_matched as f64 / required_total as f64 * 100.0).round();
        parts.push(format!(
            "Required skills: {required_matched}/{required_total} matched ({pct:.0}%)"
        ));
    }

    if preferred_total > 0 {
        let pct = (preferred_matched as f64 / preferred_total as f64 * 100.0).round();
        parts.push(format!(
            "Preferred skills: {preferred_matched}/{preferred_total} matched ({pct:.0}%)"
        ));
    }

    let mut strategy_parts = Vec::new();
    if exact > 0 {
        strategy_parts.push(format!("{exact} exact"));
    }
    if synonym > 0 {
        strategy_parts.push(format!("{synonym} synonym"));
    }
    if semantic > 0 {
        strategy_parts.push(format!("{semantic} semantic"));
    }
    if !strategy_parts.is_empty() {
        parts.push(format!("Match types: {}", strategy_parts.join(", ")));
    }

    parts.join(" | ")
}
