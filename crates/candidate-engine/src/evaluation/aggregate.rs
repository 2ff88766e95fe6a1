use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::scoring::Section;

/// Contract violations in the aggregation inputs. These indicate a wiring
/// bug in the caller and are never silently defaulted.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AggregationError {
    #[error("section scores cannot be empty")]
    EmptySections,
    #[error("no matching weights for provided section scores")]
    NoMatchingWeights,
}

/// Base score plus the per-section contribution audit (rounded to two
/// decimals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    pub base_score: u8,
    pub contributions: BTreeMap<Section, f64>,
}

/// Combine section scores and weights into the base score.
///
/// Weights are filtered to the sections actually present, then renormalized
/// over that subset. The weighted sum still iterates every section present:
/// sections without an assigned weight contribute 0.0 and show up as such in
/// the audit map.
pub fn aggregate(
    section_scores: &BTreeMap<Section, u8>,
    weights: &BTreeMap<Section, f64>,
) -> Result<Aggregation, AggregationError> {
    if section_scores.is_empty() {
        return Err(AggregationError::EmptySections);
    }

    let active_weights: BTreeMap<Section, f64> = weights
        .iter()
        .filter(|(section, _)| section_scores.contains_key(*section))
        .map(|(section, weight)| (*section, *weight))
        .collect();

    if active_weights.is_empty() {
        return Err(AggregationError::NoMatchingWeights);
    }

    let total_weight: f64 = active_weights.values().sum();
    let normalized_weights: BTreeMap<Section, f64> = active_weights
        .into_iter()
        .map(|(section, weight)| (section, weight / total_weight))
        .collect();

    let mut weighted_sum = 0.0;
    let mut contributions = BTreeMap::new();

    for (section, score) in section_scores {
        let weight = normalized_weights.get(section).copied().unwrap_or(0.0);
        let contribution = *score as f64 * weight;
        contributions.insert(*section, (contribution * 100.0).round() / 100.0);
        weighted_sum += contribution;
    }

    Ok(Aggregation {
        base_score: weighted_sum.round().clamp(0.0, 100.0) as u8,
        contributions,
    })
}
