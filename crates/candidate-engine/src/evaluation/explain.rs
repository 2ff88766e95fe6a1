use std::collections::BTreeMap;

use super::scoring::Section;

/// Merge raw section explanations with contribution context so recruiters
/// see both the judgement and its weight in the final number.
pub fn merge_contributions(
    section_explanations: &BTreeMap<Section, String>,
    contributions: &BTreeMap<Section, f64>,
) -> BTreeMap<Section, String> {
    section_explanations
        .iter()
        .map(|(section, explanation)| {
            let merged = match contributions.get(section) {
                Some(contribution) => {
                    format!("{explanation} (contributed {} points)", contribution.round())
                }
                None => explanation.clone(),
            };
            (*section, merged)
        })
        .collect()
}

/// Convert raw gate trace tokens into recruiter-readable lines.
pub fn readable_trace(rule_trace: &[String]) -> Vec<String> {
    rule_trace
        .iter()
        .map(|token| match token.as_str() {
            "PASSED_ALL_HARD_RULES" => {
                "Candidate passed all mandatory eligibility checks".to_string()
            }
            other => format!("Rule executed: {other}"),
        })
        .collect()
}
