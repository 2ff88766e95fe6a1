use serde::{Deserialize, Serialize};

use super::SectionScore;
use crate::evaluation::domain::normalized;

const DEFAULT_SCORE: u8 = 75;
const STRONG_MATCH_SCORE: u8 = 95;
const PARTIAL_MATCH_SCORE: u8 = 85;

/// Industry alignment result with the matched domain names kept for audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainScore {
    pub section: SectionScore,
    pub matched_domains: Vec<String>,
}

/// Substring match of the job's industry and sub-industry inside the
/// candidate's free-text summary. Missing text is neutral, not an error.
pub fn score(
    job_industry: &str,
    job_sub_industry: Option<&str>,
    employment_summary: Option<&str>,
) -> DomainScore {
    let Some(summary) = employment_summary.filter(|text| !text.trim().is_empty()) else {
        return DomainScore {
            section: SectionScore::new(
                DEFAULT_SCORE,
                "No employment summary provided; neutral domain score applied",
            ),
            matched_domains: Vec::new(),
        };
    };

    let summary_normalized = normalized(summary);
    let mut matched_domains = Vec::new();

    let industry = normalized(job_industry);
    if !industry.is_empty() && summary_normalized.contains(&industry) {
        matched_domains.push(industry);
    }

    if let Some(sub_industry) = job_sub_industry {
        let sub_industry = normalized(sub_industry);
        if !sub_industry.is_empty() && summary_normalized.contains(&sub_industry) {
            matched_domains.push(sub_industry);
        }
    }

    let section = match matched_domains.len() {
        0 => SectionScore::new(
            DEFAULT_SCORE,
            "No direct industry alignment detected; neutral score applied",
        ),
        1 => SectionScore::new(
            PARTIAL_MATCH_SCORE,
            "Partial alignment with job industry",
        ),
        _ => SectionScore::new(
            STRONG_MATCH_SCORE,
            "Strong alignment with job industry and sub-industry",
        ),
    };

    DomainScore {
        section,
        matched_domains,
    }
}
