//! Pure section scorers. Each maps a job excerpt and a candidate excerpt to
//! a 0-100 score with a recruiter-facing explanation, substituting neutral
//! defaults for missing optional data instead of raising.

pub mod domain_fit;
pub mod education;
pub mod experience;
pub mod salary;
pub mod semantic;
pub mod skills;

use serde::{Deserialize, Serialize};

/// Scoring sections tracked by the engine. Ordered so section maps serialize
/// stably.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Skills,
    Experience,
    Education,
    Salary,
    Domain,
    Semantic,
}

impl Section {
    pub const fn label(self) -> &'static str {
        match self {
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Salary => "salary",
            Section::Domain => "domain",
            Section::Semantic => "semantic",
        }
    }
}

/// Single-section result: an integer score in [0, 100] and its explanation.
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScore {
    pub score: u8,
    pub explanation: String,
}

impl SectionScore {
    pub fn new(score: u8, explanation: impl Into<String>) -> Self {
        Self {
            score: score.min(100),
            explanation: explanation.into(),
        }
    }
}

/// Round-half-away-from-zero to an integer score, clamped to [0, 100].
pub(crate) fn round_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
