use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::features::{EvaluationFeatures, FeatureKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    Bonus,
    Penalty,
}

/// Declarative condition over one derived feature. Conditions carry no code,
/// so the whole rule table can be enumerated and tested exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RuleCondition {
    /// Numeric feature >= min.
    AtLeast { feature: FeatureKey, min: f64 },
    /// Numeric feature <= max.
    AtMost { feature: FeatureKey, max: f64 },
    /// Numeric feature < max (strict).
    Below { feature: FeatureKey, max: f64 },
    /// Numeric feature within [min, max], inclusive.
    Within {
        feature: FeatureKey,
        min: f64,
        max: f64,
    },
    /// Boolean feature equals the expectation.
    Flag { feature: FeatureKey, expected: bool },
}

impl RuleCondition {
    pub fn feature(&self) -> FeatureKey {
        match self {
            RuleCondition::AtLeast { feature, .. }
            | RuleCondition::AtMost { feature, .. }
            | RuleCondition::Below { feature, .. }
            | RuleCondition::Within { feature, .. }
            | RuleCondition::Flag { feature, .. } => *feature,
        }
    }

    /// A condition over an absent value (e.g. unknown graduation year) never
    /// holds.
    pub fn holds(&self, features: &EvaluationFeatures) -> bool {
        match self {
            RuleCondition::AtLeast { feature, min } => features
                .numeric(*feature)
                .map(|value| value >= *min)
                .unwrap_or(false),
            RuleCondition::AtMost { feature, max } => features
                .numeric(*feature)
                .map(|value| value <= *max)
                .unwrap_or(false),
            RuleCondition::Below { feature, max } => features
                .numeric(*feature)
                .map(|value| value < *max)
                .unwrap_or(false),
            RuleCondition::Within { feature, min, max } => features
                .numeric(*feature)
                .map(|value| value >= *min && value <= *max)
                .unwrap_or(false),
            RuleCondition::Flag { feature, expected } => features
                .flag(*feature)
                .map(|value| value == *expected)
                .unwrap_or(false),
        }
    }
}

/// One entry in the contextual adjustment rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentRule {
    pub rule_id: String,
    pub rule_name: String,
    pub description: String,
    pub kind: AdjustmentKind,
    pub points: f64,
    pub priority: i32,
    pub conditions: Vec<RuleCondition>,
}

/// Audit record for a rule whose conditions all held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentRecord {
    pub rule_id: String,
    pub rule_name: String,
    pub kind: AdjustmentKind,
    pub points: f64,
    pub reason: String,
    /// Feature values that triggered the rule, keyed by feature label.
    pub triggered_by: BTreeMap<String, String>,
}

/// Prioritized bonus/penalty rubric applied on top of the base score.
///
/// Rules are non-exclusive: every rule whose conditions hold fires, the
/// deltas sum, and the result is clamped to [0, 100]. Evaluation order is
/// highest priority first so the audit trail reads most-significant-first.
#[derive(Debug, Clone)]
pub struct ContextualAdjuster {
    rules: Vec<AdjustmentRule>,
}

impl Default for ContextualAdjuster {
    fn default() -> Self {
        Self::new(builtin_rules())
    }
}

impl ContextualAdjuster {
    pub fn new(mut rules: Vec<AdjustmentRule>) -> Self {
        rules.sort_by(|a, b| b.priority.cmp(&a.priority));
        Self { rules }
    }

    pub fn rules(&self) -> &[AdjustmentRule] {
        &self.rules
    }

    pub fn apply(
        &self,
        base_score: u8,
        features: &EvaluationFeatures,
    ) -> (u8, Vec<AdjustmentRecord>) {
        let mut records = Vec::new();
        let mut total_adjustment = 0.0;

        for rule in &self.rules {
            if !rule.conditions.iter().all(|cond| cond.holds(features)) {
                continue;
            }

            let triggered_by = rule
                .conditions
                .iter()
                .map(|cond| {
                    let key = cond.feature();
                    (key.label().to_string(), features.display(key))
                })
                .collect();

            records.push(AdjustmentRecord {
                rule_id: rule.rule_id.clone(),
                rule_name: rule.rule_name.clone(),
                kind: rule.kind,
                points: rule.points,
                reason: rule.description.clone(),
                triggered_by,
            });
            total_adjustment += rule.points;
        }

        let adjusted = (base_score as f64 + total_adjustment)
            .clamp(0.0, 100.0)
            .round() as u8;

        (adjusted, records)
    }
}

/// The built-in rubric, tuned for GCC logistics recruitment.
pub fn builtin_rules() -> Vec<AdjustmentRule> {
    fn rule(
        rule_id: &str,
        rule_name: &str,
        description: &str,
        kind: AdjustmentKind,
        points: f64,
        priority: i32,
        conditions: Vec<RuleCondition>,
    ) -> AdjustmentRule {
        AdjustmentRule {
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            description: description.to_string(),
            kind,
            points,
            priority,
            conditions,
        }
    }

    vec![
        rule(
            "GCC_EXP_BONUS",
            "GCC Experience Bonus",
            "Bonus for candidates with GCC work experience (critical for UAE roles)",
            AdjustmentKind::Bonus,
            5.0,
            10,
            vec![RuleCondition::AtLeast {
                feature: FeatureKey::GccExperienceYears,
                min: 1.0,
            }],
        ),
        rule(
            "GCC_EXP_MAJOR_BONUS",
            "Extensive GCC Experience",
            "Major bonus for candidates with 5+ years GCC experience",
            AdjustmentKind::Bonus,
            8.0,
            11,
            vec![RuleCondition::AtLeast {
                feature: FeatureKey::GccExperienceYears,
                min: 5.0,
            }],
        ),
        rule(
            "PERFECT_SKILLS",
            "Perfect Skill Match",
            "Bonus when candidate matches 100% of required skills",
            AdjustmentKind::Bonus,
            5.0,
            15,
            vec![
                RuleCondition::AtLeast {
                    feature: FeatureKey::RequiredSkillCount,
                    min: 1.0,
                },
                RuleCondition::AtLeast {
                    feature: FeatureKey::RequiredSkillMatchRate,
                    min: 1.0,
                },
            ],
        ),
        rule(
            "CRITICAL_SKILL_GAP",
            "Critical Skill Missing",
            "Penalty when critical required skills are missing",
            AdjustmentKind::Penalty,
            -8.0,
            20,
            vec![
                RuleCondition::AtLeast {
                    feature: FeatureKey::RequiredSkillCount,
                    min: 1.0,
                },
                RuleCondition::Below {
                    feature: FeatureKey::RequiredSkillMatchRate,
                    max: 0.6,
                },
            ],
        ),
        rule(
            "SLIGHT_OVERQUALIFIED_BONUS",
            "Slight Overqualification (Good)",
            "Small bonus for being 1-2 years over max experience (shows ambition)",
            AdjustmentKind::Bonus,
            2.0,
            5,
            vec![RuleCondition::Within {
                feature: FeatureKey::ExperienceOverMaxYears,
                min: 1.0,
                max: 2.0,
            }],
        ),
        rule(
            "SEVERE_OVERQUALIFIED_PENALTY",
            "Severe Overqualification (Flight Risk)",
            "Penalty for being 5+ years over max (flight risk, boredom)",
            AdjustmentKind::Penalty,
            -5.0,
            6,
            vec![RuleCondition::AtLeast {
                feature: FeatureKey::ExperienceOverMaxYears,
                min: 5.0,
            }],
        ),
        rule(
            "SALARY_SWEET_SPOT",
            "Salary Sweet Spot",
            "Bonus when expected salary is at midpoint of range",
            AdjustmentKind::Bonus,
            3.0,
            7,
            vec![RuleCondition::Within {
                feature: FeatureKey::SalaryPosition,
                min: 0.45,
                max: 0.55,
            }],
        ),
        rule(
            "SALARY_FLEXIBILITY",
            "Salary Flexibility",
            "Small bonus for expected salary below midpoint (negotiation room)",
            AdjustmentKind::Bonus,
            1.5,
            6,
            vec![RuleCondition::Below {
                feature: FeatureKey::SalaryPosition,
                max: 0.45,
            }],
        ),
        rule(
            "RECENT_EDUCATION",
            "Recent Graduate",
            "Bonus for recent education (graduated within last 3 years)",
            AdjustmentKind::Bonus,
            2.0,
            3,
            vec![RuleCondition::AtMost {
                feature: FeatureKey::YearsSinceGraduation,
                max: 3.0,
            }],
        ),
        rule(
            "JOB_HOPPING",
            "Job Hopping Pattern",
            "Penalty for frequent job changes (3+ stints under 24 months)",
            AdjustmentKind::Penalty,
            -4.0,
            8,
            vec![RuleCondition::AtLeast {
                feature: FeatureKey::ShortStintCount,
                min: 3.0,
            }],
        ),
        rule(
            "CAREER_PROGRESSION",
            "Clear Career Progression",
            "Bonus for consistent upward career trajectory",
            AdjustmentKind::Bonus,
            3.0,
            4,
            vec![RuleCondition::Flag {
                feature: FeatureKey::HasCareerProgression,
                expected: true,
            }],
        ),
        rule(
            "INDUSTRY_CONTINUITY",
            "Industry Continuity",
            "Bonus when last 2+ jobs are in same industry as posting",
            AdjustmentKind::Bonus,
            3.0,
            9,
            vec![RuleCondition::AtLeast {
                feature: FeatureKey::IndustryContinuityCount,
                min: 2.0,
            }],
        ),
    ]
}
