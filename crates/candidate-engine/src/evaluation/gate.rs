use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::domain::{normalized, Candidate, Job};

/// Tolerance applied on top of the advertised salary ceiling.
const SALARY_TOLERANCE_PERCENT: f64 = 10.0;
/// Years a candidate may exceed the advertised experience ceiling.
const MAX_EXPERIENCE_TOLERANCE_YEARS: u32 = 3;
/// Visas expiring within this window fail the gate.
const VISA_EXPIRY_WARNING_DAYS: i64 = 90;

/// Phrases that count as work authorization for a candidate located outside
/// the job country. Matched as case-insensitive substrings of the visa
/// status.
const WORK_AUTHORIZATION_PHRASES: [&str; 7] = [
    "work visa",
    "work permit",
    "citizen",
    "permanent resident",
    "pr",
    "nationality",
    "national",
];

/// Keyword-to-rank table for education comparisons. Scanned in declared
/// order; the first keyword contained in the normalized input wins.
pub(crate) const EDUCATION_RANKS: [(&str, u8); 9] = [
    ("phd", 5),
    ("doctorate", 5),
    ("masters", 4),
    ("master", 4),
    ("bachelors", 3),
    ("bachelor", 3),
    ("diploma", 2),
    ("high school", 1),
    ("secondary", 1),
];

/// The eight disqualification rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HardRule {
    LocationAuthorization,
    VisaExpiry,
    SalaryExpectation,
    MinimumExperience,
    MaximumExperience,
    Nationality,
    Education,
    GccExperience,
}

impl HardRule {
    pub const fn code(self) -> &'static str {
        match self {
            HardRule::LocationAuthorization => "HR-001",
            HardRule::VisaExpiry => "HR-002",
            HardRule::SalaryExpectation => "HR-003",
            HardRule::MinimumExperience => "HR-004",
            HardRule::MaximumExperience => "HR-005",
            HardRule::Nationality => "HR-006",
            HardRule::Education => "HR-007",
            HardRule::GccExperience => "HR-008",
        }
    }

    const fn checking_suffix(self) -> &'static str {
        match self {
            HardRule::LocationAuthorization => "CHECKING_LOCATION_AND_VISA",
            HardRule::VisaExpiry => "CHECKING_VISA_EXPIRY",
            HardRule::SalaryExpectation => "CHECKING_SALARY",
            HardRule::MinimumExperience => "CHECKING_MIN_EXPERIENCE",
            HardRule::MaximumExperience => "CHECKING_MAX_EXPERIENCE",
            HardRule::Nationality => "CHECKING_NATIONALITY",
            HardRule::Education => "CHECKING_EDUCATION",
            HardRule::GccExperience => "CHECKING_GCC_EXPERIENCE",
        }
    }
}

/// Outcome of the hard rejection gate, including the full audit trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateOutcome {
    pub is_eligible: bool,
    pub rejection_reason: Option<String>,
    pub rejection_rule: Option<HardRule>,
    pub rule_trace: Vec<String>,
}

impl GateOutcome {
    fn rejected(rule: HardRule, reason: String, mut trace: Vec<String>) -> Self {
        trace.push(format!("{}:FAILED", rule.code()));
        Self {
            is_eligible: false,
            rejection_reason: Some(reason),
            rejection_rule: Some(rule),
            rule_trace: trace,
        }
    }
}

/// Evaluate the ordered disqualification rules HR-001..HR-008.
///
/// The first failing rule terminates the gate; no later rule is checked and
/// no scoring stage runs afterward. `today` anchors the visa expiry window.
pub fn evaluate_gate(job: &Job, candidate: &Candidate, today: NaiveDate) -> GateOutcome {
    let mut trace: Vec<String> = Vec::new();

    let checking = |rule: HardRule, trace: &mut Vec<String>| {
        trace.push(format!("{}:{}", rule.code(), rule.checking_suffix()));
    };
    let passed = |rule: HardRule, trace: &mut Vec<String>| {
        trace.push(format!("{}:PASSED", rule.code()));
    };

    // HR-001: location + work authorization
    checking(HardRule::LocationAuthorization, &mut trace);
    if normalized(&candidate.current_country) != normalized(&job.country) {
        let visa_status = candidate
            .visa_status
            .as_deref()
            .map(normalized)
            .unwrap_or_default();
        let has_work_auth = WORK_AUTHORIZATION_PHRASES
            .iter()
            .any(|phrase| visa_status.contains(phrase));

        if !has_work_auth {
            return GateOutcome::rejected(
                HardRule::LocationAuthorization,
                format!(
                    "Candidate does not have work authorization for {}. Current location: {}, Visa status: {}",
                    job.country,
                    candidate.current_country,
                    candidate.visa_status.as_deref().unwrap_or("Not specified"),
                ),
                trace,
            );
        }
    }
    passed(HardRule::LocationAuthorization, &mut trace);

    // HR-002: visa expiry window
    checking(HardRule::VisaExpiry, &mut trace);
    if let Some(raw_expiry) = candidate.visa_expiry.as_deref() {
        if let Some(expiry) = parse_expiry_date(raw_expiry) {
            let days_until_expiry = (expiry - today).num_days();
            if days_until_expiry < VISA_EXPIRY_WARNING_DAYS {
                return GateOutcome::rejected(
                    HardRule::VisaExpiry,
                    format!(
                        "Candidate's visa expires within {VISA_EXPIRY_WARNING_DAYS} days (Expiry: {raw_expiry})"
                    ),
                    trace,
                );
            }
        }
    }
    passed(HardRule::VisaExpiry, &mut trace);

    // HR-003: salary expectation vs ceiling plus tolerance
    checking(HardRule::SalaryExpectation, &mut trace);
    let salary_threshold = job.salary_max as f64 * (1.0 + SALARY_TOLERANCE_PERCENT / 100.0);
    if candidate.expected_salary as f64 > salary_threshold {
        return GateOutcome::rejected(
            HardRule::SalaryExpectation,
            format!(
                "Candidate expected salary ({} {}) exceeds job maximum ({} {}) by more than {}%",
                candidate.expected_salary,
                candidate.currency,
                job.salary_max,
                job.currency,
                SALARY_TOLERANCE_PERCENT as u32,
            ),
            trace,
        );
    }
    passed(HardRule::SalaryExpectation, &mut trace);

    // HR-004: minimum experience
    checking(HardRule::MinimumExperience, &mut trace);
    if candidate.total_experience_years < job.min_experience_years as f64 {
        return GateOutcome::rejected(
            HardRule::MinimumExperience,
            format!(
                "Candidate experience ({} years) is below minimum requirement ({} years)",
                candidate.total_experience_years, job.min_experience_years,
            ),
            trace,
        );
    }
    passed(HardRule::MinimumExperience, &mut trace);

    // HR-005: maximum experience with overqualification tolerance
    checking(HardRule::MaximumExperience, &mut trace);
    if let Some(max_years) = job.max_experience_years {
        let max_allowed = (max_years + MAX_EXPERIENCE_TOLERANCE_YEARS) as f64;
        if candidate.total_experience_years > max_allowed {
            return GateOutcome::rejected(
                HardRule::MaximumExperience,
                format!(
                    "Candidate is overqualified ({} years exceeds maximum of {} years by more than {} years)",
                    candidate.total_experience_years, max_years, MAX_EXPERIENCE_TOLERANCE_YEARS,
                ),
                trace,
            );
        }
    }
    passed(HardRule::MaximumExperience, &mut trace);

    // HR-006: nationality allow-list
    checking(HardRule::Nationality, &mut trace);
    if !job.preferred_nationalities.is_empty() {
        let candidate_nationality = normalized(&candidate.nationality);
        let allowed = job
            .preferred_nationalities
            .iter()
            .any(|n| normalized(n) == candidate_nationality);

        if !allowed {
            return GateOutcome::rejected(
                HardRule::Nationality,
                format!(
                    "Job requires specific nationality. Candidate nationality: {}, Required: {}",
                    candidate.nationality,
                    job.preferred_nationalities.join(", "),
                ),
                trace,
            );
        }
    }
    passed(HardRule::Nationality, &mut trace);

    // HR-007: education requirement
    checking(HardRule::Education, &mut trace);
    if let Some(required_education) = job.required_education.as_deref() {
        let required_rank = education_rank(required_education);
        let candidate_rank = candidate
            .education_level
            .as_deref()
            .map(education_rank)
            .unwrap_or(0);

        if required_rank > 0 && candidate_rank < required_rank {
            return GateOutcome::rejected(
                HardRule::Education,
                format!(
                    "Candidate education ({}) does not meet minimum requirement ({})",
                    candidate.education_level.as_deref().unwrap_or("Not specified"),
                    required_education,
                ),
                trace,
            );
        }
    }
    passed(HardRule::Education, &mut trace);

    // HR-008: GCC experience requirement
    checking(HardRule::GccExperience, &mut trace);
    if job.require_gcc_experience {
        let gcc_years = candidate.gcc_experience_years.unwrap_or(0.0);
        if gcc_years == 0.0 {
            return GateOutcome::rejected(
                HardRule::GccExperience,
                "Job requires prior GCC work experience, but candidate has none".to_string(),
                trace,
            );
        }
    }
    passed(HardRule::GccExperience, &mut trace);

    trace.push("PASSED_ALL_HARD_RULES".to_string());
    GateOutcome {
        is_eligible: true,
        rejection_reason: None,
        rejection_rule: None,
        rule_trace: trace,
    }
}

/// Map an education string to its rank; 0 when no keyword matches.
pub(crate) fn education_rank(raw: &str) -> u8 {
    let value = normalized(raw);
    for (keyword, rank) in EDUCATION_RANKS {
        if value.contains(keyword) {
            return rank;
        }
    }
    0
}

/// Accepts plain ISO dates and RFC 3339 timestamps (trailing `Z` included).
/// Anything else is treated as absent rather than an error.
fn parse_expiry_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.date_naive())
        .ok()
}
