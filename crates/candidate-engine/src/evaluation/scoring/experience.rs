use super::{round_score, SectionScore};

/// Experience alignment between the job's bounds and the candidate's years.
///
/// Without a ceiling, anything at or above the minimum earns full marks.
/// Within a bounded range the score maps linearly onto [70, 100]; above the
/// ceiling the score is a flat mild 85 because the gate already rejected
/// extreme overqualification.
pub fn score(
    min_experience_years: u32,
    max_experience_years: Option<u32>,
    candidate_experience_years: f64,
) -> SectionScore {
    let candidate_years = candidate_experience_years.max(0.0);

    let Some(max_years) = max_experience_years else {
        return SectionScore::new(
            100,
            format!(
                "{candidate_years:.1} years experience against minimum requirement of {min_experience_years} years"
            ),
        );
    };

    if candidate_years <= max_years as f64 {
        let range_span = max_years.saturating_sub(min_experience_years);
        if range_span == 0 {
            return SectionScore::new(
                100,
                format!(
                    "{candidate_years:.1} years experience matches exact requirement of {min_experience_years} years"
                ),
            );
        }

        let position = (candidate_years - min_experience_years as f64) / range_span as f64;
        let score = round_score(70.0 + position * 30.0);

        return SectionScore::new(
            score,
            format!(
                "{candidate_years:.1} years experience within required range ({min_experience_years}\u{2013}{max_years} years)"
            ),
        );
    }

    SectionScore::new(
        85,
        format!(
            "{candidate_years:.1} years experience exceeds preferred maximum of {max_years} years"
        ),
    )
}
