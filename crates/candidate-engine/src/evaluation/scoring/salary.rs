use super::{round_score, SectionScore};

const MIN_SCORE: u8 = 75;
const MAX_SCORE: u8 = 100;

/// Soft salary alignment. Hard salary rejection happens upstream in HR-003,
/// so everything reaching here scores between 75 and 100.
pub fn score(salary_min: u32, salary_max: u32, expected_salary: u32) -> SectionScore {
    if salary_max <= salary_min {
        return SectionScore::new(
            MAX_SCORE,
            "Salary range is narrow or undefined; neutral score applied",
        );
    }

    let min = salary_min as f64;
    let max = salary_max as f64;
    let expected = expected_salary as f64;
    let midpoint = (min + max) / 2.0;

    if expected <= min {
        return SectionScore::new(
            MAX_SCORE,
            "Expected salary is at or below minimum range; excellent alignment",
        );
    }

    if expected <= midpoint {
        let ratio = (expected - min) / (midpoint - min);
        let score = round_score(MAX_SCORE as f64 - ratio * 10.0);
        return SectionScore::new(score, "Expected salary is comfortably within job range");
    }

    let ratio = (expected - midpoint) / (max - midpoint);
    let score = round_score(90.0 - ratio * 15.0).max(MIN_SCORE);
    SectionScore::new(score, "Expected salary is near the upper limit of job range")
}
