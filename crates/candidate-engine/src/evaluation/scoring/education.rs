use super::SectionScore;
use crate::evaluation::domain::normalized;

/// Education is a supporting signal, never a gate; the hard education
/// requirement lives in HR-007.
const EDUCATION_SCORES: [(&str, u8); 8] = [
    ("phd", 100),
    ("doctorate", 100),
    ("masters", 90),
    ("master", 90),
    ("bachelors", 80),
    ("bachelor", 80),
    ("diploma", 70),
    ("high school", 65),
];

const DEFAULT_SCORE: u8 = 75;

pub fn score(education_level: Option<&str>) -> SectionScore {
    let Some(raw) = education_level.filter(|level| !level.trim().is_empty()) else {
        return SectionScore::new(
            DEFAULT_SCORE,
            "Education information not provided; neutral impact applied",
        );
    };

    let value = normalized(raw);
    for (keyword, score) in EDUCATION_SCORES {
        if value.contains(keyword) {
            return SectionScore::new(score, format!("Education level identified as '{raw}'"));
        }
    }

    SectionScore::new(
        DEFAULT_SCORE,
        format!("Education level '{raw}' treated as neutral"),
    )
}
