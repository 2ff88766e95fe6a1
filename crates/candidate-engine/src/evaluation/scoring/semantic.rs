use super::{round_score, SectionScore};
use crate::resources::embedding::{cosine_similarity, EmbeddingProvider};

/// Semantic similarity between the job text (plus the optional extended
/// profile text) and the candidate text.
///
/// Cosine similarity in [-1, 1] is remapped linearly onto [0, 100]. Either
/// side being empty yields 0 with an explicit explanation rather than a
/// neutral default: an absent CV is a real signal gap, not missing metadata.
pub fn score(
    embeddings: &dyn EmbeddingProvider,
    job_text: &str,
    job_profile_text: Option<&str>,
    candidate_text: &str,
) -> SectionScore {
    let mut combined_job_text = job_text.trim().to_string();
    if let Some(profile) = job_profile_text.filter(|text| !text.trim().is_empty()) {
        if combined_job_text.is_empty() {
            combined_job_text = profile.trim().to_string();
        } else {
            combined_job_text = format!("{combined_job_text}\n{}", profile.trim());
        }
    }

    let candidate_text = candidate_text.trim();
    if combined_job_text.is_empty() || candidate_text.is_empty() {
        return SectionScore::new(0, "Insufficient text provided for semantic comparison");
    }

    let vectors = embeddings.encode(&[combined_job_text.as_str(), candidate_text]);
    let similarity = cosine_similarity(&vectors[0], &vectors[1]) as f64;
    let score = round_score(((similarity + 1.0) / 2.0).clamp(0.0, 1.0) * 100.0);

    SectionScore::new(
        score,
        format!("Semantic similarity score computed as {score}/100"),
    )
}
