use sha2::{Digest, Sha256};

pub const DEFAULT_DIMENSIONS: usize = 384;

/// Encodes text into fixed-width vectors for cosine comparison.
///
/// Implementations must be deterministic for identical inputs; the evaluator
/// relies on that to keep whole evaluations reproducible.
pub trait EmbeddingProvider: Send + Sync {
    fn encode(&self, texts: &[&str]) -> Vec<Vec<f32>>;

    fn dimensions(&self) -> usize;
}

/// Deterministic bag-of-tokens encoder.
///
/// Each whitespace token is hashed with SHA-256, the first four digest bytes
/// select a bucket, and the resulting count vector is L2-normalized. Crude
/// next to a learned model, but stable across processes and good enough to
/// keep an evaluation from turning into a hard failure when no model is
/// available.
#[derive(Debug, Clone)]
pub struct HashEmbedding {
    dimensions: usize,
}

impl HashEmbedding {
    pub fn new(dimensions: usize) -> Self {
        let dimensions = if dimensions == 0 {
            DEFAULT_DIMENSIONS
        } else {
            dimensions
        };
        Self { dimensions }
    }

    fn encode_one(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];

        for token in text.to_lowercase().split_whitespace() {
            let digest = Sha256::digest(token.as_bytes());
            let bucket =
                u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]]) as usize
                    % self.dimensions;
            vector[bucket] += 1.0;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        vector
    }
}

impl Default for HashEmbedding {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

impl EmbeddingProvider for HashEmbedding {
    fn encode(&self, texts: &[&str]) -> Vec<Vec<f32>> {
        texts.iter().map(|text| self.encode_one(text)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// Cosine similarity over two vectors; 0.0 when either norm is degenerate.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|v| v * v).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|v| v * v).sum::<f32>().sqrt();
    let denom = norm_a * norm_b;

    if denom <= 0.0 {
        return 0.0;
    }

    dot / denom
}
