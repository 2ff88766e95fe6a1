//! Shared, read-only resources built once at process start and injected into
//! every evaluator. Nothing here is mutated after construction, so any number
//! of concurrent evaluations may borrow the same handle.

pub mod embedding;
pub mod taxonomy;

use std::sync::Arc;

use embedding::{EmbeddingProvider, HashEmbedding};
use taxonomy::SkillTaxonomy;

/// Immutable bundle of the skill taxonomy and the embedding provider handle.
#[derive(Clone)]
pub struct EngineResources {
    pub taxonomy: SkillTaxonomy,
    pub embeddings: Arc<dyn EmbeddingProvider>,
}

impl EngineResources {
    pub fn new(taxonomy: SkillTaxonomy, embeddings: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            taxonomy,
            embeddings,
        }
    }

    /// Default wiring: the built-in taxonomy plus the deterministic hashing
    /// encoder, which doubles as the degradation fallback when no external
    /// model is configured.
    pub fn bootstrap(embedding_dimensions: usize) -> Self {
        Self::new(
            SkillTaxonomy::builtin(),
            Arc::new(HashEmbedding::new(embedding_dimensions)),
        )
    }
}

impl Default for EngineResources {
    fn default() -> Self {
        Self::bootstrap(embedding::DEFAULT_DIMENSIONS)
    }
}
