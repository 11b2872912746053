//! `KnowledgeBase`: chunked resume text with one embedding per chunk,
//! searched by cosine similarity.
//!
//! Built once per upload and never updated incrementally; a new upload
//! builds a fresh index that replaces the old one.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::info;

use crate::knowledge::embedder::{EmbedError, Embedder};
use crate::knowledge::splitter::TextSplitter;

/// A retrievable unit of resume text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub text: String,
}

#[derive(Debug, Clone)]
struct IndexedChunk {
    document: Document,
    embedding: Vec<f32>,
}

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    chunks: Vec<IndexedChunk>,
}

impl KnowledgeBase {
    /// Splits the resume text, embeds every chunk in one batch, and indexes the result.
    pub async fn build(
        resume_text: &str,
        splitter: &TextSplitter,
        embedder: &dyn Embedder,
    ) -> Result<Self, EmbedError> {
        let texts = splitter.split_text(resume_text);
        let embeddings = embedder.embed(&texts).await?;
        if embeddings.len() != texts.len() {
            return Err(EmbedError::CountMismatch {
                expected: texts.len(),
                actual: embeddings.len(),
            });
        }

        let chunks: Vec<IndexedChunk> = texts
            .into_iter()
            .zip(embeddings)
            .map(|(text, embedding)| IndexedChunk {
                document: Document { text },
                embedding,
            })
            .collect();

        info!("Knowledge base built: {} chunks", chunks.len());
        Ok(Self { chunks })
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Embeds the query and returns the `k` most similar documents,
    /// best first. Equal scores keep chunk order.
    pub async fn search(
        &self,
        query: &str,
        k: usize,
        embedder: &dyn Embedder,
    ) -> Result<Vec<Document>, EmbedError> {
        if self.is_empty() || k == 0 {
            return Ok(Vec::new());
        }
        let query_embedding = embedder.embed_one(query).await?;
        Ok(self.nearest(&query_embedding, k))
    }

    fn nearest(&self, query_embedding: &[f32], k: usize) -> Vec<Document> {
        let mut scored: Vec<(f32, &IndexedChunk)> = self
            .chunks
            .iter()
            .map(|chunk| (cosine_similarity(query_embedding, &chunk.embedding), chunk))
            .collect();

        // Stable sort keeps chunk order among ties.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        scored
            .into_iter()
            .take(k)
            .map(|(_, chunk)| chunk.document.clone())
            .collect()
    }
}

/// Compute cosine similarity between two vectors.
/// Returns 0.0 if either vector has zero magnitude or the dimensions differ.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let mag_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    dot / (mag_a * mag_b)
}
