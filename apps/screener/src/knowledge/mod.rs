// Knowledge base: resume text → overlapping chunks → embeddings → similarity search.
// The embedding model is an external service behind the `Embedder` trait.

pub mod embedder;
pub mod index;
pub mod splitter;

pub use embedder::{EmbedError, Embedder, EmbeddingClient};
pub use index::KnowledgeBase;
pub use splitter::TextSplitter;
