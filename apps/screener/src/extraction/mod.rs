// Resume extraction: LLM-labeled text → typed `ResumeRecord`.
// Parsing is deterministic; the only LLM call lives in `extractor`.

pub mod bullets;
pub mod extractor;
pub mod projects;
pub mod prompts;
pub mod segmenter;
pub mod work_experience;

pub use extractor::extract;
