//! `extract`: prompts the generator with the resume text and parses the labeled reply into a `ResumeRecord`.
//!
//! Flow: fill extraction template → one generation call → segment → sub-parsers.
//!
//! The generator's output is not validated against a schema and the call is
//! never retried. Output that ignores the requested format degrades into empty
//! sections, and an `"Error: ..."` reply segments to an empty record.

use tracing::{debug, info};

use crate::extraction::prompts::EXTRACTION_PROMPT_TEMPLATE;
use crate::extraction::segmenter::parse_sections;
use crate::llm_client::Generator;
use crate::models::resume::ResumeRecord;

/// Fills the extraction template with the resume text.
pub fn build_extraction_prompt(resume_text: &str) -> String {
    EXTRACTION_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

pub async fn extract(resume_text: &str, llm: &dyn Generator) -> ResumeRecord {
    let prompt = build_extraction_prompt(resume_text);
    let raw = llm.generate(&prompt).await;
    debug!("Extraction reply: {} chars", raw.chars().count());

    let record = parse_sections(&raw);
    info!(
        "Extracted resume: {} employers, {} projects",
        record.work_experience.len(),
        record.projects.len()
    );
    record
}
