//! Upload pipeline: resume text → structured record + knowledge base.
//!
//! Extraction and indexing are independent, so both run concurrently. The
//! result is only handed to the store once both have finished.

use tracing::info;

use crate::errors::AppError;
use crate::extraction;
use crate::knowledge::{Embedder, KnowledgeBase, TextSplitter};
use crate::llm_client::Generator;
use crate::session::store::ProcessedResume;

pub async fn process_resume(
    resume_text: String,
    llm: &dyn Generator,
    embedder: &dyn Embedder,
    splitter: &TextSplitter,
) -> Result<ProcessedResume, AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Resume contains no readable text".to_string(),
        ));
    }

    let (record, knowledge_base) = tokio::join!(
        extraction::extract(&resume_text, llm),
        KnowledgeBase::build(&resume_text, splitter, embedder),
    );
    let knowledge_base = knowledge_base?;

    info!(
        "Processed resume: {} chars, {} chunks",
        resume_text.chars().count(),
        knowledge_base.len()
    );

    Ok(ProcessedResume {
        resume_text,
        record,
        knowledge_base,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::embedder::testing::{BagOfWordsEmbedder, FailingEmbedder};
    use crate::llm_client::testing::ScriptedGenerator;

    const EXTRACTION_REPLY: &str = "Name: Jane Doe\n\
        Email: jane@example.com\n\
        Work Experience:\n\
        • Acme Corp (Jan 2020 - Mar 2022, Remote)\n\
        * Built X\n";

    #[tokio::test]
    async fn test_process_builds_record_and_index() {
        let llm = ScriptedGenerator::new([EXTRACTION_REPLY]);
        let processed = process_resume(
            "Jane Doe. Engineer at Acme Corp.".to_string(),
            &llm,
            &BagOfWordsEmbedder::default(),
            &TextSplitter::default(),
        )
        .await
        .unwrap();

        assert_eq!(processed.record.basic_info.name, "Jane Doe");
        assert_eq!(processed.record.work_experience.len(), 1);
        assert_eq!(processed.knowledge_base.len(), 1);
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected_without_service_calls() {
        let llm = ScriptedGenerator::new(["unused"]);
        let result = process_resume(
            " \n\t".to_string(),
            &llm,
            &BagOfWordsEmbedder::default(),
            &TextSplitter::default(),
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_embedding_failure_fails_the_upload() {
        let llm = ScriptedGenerator::new([EXTRACTION_REPLY]);
        let result = process_resume(
            "Jane Doe".to_string(),
            &llm,
            &FailingEmbedder,
            &TextSplitter::default(),
        )
        .await;

        assert!(matches!(result, Err(AppError::Embedding(_))));
    }
}
