//! `QaEngine`: answers one question against a session's knowledge base.
//!
//! Flow: precondition check → retrieve top-4 chunks → classify →
//!       standard grounded prompt | role-suitability evaluation → generate.
//!
//! Generated text is returned verbatim, including `"Error: ..."` replies.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::knowledge::{Embedder, KnowledgeBase};
use crate::llm_client::{error_content, Generator};
use crate::qa::classifier::{classify, AnswerMode};
use crate::qa::prompts::{
    fill_template, ROLE_EVALUATION_PROMPT_TEMPLATE, STANDARD_ANSWER_PROMPT_TEMPLATE,
};
use crate::qa::skills::{
    calculate_skill_match, extract_candidate_skills, extract_required_skills, join_skills,
};

/// Number of chunks retrieved as context for every question.
pub const RETRIEVAL_K: usize = 4;

/// Returned when a question arrives before any resume was processed.
pub const NO_RESUME_MESSAGE: &str = "Please process a resume first.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub answer: String,
    pub mode: AnswerMode,
}

/// Borrowed collaborators for answering one question.
pub struct QaEngine<'a> {
    pub llm: &'a dyn Generator,
    pub embedder: &'a dyn Embedder,
    /// End date used when the model has to total up tenure itself.
    pub tenure_reference: NaiveDate,
}

impl<'a> QaEngine<'a> {
    pub async fn answer(&self, question: &str, knowledge_base: Option<&KnowledgeBase>) -> Answer {
        let mode = classify(question);

        let Some(knowledge_base) = knowledge_base else {
            return Answer {
                answer: NO_RESUME_MESSAGE.to_string(),
                mode,
            };
        };

        let context = match knowledge_base
            .search(question, RETRIEVAL_K, self.embedder)
            .await
        {
            Ok(documents) => documents
                .into_iter()
                .map(|d| d.text)
                .collect::<Vec<_>>()
                .join("\n"),
            Err(e) => {
                return Answer {
                    answer: error_content(&e),
                    mode,
                }
            }
        };

        info!("Answering {:?} question with {} chars of context", mode, context.len());

        let answer = match mode {
            AnswerMode::Standard => {
                let prompt = build_standard_prompt(question, &context, self.tenure_reference);
                self.llm.generate(&prompt).await
            }
            AnswerMode::RoleSuitability => self.evaluate_role_suitability(question, &context).await,
        };

        Answer { answer, mode }
    }

    async fn evaluate_role_suitability(&self, question: &str, context: &str) -> String {
        let required = extract_required_skills(question, self.llm).await;
        let candidate = extract_candidate_skills(context, self.llm).await;
        let match_percentage = calculate_skill_match(&required, &candidate);

        info!(
            "Role suitability: {} required, {} candidate skills, {:.1}% match",
            required.len(),
            candidate.len(),
            match_percentage
        );

        let prompt = fill_template(
            ROLE_EVALUATION_PROMPT_TEMPLATE,
            &[
                ("required_skills", join_skills(&required).as_str()),
                ("candidate_skills", join_skills(&candidate).as_str()),
                ("match_percentage", format!("{match_percentage:.1}").as_str()),
                ("context", context),
            ],
        );
        self.llm.generate(&prompt).await
    }
}

pub fn build_standard_prompt(question: &str, context: &str, tenure_reference: NaiveDate) -> String {
    fill_template(
        STANDARD_ANSWER_PROMPT_TEMPLATE,
        &[
            ("tenure_reference", tenure_reference.format("%B %Y").to_string().as_str()),
            ("question", question),
            ("context", context),
        ],
    )
}
