use serde::Serialize;

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerMode {
    /// Grounded answer straight from the retrieved resume context.
    Standard,
    /// Skill-overlap scoring plus a structured hiring verdict.
    RoleSuitability,
}

/// Substrings that mark a question as asking whether the candidate suits a role.
pub const ROLE_SUITABILITY_KEYWORDS: &[&str] = &[
    "suitable",
    "fit",
    "good for",
    "qualified for",
    "match",
    "right for",
    "appropriate for",
    "good candidate for",
    "consider for",
];

/// Plain substring match on the lowercased question, so "fit" also fires
/// inside words such as "benefits".
pub fn classify(question: &str) -> AnswerMode {
    let lower = question.to_lowercase();
    if ROLE_SUITABILITY_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        AnswerMode::RoleSuitability
    } else {
        AnswerMode::Standard
    }
}
