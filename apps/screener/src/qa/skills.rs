//! Skill extraction and set-overlap scoring for role-suitability answers.
//!
//! Skills are compared after lowercasing and trimming only. Synonyms are
//! never merged: "js" and "javascript" are different skills.

use std::collections::BTreeSet;

use crate::llm_client::Generator;
use crate::qa::prompts::{
    fill_template, CANDIDATE_SKILLS_PROMPT_TEMPLATE, REQUIRED_SKILLS_PROMPT_TEMPLATE,
};

/// Normalized skill names. Ordered so prompts list skills deterministically.
pub type SkillSet = BTreeSet<String>;

/// Parses a comma-separated reply into a `SkillSet`, dropping empty items.
pub fn parse_skill_list(text: &str) -> SkillSet {
    text.split(',')
        .map(|skill| skill.trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .collect()
}

/// Percentage of required skills the candidate has, in `[0, 100]`.
/// An empty requirement set scores 0.0.
pub fn calculate_skill_match(required: &SkillSet, candidate: &SkillSet) -> f64 {
    if required.is_empty() {
        return 0.0;
    }
    let matched = required.intersection(candidate).count();
    matched as f64 / required.len() as f64 * 100.0
}

/// Asks the generator which skills the question requires.
pub async fn extract_required_skills(question: &str, llm: &dyn Generator) -> SkillSet {
    let prompt = fill_template(REQUIRED_SKILLS_PROMPT_TEMPLATE, &[("question", question)]);
    parse_skill_list(&llm.generate(&prompt).await)
}

/// Asks the generator which skills the resume context shows.
pub async fn extract_candidate_skills(context: &str, llm: &dyn Generator) -> SkillSet {
    let prompt = fill_template(CANDIDATE_SKILLS_PROMPT_TEMPLATE, &[("text", context)]);
    parse_skill_list(&llm.generate(&prompt).await)
}

/// Joins a skill set for display inside a prompt.
pub fn join_skills(skills: &SkillSet) -> String {
    skills.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedGenerator;

    fn set(items: &[&str]) -> SkillSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_required_scores_zero() {
        assert_eq!(calculate_skill_match(&set(&[]), &set(&["python"])), 0.0);
    }

    #[test]
    fn test_half_match() {
        assert_eq!(
            calculate_skill_match(&set(&["python", "sql"]), &set(&["python"])),
            50.0
        );
    }

    #[test]
    fn test_full_match_ignores_extra_candidate_skills() {
        assert_eq!(
            calculate_skill_match(&set(&["rust"]), &set(&["rust", "go", "sql"])),
            100.0
        );
    }

    #[test]
    fn test_synonyms_are_not_merged() {
        assert_eq!(calculate_skill_match(&set(&["js"]), &set(&["javascript"])), 0.0);
    }

    #[test]
    fn test_parse_normalizes_and_dedups() {
        let skills = parse_skill_list(" Python, SQL ,python,, Docker \n");
        assert_eq!(skills, set(&["docker", "python", "sql"]));
    }

    #[test]
    fn test_parse_empty_reply() {
        assert!(parse_skill_list("").is_empty());
        assert!(parse_skill_list(" , ,").is_empty());
    }

    #[test]
    fn test_join_is_sorted() {
        assert_eq!(join_skills(&set(&["sql", "go", "rust"])), "go, rust, sql");
    }

    #[tokio::test]
    async fn test_extract_required_skills_prompts_with_question() {
        let llm = ScriptedGenerator::new(["Kubernetes, Go"]);
        let skills = extract_required_skills("Is she a fit for a Go + k8s role?", &llm).await;

        assert_eq!(skills, set(&["go", "kubernetes"]));
        assert!(llm.prompts()[0].contains("Question: Is she a fit for a Go + k8s role?"));
    }

    #[tokio::test]
    async fn test_extract_candidate_skills_prompts_with_context() {
        let llm = ScriptedGenerator::new(["Rust, PostgreSQL"]);
        let skills = extract_candidate_skills("Built payment services in Rust", &llm).await;

        assert_eq!(skills, set(&["postgresql", "rust"]));
        assert!(llm.prompts()[0].contains("Text: Built payment services in Rust"));
    }
}
