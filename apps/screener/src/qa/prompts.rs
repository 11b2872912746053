// Prompt constants for question answering.
// Placeholders are `{name}` tokens filled in one pass by `fill_template`.

/// Grounded answer prompt. Replace: {question}, {context}, {tenure_reference}
pub const STANDARD_ANSWER_PROMPT_TEMPLATE: &str = r#"You are an AI assistant helping HR professionals analyze resumes. Answer the following question accurately based ONLY on the information provided in the resume context: {question}

Resume Context:
{context}

Key Instructions:
1. ONLY provide information that is explicitly stated in the resume context
2. DO NOT make assumptions or infer information not directly stated
3. Divide the answer into bullet points strictly for more clarity
4. If experience is not mentioned in total years, work it out from the work experience and give the final answer in years and months, counting from the start until {tenure_reference}.
5. If information is not found, clearly state "Not mentioned in the resume"
6. If the question is not related to the resume, clearly state "I did not understand, can you please re-type question?"

Remember:
- Keep responses focused and precise
- Never invent or assume information"#;

/// Required-skill extraction. Replace: {question}
pub const REQUIRED_SKILLS_PROMPT_TEMPLATE: &str = r#"Extract the required skills or qualifications mentioned in this question.
Return only the technical and professional skills as a comma-separated list.
Question: {question}"#;

/// Candidate-skill extraction. Replace: {text}
pub const CANDIDATE_SKILLS_PROMPT_TEMPLATE: &str = r#"Extract only the technical and professional skills from this text.
Return them as a comma-separated list.

Structure:
Skill-1, Skill-2, Skill-3

Do not add any more information other than skills.
Do not add Education or Awards or Certifications or Experience in this section.
Text: {text}"#;

/// Role-suitability verdict.
/// Replace: {required_skills}, {candidate_skills}, {match_percentage}, {context}
pub const ROLE_EVALUATION_PROMPT_TEMPLATE: &str = r#"Analyze the candidate's suitability for the role based on the following information:

Required Skills: {required_skills}
Candidate's Skills: {candidate_skills}
Skill Match: {match_percentage}%

Resume Context:
{context}

Provide a structured evaluation with:
1. **My suggestion**: Overall Assessment (Strong Match/Moderate Match/Limited Match) with a summary in 2 lines strictly.
2. Key Matching Skills (3-4 most relevant matches)
3. Notable Gaps (if any)
4. Additional Relevant Experience (from resume context)

Format as bullet points. Be specific and reference only information from the resume."#;


/// Fills `{name}` placeholders in a single left-to-right pass. Substituted
/// values are never rescanned, so a question or chunk that itself contains
/// `{context}` stays literal. Unknown `{...}` tokens are left as-is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
