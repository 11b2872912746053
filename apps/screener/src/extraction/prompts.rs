// Prompt constants for resume extraction.
// The section labels here must stay in sync with `segmenter::SECTION_MARKERS`,
// and the bullet examples with the glyphs in `bullets::BULLET_GLYPHS`.

/// Extraction prompt template. Replace `{resume_text}` before sending.
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"Please analyze the following resume and extract the information in this exact format with clear section headers:

Name: [Full Name]
Email: [Email Address]
Phone: [Phone Number]
Profile Summary: [Detailed profile summary]
Work Experience: [List each position in this format:
• Company Name (Duration, Location)
* Responsibility 1
* Responsibility 2
* Responsibility 3
]
Education: [Detailed education history]
Technical Skills: [List of technical skills]
Projects: [List each project in this format:
* Project Title
* Detail 1
* Detail 2
* Technologies: List of technologies used
]
Certificates: [List of certificates and certifications]

Important:
- For Work Experience, first find the company name and then the bullet points below it. Keep the bullet point format exactly as shown above. Do this for every company you can find.
- For Projects, put each project title on its own line with a bullet point, followed by its details on separate bulleted lines.

Resume Text: {resume_text}"#;
