use serde::{Deserialize, Serialize};

/// Contact block at the top of a resume. Fields are empty when the
/// extraction output carried no matching line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// One employer from the work history.
///
/// Invariant: `responsibilities` is never empty. Employers that collect no
/// responsibilities are dropped by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employment {
    pub company: String,
    pub duration: String,
    /// Empty when the date payload carried no comma-separated location.
    pub location: String,
    pub responsibilities: Vec<String>,
}

/// Invariant: `details` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub details: Vec<String>,
}

/// Typed result of resume extraction. Built once per upload and never
/// mutated afterwards; a new upload replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub basic_info: BasicInfo,
    pub profile_summary: String,
    pub work_experience: Vec<Employment>,
    pub education: String,
    pub technical_skills: String,
    pub projects: Vec<ProjectEntry>,
    pub certificates: String,
}

/// The seven top-level sections of a `ResumeRecord`, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeSection {
    BasicInfo,
    ProfileSummary,
    WorkExperience,
    Education,
    TechnicalSkills,
    Projects,
    Certificates,
}

impl ResumeSection {
    pub const ALL: [ResumeSection; 7] = [
        ResumeSection::BasicInfo,
        ResumeSection::ProfileSummary,
        ResumeSection::WorkExperience,
        ResumeSection::Education,
        ResumeSection::TechnicalSkills,
        ResumeSection::Projects,
        ResumeSection::Certificates,
    ];

    /// Human-readable heading, as shown in the resume breakdown view.
    pub fn title(self) -> &'static str {
        match self {
            ResumeSection::BasicInfo => "Basic Info",
            ResumeSection::ProfileSummary => "Profile Summary",
            ResumeSection::WorkExperience => "Work Experience",
            ResumeSection::Education => "Education",
            ResumeSection::TechnicalSkills => "Technical Skills",
            ResumeSection::Projects => "Projects",
            ResumeSection::Certificates => "Certificates",
        }
    }
}

impl ResumeRecord {
    /// Returns one section as JSON, for the per-section breakdown endpoint.
    pub fn section_value(&self, section: ResumeSection) -> serde_json::Value {
        let value = match section {
            ResumeSection::BasicInfo => serde_json::to_value(&self.basic_info),
            ResumeSection::ProfileSummary => serde_json::to_value(&self.profile_summary),
            ResumeSection::WorkExperience => serde_json::to_value(&self.work_experience),
            ResumeSection::Education => serde_json::to_value(&self.education),
            ResumeSection::TechnicalSkills => serde_json::to_value(&self.technical_skills),
            ResumeSection::Projects => serde_json::to_value(&self.projects),
            ResumeSection::Certificates => serde_json::to_value(&self.certificates),
        };
        // Plain strings and derived structs always serialize.
        value.unwrap_or(serde_json::Value::Null)
    }

    /// True when the section carries no content at all.
    pub fn section_is_empty(&self, section: ResumeSection) -> bool {
        match section {
            ResumeSection::BasicInfo => self.basic_info == BasicInfo::default(),
            ResumeSection::ProfileSummary => self.profile_summary.is_empty(),
            ResumeSection::WorkExperience => self.work_experience.is_empty(),
            ResumeSection::Education => self.education.is_empty(),
            ResumeSection::TechnicalSkills => self.technical_skills.is_empty(),
            ResumeSection::Projects => self.projects.is_empty(),
            ResumeSection::Certificates => self.certificates.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_section_serde_snake_case() {
        let section: ResumeSection = serde_json::from_str(r#""work_experience""#).unwrap();
        assert_eq!(section, ResumeSection::WorkExperience);
        assert_eq!(
            serde_json::to_string(&ResumeSection::TechnicalSkills).unwrap(),
            r#""technical_skills""#
        );
    }

    #[test]
    fn test_default_record_sections_are_empty() {
        let record = ResumeRecord::default();
        for section in ResumeSection::ALL {
            assert!(record.section_is_empty(section), "{section:?} should be empty");
        }
    }

    #[test]
    fn test_section_value_projects_is_array() {
        let record = ResumeRecord {
            projects: vec![ProjectEntry {
                title: "Chat App".to_string(),
                details: vec!["Built real-time chat".to_string()],
            }],
            ..Default::default()
        };
        let value = record.section_value(ResumeSection::Projects);
        assert_eq!(value[0]["title"], "Chat App");
        assert_eq!(value[0]["details"][0], "Built real-time chat");
    }

    #[test]
    fn test_section_title() {
        assert_eq!(ResumeSection::BasicInfo.title(), "Basic Info");
        assert_eq!(ResumeSection::Certificates.title(), "Certificates");
    }
}
