//! Splits the labeled extraction reply into resume sections by line marker.
//!
//! A line opens a new section when it starts (ASCII case-insensitively) with a
//! marker from `SECTION_MARKERS`. Markers are checked in table order and the
//! first match wins. Blank lines are dropped; lines before the first marker
//! are discarded.

use crate::extraction::projects::parse_projects;
use crate::extraction::work_experience::parse_work_experience;
use crate::models::resume::ResumeRecord;

/// Where a marker routes its section content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionTarget {
    Name,
    Email,
    Phone,
    ProfileSummary,
    WorkExperience,
    Education,
    TechnicalSkills,
    Projects,
    Certificates,
}

/// Ordered marker table. Longer markers that share a prefix with a shorter
/// one must map to the same target, or be listed first.
pub const SECTION_MARKERS: &[(&str, SectionTarget)] = &[
    ("name:", SectionTarget::Name),
    ("email:", SectionTarget::Email),
    ("phone:", SectionTarget::Phone),
    ("phone number:", SectionTarget::Phone),
    ("profile summary:", SectionTarget::ProfileSummary),
    ("summary:", SectionTarget::ProfileSummary),
    ("work experience:", SectionTarget::WorkExperience),
    ("employment:", SectionTarget::WorkExperience),
    ("education:", SectionTarget::Education),
    ("technical skills:", SectionTarget::TechnicalSkills),
    ("skills:", SectionTarget::TechnicalSkills),
    ("projects:", SectionTarget::Projects),
    ("certificates:", SectionTarget::Certificates),
    ("certifications:", SectionTarget::Certificates),
];

/// Raw text accumulated for one section occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub target: SectionTarget,
    /// Content lines joined with `\n`, marker removed.
    pub text: String,
}

/// Fold accumulator: the open section, its buffered lines, and the
/// segments closed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmenterState {
    pub current: Option<SectionTarget>,
    pub buffer: Vec<String>,
    pub segments: Vec<Segment>,
}

impl SegmenterState {
    /// Consumes one input line and returns the next state.
    pub fn step(mut self, line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return self;
        }

        match match_marker(line) {
            Some((target, rest)) => {
                self.close_section();
                self.current = Some(target);
                if !rest.is_empty() {
                    self.buffer.push(rest.to_string());
                }
            }
            None => {
                if self.current.is_some() {
                    self.buffer.push(line.to_string());
                }
            }
        }
        self
    }

    /// Closes the trailing section and returns every segment in input order.
    pub fn finish(mut self) -> Vec<Segment> {
        self.close_section();
        self.segments
    }

    fn close_section(&mut self) {
        let lines = std::mem::take(&mut self.buffer);
        if let Some(target) = self.current.take() {
            if !lines.is_empty() {
                self.segments.push(Segment {
                    target,
                    text: lines.join("\n"),
                });
            }
        }
    }
}

/// Returns the first marker the line starts with, plus the trimmed remainder.
pub fn match_marker(line: &str) -> Option<(SectionTarget, &str)> {
    SECTION_MARKERS.iter().find_map(|(marker, target)| {
        let prefix = line.get(..marker.len())?;
        prefix
            .eq_ignore_ascii_case(marker)
            .then(|| (*target, line[marker.len()..].trim()))
    })
}

/// Splits text into raw segments without interpreting them.
pub fn segment(text: &str) -> Vec<Segment> {
    text.lines()
        .fold(SegmenterState::default(), SegmenterState::step)
        .finish()
}

/// Segments the text and routes each section to its parser. A section that
/// appears more than once keeps its last occurrence.
pub fn parse_sections(text: &str) -> ResumeRecord {
    let mut record = ResumeRecord::default();

    for Segment { target, text } in segment(text) {
        match target {
            SectionTarget::Name => record.basic_info.name = text.trim().to_string(),
            SectionTarget::Email => record.basic_info.email = text.trim().to_string(),
            SectionTarget::Phone => record.basic_info.phone = text.trim().to_string(),
            SectionTarget::ProfileSummary => record.profile_summary = text.trim().to_string(),
            SectionTarget::WorkExperience => record.work_experience = parse_work_experience(&text),
            SectionTarget::Education => record.education = text.trim().to_string(),
            SectionTarget::TechnicalSkills => record.technical_skills = text.trim().to_string(),
            SectionTarget::Projects => record.projects = parse_projects(&text),
            SectionTarget::Certificates => record.certificates = text.trim().to_string(),
        }
    }

    record
}
