//! Parses the raw "Work Experience" section into `Employment` records.
//!
//! Line classification:
//! - contains both `(` and `)` → new employer, even when bulleted
//! - bulleted, employer open   → responsibility
//! - anything else             → ignored
//!
//! Employers that collect no responsibilities are dropped.

use crate::extraction::bullets::{is_bulleted, strip_bullets, strip_one_bullet};
use crate::models::resume::Employment;

/// Employer header fields parsed from a line such as
/// `Acme Corp (Jan 2020 - Mar 2022, Remote)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployerHeader {
    pub company: String,
    pub duration: String,
    pub location: String,
}

pub fn parse_work_experience(text: &str) -> Vec<Employment> {
    let mut experiences = Vec::new();
    let mut current: Option<(EmployerHeader, Vec<String>)> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if is_employer_line(line) {
            flush(&mut experiences, current.take());
            current = Some((parse_employer_header(line), Vec::new()));
        } else if is_bulleted(line) {
            if let Some((_, responsibilities)) = current.as_mut() {
                let responsibility = strip_bullets(line);
                if !responsibility.is_empty() {
                    responsibilities.push(responsibility.to_string());
                }
            }
        }
    }

    flush(&mut experiences, current);
    experiences
}

/// Parentheses take priority over bullet classification.
fn is_employer_line(line: &str) -> bool {
    line.contains('(') && line.contains(')')
}

/// Parses an employer line. A line with no `(` after bullet stripping
/// becomes the company name with empty duration and location.
pub fn parse_employer_header(line: &str) -> EmployerHeader {
    let line = strip_one_bullet(line);

    let Some((company, rest)) = line.split_once('(') else {
        return EmployerHeader {
            company: line.to_string(),
            duration: String::new(),
            location: String::new(),
        };
    };

    let payload = rest.split_once(')').map_or(rest, |(inside, _)| inside);
    let (duration, location) = payload.rsplit_once(',').unwrap_or((payload, ""));

    EmployerHeader {
        company: company.trim().to_string(),
        duration: duration.trim().to_string(),
        location: location.trim().to_string(),
    }
}

fn flush(experiences: &mut Vec<Employment>, current: Option<(EmployerHeader, Vec<String>)>) {
    if let Some((header, responsibilities)) = current {
        if !responsibilities.is_empty() {
            experiences.push(Employment {
                company: header.company,
                duration: header.duration,
                location: header.location,
                responsibilities,
            });
        }
    }
}
