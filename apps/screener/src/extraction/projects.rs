//! Parses the raw "Projects" section into `ProjectEntry` records.
//!
//! Only bulleted lines count. A bulleted line is a detail of the open project
//! when it reads like one (see `DETAIL_MARKERS`) and the next line continues
//! the bullet block; every other bulleted line starts a new project title.
//! Projects that collect no details are dropped.

use crate::extraction::bullets::{is_bulleted, strip_bullets};
use crate::models::resume::ProjectEntry;

/// Case-insensitive substrings that mark a bulleted line as a detail.
const DETAIL_MARKERS: &[&str] = &["technologies:", "developed", "implemented", "built"];

pub fn parse_projects(text: &str) -> Vec<ProjectEntry> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut projects = Vec::new();
    let mut current: Option<ProjectEntry> = None;

    for (i, line) in lines.iter().enumerate() {
        if !is_bulleted(line) {
            continue;
        }
        let clean = strip_bullets(line);

        if is_detail(clean, lines.get(i + 1).copied()) {
            if let Some(project) = current.as_mut() {
                project.details.push(clean.to_string());
            }
        } else {
            flush(&mut projects, current.take());
            current = Some(ProjectEntry {
                title: clean.to_string(),
                details: Vec::new(),
            });
        }
    }

    flush(&mut projects, current);
    projects
}

/// End of section counts as a continuation, so a trailing
/// `Technologies:` line stays with its project.
fn is_detail(clean: &str, next_line: Option<&str>) -> bool {
    let continues = next_line.map_or(true, is_bulleted);
    if !continues {
        return false;
    }
    let lower = clean.to_lowercase();
    DETAIL_MARKERS.iter().any(|marker| lower.contains(marker))
}

fn flush(projects: &mut Vec<ProjectEntry>, current: Option<ProjectEntry>) {
    if let Some(project) = current {
        if !project.details.is_empty() {
            projects.push(project);
        }
    }
}
