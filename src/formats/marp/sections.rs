//! Grouping slide fragments into sections at divider slides

use super::directives::RawSlide;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGroup {
    pub title: String,
    pub slides: Vec<RawSlide>,
}

/// Walk the fragments in order, opening a new group at every divider or
/// lead fragment. Empty groups are never emitted.
pub fn group_sections(
    slides: Vec<RawSlide>,
    default_title: &str,
    untitled_title: &str,
) -> Vec<SectionGroup> {
    let mut groups = Vec::new();
    let mut current = SectionGroup {
        title: default_title.to_string(),
        slides: Vec::new(),
    };

    for slide in slides {
        if slide.opens_section() {
            let title = section_title(&slide.content).unwrap_or(untitled_title);
            log::trace!("section boundary at {title:?}");
            let next = SectionGroup {
                title: title.to_string(),
                slides: Vec::new(),
            };
            let finished = core::mem::replace(&mut current, next);
            if !finished.slides.is_empty() {
                groups.push(finished);
            }
        }
        current.slides.push(slide);
    }

    if !current.slides.is_empty() {
        groups.push(current);
    }
    groups
}

/// Title of a divider slide: the first `## ` heading, else the first `# `
pub fn section_title(content: &str) -> Option<&str> {
    let mut h1 = None;
    let mut h2 = None;

    for line in content.lines().map(str::trim) {
        if h1.is_none()
            && let Some(text) = line.strip_prefix("# ")
        {
            h1 = Some(text);
        } else if h2.is_none()
            && let Some(text) = line.strip_prefix("## ")
        {
            h2 = Some(text);
        }
    }

    h2.or(h1)
}
