//! Layout classification from slide class and content

use crate::models::Layout;

pub const DIVIDER_CLASS: &str = "section-divider";
pub const LEAD_CLASS: &str = "lead";

const COLUMN_MARKERS: [&str; 2] = [r#"class="columns""#, "grid-template-columns"];

/// Layout for a slide with the given `_class` directive and residual content
pub fn classify(class: Option<&str>, content: &str) -> Layout {
    let layout = match class {
        Some(DIVIDER_CLASS) => Layout::Section,
        Some(LEAD_CLASS) => Layout::Title,
        _ => Layout::TitleBody,
    };

    if layout == Layout::TitleBody && has_columns(content) {
        Layout::TitleTwoCol
    } else {
        layout
    }
}

pub fn has_columns(content: &str) -> bool {
    COLUMN_MARKERS.iter().any(|marker| content.contains(marker))
}
