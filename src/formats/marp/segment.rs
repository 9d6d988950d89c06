//! Splitting a deck body into raw slide fragments

pub const SEPARATOR: &str = "---";
pub const CODE_FENCE: &str = "```";

/// Split `body` on separator lines that sit outside fenced code.
///
/// Fragments that are blank after trimming are dropped.
pub fn split_slides(body: &str) -> Vec<String> {
    let mut slides = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut in_code = false;

    for line in body.split('\n') {
        let trimmed = line.trim();

        if trimmed.starts_with(CODE_FENCE) {
            in_code = !in_code;
        }

        if !in_code && trimmed == SEPARATOR {
            push_fragment(&mut slides, &current);
            current.clear();
            continue;
        }

        current.push(line);
    }
    push_fragment(&mut slides, &current);

    slides
}

fn push_fragment(slides: &mut Vec<String>, lines: &[&str]) {
    let fragment = lines.join("\n");
    if !fragment.trim().is_empty() {
        slides.push(fragment);
    }
}
