//! Fenced key/value header at the top of a deck

use std::collections::HashMap;

const FENCE: &str = "---";

/// Recognized header keys plus everything else verbatim
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    pub marp: bool,
    pub theme: String,
    pub paginate: bool,
    pub style: String,
    pub custom: HashMap<String, String>,
}

/// Split the header off the document.
///
/// Without an opening fence, or with an opening fence that is never closed,
/// the whole (trimmed) text is body and the header is empty.
pub fn split_frontmatter(content: &str) -> (Frontmatter, &str) {
    let content = content.trim();
    let Some(rest) = content.strip_prefix(FENCE) else {
        return (Frontmatter::default(), content);
    };

    let Some(close) = rest.find("\n---") else {
        log::warn!("frontmatter fence is never closed, treating the whole text as body");
        return (Frontmatter::default(), content);
    };

    let header = rest[..close].trim();
    let body = &rest[close + 4..];
    (parse_header(header), body)
}

fn parse_header(header: &str) -> Frontmatter {
    let mut frontmatter = Frontmatter::default();
    let mut lines = header.lines().peekable();

    while let Some(line) = lines.next() {
        let Some((key, value)) = line.trim().split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        match key {
            "marp" => frontmatter.marp = value == "true",
            "theme" => frontmatter.theme = value.to_string(),
            "paginate" => frontmatter.paginate = value == "true",
            "style" if value == "|" => {
                let mut style_lines = Vec::new();
                while let Some(next) = lines.next_if(|l| l.starts_with([' ', '\t'])) {
                    style_lines.push(next);
                }
                frontmatter.style = style_lines.join("\n");
            }
            "style" => frontmatter.style = value.to_string(),
            _ => {
                frontmatter.custom.insert(key.to_string(), value.to_string());
            }
        }
    }

    frontmatter
}
