use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Section;

/// Header topics that usually introduce post-install instructions.
///
/// Matching is a case-insensitive substring test, so `## Installing via Composer`
/// does not match while `### Laravel Installation` does.
pub const RELEVANT_TOPICS: &[&str] = &[
    "Installation",
    "Setup",
    "Getting Started",
    "Usage",
    "Configuration",
    "Quick Start",
    "Post-Installation",
    "After Installation",
];

static HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#+\s+(.+)$").expect("header regex is valid"));

fn header_text(line: &str) -> Option<&str> {
    HEADER_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn is_relevant_header(header: &str) -> bool {
    let lowered = header.to_lowercase();
    RELEVANT_TOPICS
        .iter()
        .any(|topic| lowered.contains(&topic.to_lowercase()))
}

/// Segment `document` on Markdown headers and keep only setup-relevant sections.
///
/// A section body runs until the next header of any level. Sections with an
/// empty body are not emitted. A document without headers yields nothing.
/// A leading byte-order mark is ignored.
pub fn extract_relevant_sections(document: &str) -> Vec<Section> {
    let document = document.strip_prefix('\u{feff}').unwrap_or(document);
    let mut sections = Vec::new();
    let mut current: Option<String> = None;
    let mut body: Vec<String> = Vec::new();

    for raw in document.split('\n') {
        let line = raw.trim();

        if let Some(header) = header_text(line) {
            if let Some(open) = current.take() {
                if !body.is_empty() {
                    sections.push(Section::new(open, std::mem::take(&mut body)));
                }
            }
            body.clear();
            if is_relevant_header(header) {
                current = Some(header.to_string());
            }
            continue;
        }

        if current.is_some() {
            body.push(line.to_string());
        }
    }

    if let Some(open) = current {
        if !body.is_empty() {
            sections.push(Section::new(open, body));
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_only_relevant_sections_in_document_order() {
        let doc = "# Package\nintro\n## Installation\ncomposer require a/b\n## License\nMIT\n### Configuration\nset FOO\n";
        let sections = extract_relevant_sections(doc);
        let headers: Vec<&str> = sections.iter().map(|s| s.header.as_str()).collect();
        assert_eq!(headers, vec!["Installation", "Configuration"]);
        assert_eq!(sections[0].body_lines, vec!["composer require a/b"]);
        assert_eq!(sections[1].body_lines, vec!["set FOO", ""]);
    }

    #[test]
    fn leading_byte_order_mark_does_not_hide_first_header() {
        let sections =
            extract_relevant_sections("\u{feff}## Installation\n1. Publish the configuration file\n");
        assert_eq!(
            sections,
            vec![Section::new(
                "Installation",
                vec!["1. Publish the configuration file".to_string(), String::new()]
            )]
        );
    }

    #[test]
    fn document_without_headers_has_no_sections() {
        assert!(extract_relevant_sections("just text\n`composer dump-autoload`\n").is_empty());
    }

    #[test]
    fn header_match_is_case_insensitive_substring() {
        assert!(is_relevant_header("QUICK START guide"));
        assert!(is_relevant_header("Laravel installation"));
        assert!(!is_relevant_header("Installing"));
        assert!(!is_relevant_header("Contributing"));
    }

    #[test]
    fn lines_are_trimmed_and_indented_headers_still_split() {
        let doc = "## Setup\n   run it now   \n   ## Credits\nsomeone\n";
        let sections = extract_relevant_sections(doc);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].body_lines, vec!["run it now"]);
    }

    #[test]
    fn hash_without_space_is_body_text() {
        let doc = "## Usage\n#hashtag line\n";
        let sections = extract_relevant_sections(doc);
        assert_eq!(sections[0].body_lines, vec!["#hashtag line", ""]);
    }

    #[test]
    fn shell_comment_inside_fence_reads_as_header() {
        let doc = "## Setup\n```bash\n# publish assets\nphp artisan vendor:publish\n```\n";
        let sections = extract_relevant_sections(doc);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].body_lines, vec!["```bash"]);
    }

    #[test]
    fn relevant_header_followed_directly_by_header_is_dropped() {
        let doc = "## Installation\n## Usage\nuse it\n";
        let sections = extract_relevant_sections(doc);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].header, "Usage");
    }
}
