use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::sections::extract_relevant_sections;
use crate::types::{Section, SetupStep};

const MIN_LIST_ITEM_CHARS: usize = 10;
const MIN_CODE_LINE_CHARS: usize = 5;
const MIN_INLINE_COMMAND_CHARS: usize = 10;

/// Substrings an inline span needs before it is treated as a command.
const INLINE_COMMAND_MARKERS: &[&str] = &["php", "composer", "artisan"];

/// Commands already covered by the primary `composer require` line.
const FALLBACK_EXCLUDED: &[&str] = &["require", "install"];

static LIST_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(\d+\.|\*|-)\s+(.+)$").expect("list item regex is valid"));

static CODE_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:bash|shell|php|sh)?\n(.+?)\n```").expect("code block regex is valid")
});

// Inline spans never cross a line break, so fence markers are not read as spans.
static INLINE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`\n]+)`").expect("inline code regex is valid"));

static FALLBACK_COMMAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"`(php artisan|composer|npm|yarn|\./artisan)[^\S\n]+([^`\n]+)`")
        .expect("fallback command regex is valid")
});

/// Numbered or bulleted list items long enough to read as instructions.
pub fn list_item_steps(text: &str) -> Vec<SetupStep> {
    LIST_ITEM_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(2))
        .map(|m| m.as_str().trim())
        .filter(|item| item.chars().count() >= MIN_LIST_ITEM_CHARS)
        .map(SetupStep::item)
        .collect()
}

/// Each non-comment line of a shell/php fenced block becomes a run step.
pub fn code_block_steps(text: &str) -> Vec<SetupStep> {
    let mut steps = Vec::new();
    for caps in CODE_BLOCK_RE.captures_iter(text) {
        let Some(block) = caps.get(1) else {
            continue;
        };
        for line in block.as_str().trim().split('\n') {
            let line = line.trim();
            if line.starts_with('#') || line.chars().count() < MIN_CODE_LINE_CHARS {
                continue;
            }
            steps.push(SetupStep::run(line));
        }
    }
    steps
}

/// Inline code spans that look like php/composer/artisan invocations.
pub fn inline_command_steps(text: &str) -> Vec<SetupStep> {
    INLINE_CODE_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|code| looks_like_command(code))
        .map(SetupStep::run)
        .collect()
}

fn looks_like_command(code: &str) -> bool {
    code.contains(' ')
        && code.chars().count() > MIN_INLINE_COMMAND_CHARS
        && INLINE_COMMAND_MARKERS
            .iter()
            .any(|marker| code.contains(marker))
}

/// Run all three passes over one section body.
///
/// Output order is list items, then code block lines, then inline spans.
/// Duplicates across passes are kept.
pub fn process_section(body_lines: &[String]) -> Vec<SetupStep> {
    let text = body_lines.join("\n");
    let mut steps = list_item_steps(&text);
    steps.extend(code_block_steps(&text));
    steps.extend(inline_command_steps(&text));
    steps
}

/// Scan a whole document for inline tool commands, skipping install/require
/// invocations. Deduplicated, first-seen order.
pub fn fallback_command_steps(document: &str) -> Vec<SetupStep> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut steps = Vec::new();
    for m in FALLBACK_COMMAND_RE.find_iter(document) {
        let span = m.as_str();
        if FALLBACK_EXCLUDED.iter().any(|word| span.contains(word)) {
            continue;
        }
        let line = format!("- Run {span}");
        if seen.insert(line.clone()) {
            steps.push(SetupStep::from_line(line));
        }
    }
    steps
}

/// Mine the relevant sections, falling back to a whole-document command scan
/// when they yield nothing.
pub fn mine_steps(sections: &[Section], document: &str) -> Vec<SetupStep> {
    let primary: Vec<SetupStep> = sections
        .iter()
        .flat_map(|section| process_section(&section.body_lines))
        .collect();
    if !primary.is_empty() {
        log::debug!("mined {} steps from {} sections", primary.len(), sections.len());
        return primary;
    }

    let fallback = fallback_command_steps(document);
    log::debug!("section mining empty; document scan found {}", fallback.len());
    fallback
}

/// Section extraction followed by [`mine_steps`].
pub fn extract_setup_steps(document: &str) -> Vec<SetupStep> {
    let sections = extract_relevant_sections(document);
    mine_steps(&sections, document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(steps: Vec<SetupStep>) -> Vec<String> {
        steps.into_iter().map(SetupStep::into_string).collect()
    }

    #[test]
    fn list_items_drop_short_labels() {
        let text = "1. Run the migrations\n- short\n* Configure the cache driver properly";
        assert_eq!(
            lines(list_item_steps(text)),
            vec![
                "- Run the migrations",
                "- Configure the cache driver properly"
            ]
        );
    }

    #[test]
    fn code_block_skips_comments_and_fences() {
        let text = "```bash\n# comment\nphp artisan migrate\n```";
        assert_eq!(
            lines(code_block_steps(text)),
            vec!["- Run `php artisan migrate`"]
        );
        assert_eq!(
            lines(process_section(&[
                "```bash".to_string(),
                "# comment".to_string(),
                "php artisan migrate".to_string(),
                "```".to_string(),
            ])),
            vec!["- Run `php artisan migrate`"]
        );
    }

    #[test]
    fn code_block_without_language_and_short_lines() {
        let text = "```\nls\nphp artisan queue:work\n\n```";
        assert_eq!(
            lines(code_block_steps(text)),
            vec!["- Run `php artisan queue:work`"]
        );
    }

    #[test]
    fn code_block_with_other_language_is_ignored() {
        assert!(code_block_steps("```json\n{\"key\": \"value\"}\n```").is_empty());
    }

    #[test]
    fn inline_spans_need_space_length_and_marker() {
        let text = "Use `php artisan vendor:publish` then edit `config/app.php` and `npm run dev`.";
        assert_eq!(
            lines(inline_command_steps(text)),
            vec!["- Run `php artisan vendor:publish`"]
        );
    }

    #[test]
    fn passes_concatenate_without_dedup() {
        let body = vec![
            "- Run `php artisan migrate --force` after deploy".to_string(),
            "```".to_string(),
            "php artisan migrate --force".to_string(),
            "```".to_string(),
        ];
        assert_eq!(
            lines(process_section(&body)),
            vec![
                "- Run `php artisan migrate --force` after deploy",
                "- Run `php artisan migrate --force`",
                "- Run `php artisan migrate --force`",
            ]
        );
    }

    #[test]
    fn fallback_excludes_install_and_dedups() {
        let doc = "Try `npm install` first.\nThen `composer dump-autoload`.\nAgain `composer dump-autoload`.\n`composer require foo/bar`";
        assert_eq!(
            lines(fallback_command_steps(doc)),
            vec!["- Run `composer dump-autoload`"]
        );
    }

    #[test]
    fn fallback_keeps_first_seen_order() {
        let doc = "`yarn build` and `./artisan serve` and `php artisan optimize` and `yarn build`";
        assert_eq!(
            lines(fallback_command_steps(doc)),
            vec![
                "- Run `yarn build`",
                "- Run `./artisan serve`",
                "- Run `php artisan optimize`",
            ]
        );
    }

    #[test]
    fn headerless_document_uses_fallback_scan() {
        let doc = "A package.\n\nRun `php artisan cache:clear` when done.\n";
        assert_eq!(
            lines(extract_setup_steps(doc)),
            vec!["- Run `php artisan cache:clear`"]
        );
    }

    #[test]
    fn primary_path_wins_over_fallback() {
        let doc = "## Installation\n\n1. Publish the config file\n\n## Misc\n`composer dump-autoload`\n";
        assert_eq!(
            lines(extract_setup_steps(doc)),
            vec!["- Publish the config file"]
        );
    }

    #[test]
    fn sections_are_mined_in_order() {
        let doc = "## Setup\n- Add the service provider\n## About\n- This item is ignored\n## Usage\n`php artisan demo:run`\n";
        assert_eq!(
            lines(extract_setup_steps(doc)),
            vec!["- Add the service provider", "- Run `php artisan demo:run`"]
        );
    }
}
