//! `case "$OS_FAMILY" in … esac` blocks.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::debug;

use super::dedent;
use crate::models::synonyms_for;

static CASE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)case "?\$OS_FAMILY"? in\n(?P<body>.+?)\n\s*esac"#).unwrap()
});

/// Indentation applied to a resolved branch; case bodies sit one level
/// deeper than `if` bodies in the templates.
const BRANCH_INDENT: &str = "  ";

/// Pick the branch of a case body that applies to `target`.
///
/// Segments are scanned in source order and the first one whose label
/// tokens intersect the target's synonyms wins. A `*` segment is kept as the
/// fallback. Returns an empty string when nothing applies.
pub fn select_case_branch(body: &str, target: &str) -> String {
    let synonyms = synonyms_for(target);
    let mut selected: Option<String> = None;
    let mut default_branch: Option<String> = None;

    for segment in body.split(";;").filter(|s| !s.trim().is_empty()) {
        let segment = segment.trim_matches('\n');
        let (label_line, rest) = segment.split_once('\n').unwrap_or((segment, ""));
        let label = label_line.trim().trim_end_matches(')').trim();
        let content = dedent(rest).trim_matches('\n').to_string();

        if label == "*" {
            default_branch = Some(content);
            continue;
        }

        let matches = label
            .split('|')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .any(|token| synonyms.contains(token));
        if matches {
            debug!("case label '{}' selected for {}", label, target);
            selected = Some(content);
            break;
        }
    }

    selected.or(default_branch).unwrap_or_default()
}

/// Replace every `case "$OS_FAMILY"` block with the branch for `target`.
///
/// The chosen branch is re-indented by two spaces. When no label matches and
/// there is no `*` branch the block is removed. Unterminated blocks are left
/// untouched.
pub fn render_case_blocks(document: &str, target: &str) -> String {
    let mut replaced = 0usize;

    let rendered = CASE_PATTERN
        .replace_all(document, |caps: &Captures<'_>| {
            replaced += 1;
            indent_branch(&select_case_branch(&caps["body"], target))
        })
        .into_owned();

    debug!("Rendered {} case block(s) for {}", replaced, target);
    rendered
}

fn indent_branch(branch: &str) -> String {
    if branch.is_empty() {
        return String::new();
    }
    let mut indented = branch
        .split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", BRANCH_INDENT, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    indented.push('\n');
    indented
}
