//! `if`/`else`/`fi` blocks keyed on a macOS test.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::debug;

use super::dedent;
use crate::models::Platform;

/// `if [ "$OS_FAMILY" = "macos" ]; then … else … fi`
static SINGLE_BRACKET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)if \[ "\$OS_FAMILY" = "macos" \]; then\n(?P<mac>.+?)\nelse\n(?P<other>.+?)\nfi"#,
    )
    .unwrap()
});

/// `if [[ "$OS_FAMILY" == "macos" || "$OS_FAMILY" == "darwin" ]]; then … else … fi`
static DOUBLE_BRACKET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)if \[\[ "\$OS_FAMILY" == "macos" \|\| "\$OS_FAMILY" == "darwin" \]\]; then\n(?P<mac>.+?)\nelse\n(?P<other>.+?)\nfi"#,
    )
    .unwrap()
});

/// Replace every macOS-vs-other block with the branch for `target`.
///
/// The `then` branch is kept when `target` is `macos`, the `else` branch
/// otherwise. Both predicate spellings are handled, single-bracket first.
/// Blocks that do not match a pattern (for example an `if` with no `fi`)
/// are left untouched.
pub fn render_binary_blocks(document: &str, target: &str) -> String {
    let keep_mac = target == Platform::Macos.as_str();
    let mut replaced = 0usize;

    let rendered = SINGLE_BRACKET_PATTERN.replace_all(document, |caps: &Captures<'_>| {
        replaced += 1;
        choose_branch(caps, keep_mac)
    });
    let rendered = DOUBLE_BRACKET_PATTERN
        .replace_all(&rendered, |caps: &Captures<'_>| {
            replaced += 1;
            choose_branch(caps, keep_mac)
        })
        .into_owned();

    debug!("Rendered {} binary block(s) for {}", replaced, target);
    rendered
}

fn choose_branch(caps: &Captures<'_>, keep_mac: bool) -> String {
    let branch = if keep_mac { &caps["mac"] } else { &caps["other"] };
    format!("{}\n", dedent(branch).trim_end_matches('\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALIAS_BLOCK: &str = "if [ \"$OS_FAMILY\" = \"macos\" ]; then\n  alias ls='ls -G'\nelse\n  alias ls='ls --color=auto'\nfi";

    const LS_BLOCK: &str = "if [[ \"$OS_FAMILY\" == \"macos\" || \"$OS_FAMILY\" == \"darwin\" ]]; then\n  export CLICOLOR=1\n  export LSCOLORS=GxFxCxDxBxegedabagaced\nelse\n  eval \"$(dircolors -b)\"\nfi\n";

    #[test]
    fn test_macos_keeps_then_branch() {
        assert_eq!(render_binary_blocks(ALIAS_BLOCK, "macos"), "alias ls='ls -G'\n");
    }

    #[test]
    fn test_other_platform_keeps_else_branch() {
        assert_eq!(
            render_binary_blocks(ALIAS_BLOCK, "fedora"),
            "alias ls='ls --color=auto'\n"
        );
        assert_eq!(
            render_binary_blocks(ALIAS_BLOCK, "debian"),
            "alias ls='ls --color=auto'\n"
        );
    }

    #[test]
    fn test_double_bracket_variant() {
        let mac = render_binary_blocks(LS_BLOCK, "macos");
        assert_eq!(
            mac,
            "export CLICOLOR=1\nexport LSCOLORS=GxFxCxDxBxegedabagaced\n\n"
        );

        let linux = render_binary_blocks(LS_BLOCK, "debian");
        assert_eq!(linux, "eval \"$(dircolors -b)\"\n\n");
    }

    #[test]
    fn test_adjacent_blocks_are_not_merged() {
        let document = format!("{}\n# between\n{}\n", ALIAS_BLOCK, ALIAS_BLOCK);
        let rendered = render_binary_blocks(&document, "macos");

        assert_eq!(
            rendered,
            "alias ls='ls -G'\n\n# between\nalias ls='ls -G'\n\n"
        );
        assert!(!rendered.contains("--color=auto"));
    }

    #[test]
    fn test_surrounding_text_passes_through() {
        let document = format!("# header\nexport EDITOR=vim\n{}\nsource ~/.aliases\n", ALIAS_BLOCK);
        let rendered = render_binary_blocks(&document, "fedora");

        assert!(rendered.starts_with("# header\nexport EDITOR=vim\n"));
        assert!(rendered.ends_with("\nsource ~/.aliases\n"));
        assert!(!rendered.contains("ls -G"));
    }

    #[test]
    fn test_indented_else_is_not_matched() {
        // else/fi must start their own line
        let document = "setup() {\n  if [ \"$OS_FAMILY\" = \"macos\" ]; then\n    brew_setup\n  else\n    apt_setup\n  fi\n}\n";
        assert_eq!(render_binary_blocks(document, "macos"), document);
    }

    #[test]
    fn test_indented_if_keeps_leading_whitespace() {
        let document = "  if [ \"$OS_FAMILY\" = \"macos\" ]; then\n    brew_setup\nelse\n    apt_setup\nfi\n";
        assert_eq!(render_binary_blocks(document, "debian"), "  apt_setup\n\n");
    }

    #[test]
    fn test_multiline_branches_are_dedented() {
        let document = "if [ \"$OS_FAMILY\" = \"macos\" ]; then\n    one\n      nested\n    two\nelse\n    other\nfi";
        assert_eq!(
            render_binary_blocks(document, "macos"),
            "one\n  nested\ntwo\n"
        );
    }

    #[test]
    fn test_malformed_block_is_untouched() {
        let document = "if [ \"$OS_FAMILY\" = \"macos\" ]; then\n  alias ls='ls -G'\nelse\n  alias ls='ls --color=auto'\n";
        assert_eq!(render_binary_blocks(document, "macos"), document);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let once = render_binary_blocks(ALIAS_BLOCK, "fedora");
        let twice = render_binary_blocks(&once, "macos");
        assert_eq!(once, twice);
    }
}
