//! OS-specific template rendering.
//!
//! Shell templates shipped with Franklin carry `if`/`else`/`fi` and
//! `case "$OS_FAMILY" in … esac` blocks keyed on the target platform. At
//! install time each block is collapsed into the one branch that applies to
//! the machine being set up. The transforms here are pure text functions;
//! the `*_file` helpers wrap them with a whole-file read and write.

mod binary;
mod case;

pub use binary::*;
pub use case::*;

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::RenderError;
use crate::models::Platform;

fn is_indent(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Remove whitespace common to the start of every non-blank line.
///
/// Lines made only of spaces and tabs are emptied and do not take part in
/// computing the margin.
pub fn dedent(text: &str) -> String {
    let mut margin: Option<&str> = None;
    for line in text.split('\n') {
        let content = line.trim_start_matches(is_indent);
        if content.is_empty() {
            continue;
        }
        let indent = &line[..line.len() - content.len()];
        margin = Some(match margin {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
    }
    let margin = margin.unwrap_or("");

    text.split('\n')
        .map(|line| {
            if line.trim_start_matches(is_indent).is_empty() {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

/// End the document with exactly one newline
pub fn normalize_trailing_newline(text: &str) -> String {
    format!("{}\n", text.trim_end_matches('\n'))
}

/// Convert CRLF and lone CR line endings to LF
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Render binary `if`/`else` blocks of a zshrc template in place
pub fn render_zshrc_file(path: &Path, platform: Platform) -> Result<(), RenderError> {
    rewrite_in_place(path, |text| render_binary_blocks(text, platform.as_str()))?;
    info!("Rendered zshrc template {} for {}", path.display(), platform);
    Ok(())
}

/// Render `case` blocks of an update-script template in place
pub fn render_update_file(path: &Path, platform: Platform) -> Result<(), RenderError> {
    rewrite_in_place(path, |text| render_case_blocks(text, platform.as_str()))?;
    info!("Rendered update template {} for {}", path.display(), platform);
    Ok(())
}

fn rewrite_in_place<F>(path: &Path, transform: F) -> Result<(), RenderError>
where
    F: FnOnce(&str) -> String,
{
    let original = fs::read_to_string(path)
        .map_err(|e| RenderError::ReadError(path.to_path_buf(), e))?;
    let original = normalize_line_endings(&original);
    let rendered = normalize_trailing_newline(&transform(&original));
    debug!(
        "{}: {} bytes in, {} bytes out",
        path.display(),
        original.len(),
        rendered.len()
    );
    fs::write(path, rendered).map_err(|e| RenderError::WriteError(path.to_path_buf(), e))
}
