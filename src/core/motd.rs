//! Campfire MOTD banner layout.
//!
//! Layout is computed as plain text lines so it can be tested without a
//! terminal; the caller applies color.

use crate::core::system::SystemStats;

pub const MOTD_MAX_WIDTH: usize = 80;
pub const MOTD_MIN_WIDTH: usize = 40;
/// Widths at or above this get labelled fields
pub const MOTD_WIDE_WIDTH: usize = 60;
pub const MOTD_BORDER_CHAR: char = '─';

const PADDING_X: usize = 2;
const PADDING_Y: usize = 1;

/// Constrain a terminal width to the banner's supported range
pub fn clamp_width(width: usize) -> usize {
    width.clamp(MOTD_MIN_WIDTH, MOTD_MAX_WIDTH)
}

/// Text lines shown inside the banner
pub fn content_lines(stats: &SystemStats, width: usize) -> Vec<String> {
    if width >= MOTD_WIDE_WIDTH {
        vec![
            format!("Hostname: {}", stats.hostname),
            format!("IP Address: {}", stats.ip_address),
            format!("Franklin: v{}", stats.franklin_version),
            String::new(),
            format!("OS: {}", stats.os),
            format!("Memory: {}", stats.memory),
        ]
    } else {
        vec![
            stats.hostname.clone(),
            stats.ip_address.clone(),
            format!("Franklin v{}", stats.franklin_version),
            String::new(),
            stats.os.clone(),
            format!("Mem: {}", stats.memory),
        ]
    }
}

/// Full bordered banner, exactly `clamp_width(width)` columns wide
pub fn layout_banner(stats: &SystemStats, width: usize) -> Vec<String> {
    let width = clamp_width(width);
    let inner = width - 2;
    let text_width = inner - 2 * PADDING_X;
    let border: String = std::iter::repeat(MOTD_BORDER_CHAR).take(inner).collect();
    let blank = format!("│{}│", " ".repeat(inner));

    let mut lines = Vec::new();
    lines.push(format!("╭{}╮", border));
    lines.extend(std::iter::repeat(blank.clone()).take(PADDING_Y));
    for text in content_lines(stats, width) {
        let pad = " ".repeat(PADDING_X);
        lines.push(format!("│{}{}{}│", pad, center(&text, text_width), pad));
    }
    lines.extend(std::iter::repeat(blank).take(PADDING_Y));
    lines.push(format!("╰{}╯", border));
    lines
}

/// Center `text` in `width` columns, truncating with an ellipsis if needed
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
        truncated.push('…');
        return truncated;
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> SystemStats {
        SystemStats {
            hostname: "campfire".to_string(),
            ip_address: "192.168.1.20".to_string(),
            franklin_version: "1.4.0".to_string(),
            os: "Ubuntu 24.04".to_string(),
            memory: "3.2GB / 16.0GB (20%)".to_string(),
        }
    }

    #[test]
    fn test_clamp_width() {
        assert_eq!(clamp_width(10), 40);
        assert_eq!(clamp_width(65), 65);
        assert_eq!(clamp_width(200), 80);
    }

    #[test]
    fn test_wide_layout_labels_fields() {
        let lines = content_lines(&stats(), 80);
        assert_eq!(lines[0], "Hostname: campfire");
        assert_eq!(lines[2], "Franklin: v1.4.0");
        assert_eq!(lines[3], "");
        assert_eq!(lines[5], "Memory: 3.2GB / 16.0GB (20%)");
    }

    #[test]
    fn test_narrow_layout_is_compact() {
        let lines = content_lines(&stats(), 45);
        assert_eq!(lines[0], "campfire");
        assert_eq!(lines[2], "Franklin v1.4.0");
        assert_eq!(lines[5], "Mem: 3.2GB / 16.0GB (20%)");
    }

    #[test]
    fn test_every_line_has_banner_width() {
        for width in [20, 40, 59, 60, 72, 120] {
            let lines = layout_banner(&stats(), width);
            let expected = clamp_width(width);
            for line in &lines {
                assert_eq!(line.chars().count(), expected, "line {:?} at width {}", line, width);
            }
            // border + padding + 6 content lines + padding + border
            assert_eq!(lines.len(), 10);
        }
    }

    #[test]
    fn test_borders() {
        let lines = layout_banner(&stats(), 40);
        assert!(lines[0].starts_with('╭') && lines[0].ends_with('╮'));
        assert!(lines[9].starts_with('╰') && lines[9].ends_with('╯'));
        assert_eq!(lines[1].trim_matches('│').trim(), "");
    }

    #[test]
    fn test_long_values_are_truncated() {
        let mut long = stats();
        long.os = "x".repeat(100);
        let lines = layout_banner(&long, 40);
        assert!(lines[6].contains('…'));
        assert_eq!(lines[6].chars().count(), 40);
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("abcdefgh", 4), "abc…");
    }
}
