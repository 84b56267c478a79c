//! Small formatting and measuring helpers shared by widgets

/// Format a track length in seconds as `m:ss`
pub fn format_duration(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Truncate text with an ellipsis when it has more than `max_chars` chars
pub fn truncate_text(s: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars - 1).collect();
        format!("{}…", truncated)
    } else {
        s.to_string()
    }
}

/// Approximate rendered width of `s` at `size` px
///
/// Full-width (CJK, kana, hangul, fullwidth forms) glyphs take one em,
/// everything else a little over half an em. Good enough for column
/// allocation; layout never depends on it being exact.
pub fn measure_text(s: &str, size: f32) -> f32 {
    s.chars()
        .map(|c| if is_wide(c) { size } else { size * 0.55 })
        .sum()
}

fn is_wide(c: char) -> bool {
    matches!(c as u32,
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(600), "10:00");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdef", 4), "abc…");
        assert_eq!(truncate_text("abc", 0), "");
    }

    #[test]
    fn wide_glyphs_measure_wider() {
        let latin = measure_text("ab", 12.0);
        let cjk = measure_text("周杰", 12.0);
        assert!(cjk > latin);
        assert_eq!(cjk, 24.0);
        assert_eq!(measure_text("", 12.0), 0.0);
    }
}
