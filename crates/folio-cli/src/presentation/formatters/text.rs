use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Horizontal rule spanning `width` columns
pub fn rule(width: usize) -> String {
    "─".repeat(width)
}

/// Greedy word wrap measured in terminal columns.
///
/// Explicit newlines are kept. Words wider than `width` (and runs of CJK
/// text, which has no spaces) are broken at character boundaries.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in raw_line.split(' ') {
            let word_width = display_width(word);
            let gap = usize::from(!line.is_empty());

            if line_width + gap + word_width <= width {
                if gap == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += gap + word_width;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            for c in word.chars() {
                let char_width = c.width().unwrap_or(0);
                if line_width + char_width > width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(c);
                line_width += char_width;
            }
        }

        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_breaks_on_spaces() {
        assert_eq!(
            wrap("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_keeps_explicit_newlines() {
        assert_eq!(wrap("one\ntwo", 80), vec!["one", "two"]);
    }

    #[test]
    fn test_wrap_counts_wide_characters_twice() {
        // Six CJK characters are twelve columns
        assert_eq!(wrap("研究室の活動", 8), vec!["研究室の", "活動"]);
    }

    #[test]
    fn test_wrap_splits_overlong_words() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_empty_text_is_one_empty_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }
}
