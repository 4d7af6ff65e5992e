//! Text measurement helpers shared by sizing and painting.

/// Newlines become spaces and runs of whitespace collapse to one space,
/// with none at either end.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Greedy line wrap at `max_width` pixels for characters `char_width` wide.
///
/// A line that does not fit breaks at the last space before the column
/// limit, or at the limit itself when there is no such space. The rest is
/// trimmed and wrapped again. Empty input gives no lines.
#[must_use]
pub fn split_text(line: &str, char_width: i64, max_width: i64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest: Vec<char> = line.chars().collect();

    while !rest.is_empty() {
        if rest.len() as i64 * char_width <= max_width {
            lines.push(rest.iter().collect());
            break;
        }
        let max_index = (max_width / char_width).max(1) as usize;
        let break_index = find_index_for_line_break(&rest, max_index);
        lines.push(rest[..break_index].iter().collect());

        let remainder: String = rest[break_index..].iter().collect();
        rest = remainder.trim().chars().collect();
    }
    lines
}

/// Last space strictly before `max_index`, else `max_index`.
fn find_index_for_line_break(line: &[char], max_index: usize) -> usize {
    line[..max_index]
        .iter()
        .rposition(|&c| c == ' ')
        .filter(|&index| index > 0)
        .unwrap_or(max_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\n b\tc "), "a b c");
        assert_eq!(collapse_whitespace(" \n "), "");
    }

    #[test]
    fn test_short_line_is_not_split() {
        assert_eq!(split_text("hello world", 8, 590), vec!["hello world"]);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(split_text("", 8, 590).is_empty());
    }

    #[test]
    fn test_split_at_last_space_before_limit() {
        // 10 columns: "aaaa bbbb cccc" breaks after "aaaa bbbb".
        assert_eq!(
            split_text("aaaa bbbb cccc", 8, 80),
            vec!["aaaa bbbb", "cccc"]
        );
    }

    #[test]
    fn test_split_without_space_breaks_at_limit() {
        assert_eq!(split_text("abcdefghij", 8, 32), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_larger_characters_wrap_sooner() {
        // 24px characters: 4 columns in 100px.
        assert_eq!(split_text("ab cd ef", 24, 100), vec!["ab", "cd", "ef"]);
    }

    #[test]
    fn test_exact_fit_is_one_line() {
        let text = "a".repeat(10);
        assert_eq!(split_text(&text, 8, 80), vec![text]);
    }
}
