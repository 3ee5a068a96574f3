use thiserror::Error;

const ELLIPSIS: &str = "...";
const HYPHEN: char = '-';

/// How a text block is broken into display lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WrapPolicy {
    /// Greedy word packing; over-long words stay whole.
    #[default]
    Word,
    /// Exactly `width` characters per line, ignoring word and line boundaries.
    Hard,
    /// Word packing against `width - 1`, closing each wrapped line with `-`.
    Hyphenate,
    /// One line per source line, cut to `width`.
    Truncate,
    /// One line per source line, over-long lines cut and ended with `...`.
    TruncateWithEllipsis,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WrapError {
    #[error("wrap width must be at least 1")]
    ZeroWidth,
    #[error("ellipsis truncation needs a width of at least 3, got {width}")]
    EllipsisTooNarrow { width: usize },
}

impl WrapPolicy {
    /// Narrowest width the policy accepts.
    pub const fn min_width(self) -> usize {
        match self {
            WrapPolicy::TruncateWithEllipsis => ELLIPSIS.len(),
            _ => 1,
        }
    }

    pub fn apply(self, text: &str, width: usize) -> Result<Vec<String>, WrapError> {
        wrap(text, width, self)
    }
}

/// Split `text` into lines no wider than `width` according to `policy`.
///
/// Always returns at least one line. Lengths are counted in characters.
pub fn wrap(text: &str, width: usize, policy: WrapPolicy) -> Result<Vec<String>, WrapError> {
    if width == 0 {
        return Err(WrapError::ZeroWidth);
    }

    let lines = match policy {
        WrapPolicy::Word => word_wrap(text, width),
        WrapPolicy::Hard => hard_wrap(text, width),
        WrapPolicy::Hyphenate => hyphenate_wrap(text, width),
        WrapPolicy::Truncate => truncate(text, width),
        WrapPolicy::TruncateWithEllipsis => truncate_with_ellipsis(text, width)?,
    };
    Ok(lines)
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Shared greedy packer. `limit` is the widest a joined line may get before
/// the word moves down; `marker` is appended to lines closed by a wrap.
fn pack_words(text: &str, limit: usize, marker: Option<char>) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = char_len(word);
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
            continue;
        }

        if current_len + 1 + word_len > limit {
            if let Some(marker) = marker {
                current.push(marker);
            }
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        }
    }

    lines.push(current);
    lines
}

fn word_wrap(text: &str, width: usize) -> Vec<String> {
    pack_words(text, width, None)
}

fn hyphenate_wrap(text: &str, width: usize) -> Vec<String> {
    pack_words(text, width - 1, Some(HYPHEN))
}

fn hard_wrap(text: &str, width: usize) -> Vec<String> {
    let stream: Vec<char> = text.chars().filter(|ch| !matches!(ch, '\n' | '\r')).collect();
    if stream.is_empty() {
        return vec![String::new()];
    }
    stream
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Source lines split on `\n`, each without a trailing `\r`.
pub(crate) fn source_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

fn truncate(text: &str, width: usize) -> Vec<String> {
    source_lines(text)
        .map(|line| line.chars().take(width).collect())
        .collect()
}

fn truncate_with_ellipsis(text: &str, width: usize) -> Result<Vec<String>, WrapError> {
    if width < WrapPolicy::TruncateWithEllipsis.min_width() {
        return Err(WrapError::EllipsisTooNarrow { width });
    }
    Ok(source_lines(text)
        .map(|line| {
            if char_len(line) > width {
                let mut cut: String = line.chars().take(width - ELLIPSIS.len()).collect();
                cut.push_str(ELLIPSIS);
                cut
            } else {
                line.to_string()
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str, width: usize, policy: WrapPolicy) -> Vec<String> {
        wrap(text, width, policy).unwrap()
    }

    #[test]
    fn word_wrap_counts_the_joining_space() {
        assert_eq!(
            lines("Hello World This is a test", 10, WrapPolicy::Word),
            vec!["Hello", "World This", "is a test"]
        );
    }

    #[test]
    fn word_wrap_keeps_long_words_whole() {
        assert_eq!(
            lines("a extraordinarily b", 5, WrapPolicy::Word),
            vec!["a", "extraordinarily", "b"]
        );
    }

    #[test]
    fn word_wrap_treats_line_breaks_as_spaces() {
        assert_eq!(lines("one\ntwo", 20, WrapPolicy::Word), vec!["one two"]);
    }

    #[test]
    fn empty_text_yields_one_empty_line() {
        for policy in [
            WrapPolicy::Word,
            WrapPolicy::Hard,
            WrapPolicy::Hyphenate,
            WrapPolicy::Truncate,
            WrapPolicy::TruncateWithEllipsis,
        ] {
            assert_eq!(lines("", 4, policy), vec![String::new()], "{policy:?}");
        }
    }

    #[test]
    fn hard_wrap_ignores_boundaries() {
        assert_eq!(
            lines("abc def\nghij", 4, WrapPolicy::Hard),
            vec!["abc ", "defg", "hij"]
        );
        assert_eq!(lines("abcdef", 3, WrapPolicy::Hard), vec!["abc", "def"]);
    }

    #[test]
    fn hyphenate_marks_wrapped_lines() {
        assert_eq!(
            lines("aaa bbb ccc", 8, WrapPolicy::Hyphenate),
            vec!["aaa bbb-", "ccc"]
        );
        assert_eq!(
            lines("aa bb", 5, WrapPolicy::Hyphenate),
            vec!["aa-", "bb"]
        );
    }

    #[test]
    fn truncation_drops_carriage_returns() {
        assert_eq!(
            lines("abcdefgh\r\nxy\r\n", 5, WrapPolicy::Truncate),
            vec!["abcde", "xy", ""]
        );
        assert_eq!(
            lines("abc\r\nabcdefgh", 5, WrapPolicy::TruncateWithEllipsis),
            vec!["abc", "ab..."]
        );
    }

    #[test]
    fn truncate_cuts_each_line() {
        assert_eq!(
            lines("abcdefgh\nxy", 5, WrapPolicy::Truncate),
            vec!["abcde", "xy"]
        );
    }

    #[test]
    fn ellipsis_replaces_the_tail() {
        assert_eq!(
            lines("abcdefgh", 5, WrapPolicy::TruncateWithEllipsis),
            vec!["ab..."]
        );
        assert_eq!(
            lines("abcde\nabc", 5, WrapPolicy::TruncateWithEllipsis),
            vec!["abcde", "abc"]
        );
        assert_eq!(
            lines("abcd", 3, WrapPolicy::TruncateWithEllipsis),
            vec!["..."]
        );
    }

    #[test]
    fn ellipsis_rejects_narrow_widths() {
        assert_eq!(
            wrap("abcdef", 2, WrapPolicy::TruncateWithEllipsis),
            Err(WrapError::EllipsisTooNarrow { width: 2 })
        );
    }

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(wrap("abc", 0, WrapPolicy::Word), Err(WrapError::ZeroWidth));
    }
}
