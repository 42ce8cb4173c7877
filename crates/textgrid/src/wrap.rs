//! Greedy word-wrapping of cell text.

/// Wraps `text` into lines of at most `width` characters, splitting only at
/// single ASCII spaces.
///
/// Words are accumulated greedily: a word that would push the current line
/// past `width` starts a new line. A single word longer than `width` is
/// never split; it is emitted whole as its own oversized line. Runs of
/// consecutive spaces are preserved, since each empty segment between them
/// counts as a word of its own.
///
/// A line may end with a trailing space when the separator was already
/// appended before the following word was pushed to the next line; callers
/// that pad lines into fixed-width fields are unaffected.
///
/// Empty input produces no lines; every produced line is non-empty.
///
/// # Example
///
/// ```rust
/// use textgrid::wrap;
///
/// assert_eq!(wrap("hello world foo bar", 11), vec!["hello world", "foo bar"]);
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let words: Vec<&str> = text.split(' ').collect();
    let last = words.len() - 1;

    let mut lines = Vec::new();
    let mut line = String::new();
    for (i, word) in words.iter().enumerate() {
        if !line.is_empty() && line.len() + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        line.push_str(word);
        if i != last && line.len() < width {
            line.push(' ');
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lines_fit_unless_single_oversized_word(
            text in "[a-z ]{0,60}",
            width in 1usize..25,
        ) {
            for line in wrap(&text, width) {
                prop_assert!(
                    line.len() <= width || !line.contains(' '),
                    "line {:?} exceeds width {} and is not a lone word",
                    line, width
                );
            }
        }

        #[test]
        fn produced_lines_are_never_empty(
            text in "[a-z ]{0,60}",
            width in 0usize..25,
        ) {
            for line in wrap(&text, width) {
                prop_assert!(!line.is_empty());
            }
        }

        #[test]
        fn non_empty_text_yields_at_least_one_line(
            text in "[a-z ]{1,60}",
            width in 1usize..25,
        ) {
            prop_assert!(!wrap(&text, width).is_empty());
        }

        #[test]
        fn wrapping_loses_no_words(
            words in proptest::collection::vec("[a-z]{1,8}", 1..10),
            width in 1usize..25,
        ) {
            let text = words.join(" ");
            let rejoined: Vec<String> = wrap(&text, width)
                .join(" ")
                .split_whitespace()
                .map(str::to_string)
                .collect();
            prop_assert_eq!(rejoined, words);
        }
    }
}
