//! Byte-level tab expansion.
//!
//! Each tab byte becomes a fixed run of spaces. There is no notion of columns
//! or tab stops, and the input is never decoded, so any byte sequence is valid.

use crate::config::TabWidth;

pub const TAB: u8 = b'\t';
pub const SPACE: u8 = b' ';

/// Replace every tab byte in `input` with `width` spaces. All other bytes are
/// copied through in order.
pub fn expand_tabs(input: &[u8], width: TabWidth) -> Vec<u8> {
    let mut output = Vec::with_capacity(expanded_len(input, width).unwrap_or(input.len()));
    push_expanded(input, width, &mut output);
    output
}

/// Like [`expand_tabs`], but returns `None` instead of aborting when the
/// result cannot be sized or allocated.
pub fn try_expand_tabs(input: &[u8], width: TabWidth) -> Option<Vec<u8>> {
    let len = expanded_len(input, width)?;
    let mut output = Vec::new();
    output.try_reserve_exact(len).ok()?;
    push_expanded(input, width, &mut output);
    Some(output)
}

fn push_expanded(input: &[u8], width: TabWidth, output: &mut Vec<u8>) {
    for &byte in input {
        if byte == TAB {
            output.resize(output.len() + width.get(), SPACE);
        } else {
            output.push(byte);
        }
    }
}

pub fn count_tabs(input: &[u8]) -> usize {
    input.iter().filter(|&&b| b == TAB).count()
}

/// Length `expand_tabs` will produce for `input`, or `None` if it does not fit
/// in a `usize`.
pub fn expanded_len(input: &[u8], width: TabWidth) -> Option<usize> {
    let tabs = count_tabs(input);
    tabs.checked_mul(width.get())?.checked_add(input.len() - tabs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn width(n: i64) -> TabWidth {
        TabWidth::new(n).unwrap()
    }

    #[test]
    fn test_single_tab() {
        assert_eq!(expand_tabs(b"a\tb", width(2)), b"a  b");
    }

    #[test]
    fn test_empty_input() {
        assert!(expand_tabs(b"", width(4)).is_empty());
    }

    #[test]
    fn test_adjacent_tabs_expand_independently() {
        assert_eq!(expand_tabs(b"\t\t", width(3)), b"      ");
        assert_eq!(expand_tabs(b"ab\t\tc", width(1)), b"ab  c");
    }

    #[test]
    fn test_leading_and_trailing_tabs() {
        assert_eq!(expand_tabs(b"\tx\t", width(2)), b"  x  ");
    }

    #[test]
    fn test_no_column_alignment() {
        // "abc" already sits past the first stop; the tab still becomes 4 spaces.
        assert_eq!(expand_tabs(b"abc\td", width(4)), b"abc    d");
    }

    #[test]
    fn test_binary_bytes_pass_through() {
        let input = [0x00, 0xff, TAB, 0x80, b'\n'];
        assert_eq!(
            expand_tabs(&input, width(2)),
            vec![0x00, 0xff, SPACE, SPACE, 0x80, b'\n']
        );
    }

    #[test]
    fn test_width_one_keeps_length() {
        let input = b"a\tb\tc";
        let output = expand_tabs(input, width(1));
        assert_eq!(output.len(), input.len());
        assert_eq!(output, b"a b c");
    }

    #[test]
    fn test_huge_width_length_overflows() {
        let huge = width(i64::MAX);
        assert_eq!(expanded_len(b"abc", huge), Some(3));
        assert_eq!(expanded_len(b"\t\t", huge), None);
        assert!(try_expand_tabs(b"\t\t", huge).is_none());
    }

    #[test]
    fn test_huge_width_allocation_fails_cleanly() {
        // One tab fits in a usize but can never be allocated.
        assert!(try_expand_tabs(b"\t", width(i64::MAX)).is_none());
    }

    #[test]
    fn test_try_expand_matches_expand() {
        let input = b"if x {\n\treturn;\n}\n";
        assert_eq!(try_expand_tabs(input, width(4)), Some(expand_tabs(input, width(4))));
    }

    fn non_tab_bytes(bytes: &[u8]) -> Vec<u8> {
        bytes.iter().copied().filter(|&b| b != TAB).collect()
    }

    proptest! {
        #[test]
        fn prop_without_tabs_is_identity(
            input in proptest::collection::vec(any::<u8>().prop_filter("no tabs", |b| *b != TAB), 0..256),
            n in 1i64..16,
        ) {
            prop_assert_eq!(expand_tabs(&input, width(n)), input);
        }

        #[test]
        fn prop_length_law(
            input in proptest::collection::vec(any::<u8>(), 0..256),
            n in 1i64..16,
        ) {
            let tabs = count_tabs(&input);
            let output = expand_tabs(&input, width(n));
            prop_assert_eq!(output.len(), input.len() - tabs + tabs * n as usize);
            prop_assert_eq!(Some(output.len()), expanded_len(&input, width(n)));
        }

        #[test]
        fn prop_no_tabs_in_output(
            input in proptest::collection::vec(any::<u8>(), 0..256),
            n in 1i64..16,
        ) {
            prop_assert_eq!(count_tabs(&expand_tabs(&input, width(n))), 0);
        }

        #[test]
        fn prop_preserves_non_tab_order(
            input in proptest::collection::vec(prop_oneof![Just(TAB), Just(SPACE), any::<u8>()], 0..256),
            n in 1i64..16,
        ) {
            let output = expand_tabs(&input, width(n));
            // Spaces are introduced by expansion, so compare with both sides stripped of them.
            let strip = |bytes: &[u8]| -> Vec<u8> {
                non_tab_bytes(bytes).into_iter().filter(|&b| b != SPACE).collect()
            };
            prop_assert_eq!(strip(&output), strip(&input));
        }
    }
}
