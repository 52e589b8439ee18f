//! Bracket-sequence validation.
//!
//! Recognises the pairs `()`, `[]` and `{}`. Any other character is
//! ignored, so `"a(b)c[d]e{f}g"` validates the same as `"()[]{}"`.

use crate::collections::Stack;

/// Returns the opener matching a closing bracket, or `None` if `c` is not
/// a closer.
fn opener_for(c: char) -> Option<char> {
    match c {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

/// Checks that every bracket in `text` is closed by its own kind in
/// properly nested order.
///
/// # Algorithm
/// Push openers; on a closer, the top of the stack must be its opener,
/// otherwise the sequence is rejected immediately. The text is valid iff
/// nothing is left open at the end.
///
/// # Complexity
/// Time: O(n), Space: O(n)
///
/// # Examples
/// ```
/// use u_stackkit::brackets::validate_brackets;
/// assert!(validate_brackets("()[]{}"));
/// assert!(validate_brackets(""));
/// assert!(!validate_brackets("(]"));
/// assert!(!validate_brackets("([)]"));
/// ```
pub fn validate_brackets(text: &str) -> bool {
    let mut open = Stack::new();
    for c in text.chars() {
        match c {
            '(' | '[' | '{' => open.push(c),
            _ => {
                let Some(expected) = opener_for(c) else {
                    continue;
                };
                if open.pop_if(|&top| top == expected).is_none() {
                    return false;
                }
            }
        }
    }
    open.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_table() {
        let cases = [
            ("()", true),
            ("()[]{}", true),
            ("(]", false),
            ("([)]", false),
            ("{[]}", true),
            ("", true),
            ("((()", false),
            ("(()())", true),
            ("([{}])", true),
            ("([}{])", false),
        ];
        for (text, expected) in cases {
            assert_eq!(validate_brackets(text), expected, "input {text:?}");
        }
    }

    #[test]
    fn test_dangling_closer() {
        assert!(!validate_brackets(")"));
        assert!(!validate_brackets("())"));
    }

    #[test]
    fn test_unmatched_trailing_opener() {
        assert!(!validate_brackets("((("));
        assert!(!validate_brackets("()("));
    }

    #[test]
    fn test_other_characters_ignored() {
        assert!(validate_brackets("a(b)c[d]e{f}g"));
        assert!(validate_brackets("no brackets here"));
        assert!(!validate_brackets("fn main() { let x = [1, 2; }"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn nested() -> impl Strategy<Value = String> {
        let leaf = Just(String::new());
        leaf.prop_recursive(6, 64, 4, |inner| {
            prop_oneof![
                (inner.clone(), 0_usize..3).prop_map(|(body, kind)| {
                    let (open, close) = [('(', ')'), ('[', ']'), ('{', '}')][kind];
                    format!("{open}{body}{close}")
                }),
                (inner.clone(), inner).prop_map(|(a, b)| format!("{a}{b}")),
            ]
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn well_nested_sequences_are_valid(text in nested()) {
            prop_assert!(validate_brackets(&text));
        }

        #[test]
        fn appending_a_closer_to_valid_is_invalid(text in nested(), kind in 0_usize..3) {
            let closer = [')', ']', '}'][kind];
            let broken = format!("{text}{closer}");
            prop_assert!(!validate_brackets(&broken));
        }

        #[test]
        fn prepending_an_opener_to_valid_is_invalid(text in nested(), kind in 0_usize..3) {
            let opener = ['(', '[', '{'][kind];
            let broken = format!("{opener}{text}");
            prop_assert!(!validate_brackets(&broken));
        }
    }
}
