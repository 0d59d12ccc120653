/// Reverse a string character by character.
///
/// Characters are Unicode scalar values, so multi-byte text such as `"añb"`
/// reverses to `"bña"` rather than to broken UTF-8.
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

/// Number of characters in `input`, as shown by the character counter.
pub fn char_len(input: &str) -> usize {
    input.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_empty() {
        assert_eq!(reverse(""), "");
    }

    #[test]
    fn test_reverse_ascii() {
        assert_eq!(reverse("hello"), "olleh");
        assert_eq!(reverse("hello world"), "dlrow olleh");
        assert_eq!(reverse("a"), "a");
    }

    #[test]
    fn test_reverse_keeps_whitespace() {
        assert_eq!(reverse("  ab "), " ba  ");
    }

    #[test]
    fn test_reverse_multibyte() {
        assert_eq!(reverse("añb"), "bña");
        assert_eq!(reverse("→x"), "x→");
    }

    #[test]
    fn test_reverse_is_involution() {
        let samples = ["", "a", "ab", "racecar", "Hola, mundo!", "ñandú →", "  spaced  "];

        for sample in samples {
            assert_eq!(reverse(&reverse(sample)), sample, "sample: {:?}", sample);
        }
    }

    #[test]
    fn test_char_len_counts_characters_not_bytes() {
        assert_eq!(char_len(""), 0);
        assert_eq!(char_len("abcd"), 4);
        assert_eq!(char_len("ñññ"), 3);
    }
}
