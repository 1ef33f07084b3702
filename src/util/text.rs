// src/util/text.rs

/// Case-insensitive substring test.
///
/// Both sides are lowercased with full Unicode case mapping, so it works for
/// non-ASCII titles as well.
///
/// # Examples
///
/// ```
/// use discquiz::util::text::contains_ignore_case;
///
/// assert!(contains_ignore_case("Blue and White Porcelain", "white"));
/// assert!(!contains_ignore_case("Nunchucks", "rain"));
/// ```
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// "1 song", "3 songs"
pub fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_mixed_case_when_matching_then_ignores_case() {
        assert!(contains_ignore_case("Rice Field", "FIELD"));
        assert!(contains_ignore_case("rice field", "Rice"));
    }

    #[test]
    fn given_empty_needle_when_matching_then_matches_everything() {
        assert!(contains_ignore_case("anything", ""));
    }

    #[test]
    fn given_non_ascii_text_when_matching_then_finds_substring() {
        assert!(contains_ignore_case("稻香 Rice Field", "稻香"));
        assert!(contains_ignore_case("ÉTÉ", "été"));
    }

    #[test]
    fn given_counts_when_formatting_noun_then_pluralizes() {
        assert_eq!(count_noun(1, "song"), "1 song");
        assert_eq!(count_noun(0, "song"), "0 songs");
        assert_eq!(count_noun(12, "album"), "12 albums");
    }
}
