//! Query match highlighting for suggestion labels.

/// A label split around the first case-insensitive occurrence of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightedText {
    pub before: String,
    pub matched: String,
    pub after: String,
}

impl HighlightedText {
    pub fn has_match(&self) -> bool {
        !self.matched.is_empty()
    }
}

/// Split `text` around the first occurrence of `query`, ignoring case.
///
/// Without a match (or with an empty query) the whole text lands in
/// `before`. Offsets are computed on chars so multi-byte labels never split
/// inside a code point.
pub fn highlight_match(text: &str, query: &str) -> HighlightedText {
    let unmatched = || HighlightedText {
        before: text.to_string(),
        ..Default::default()
    };

    if query.is_empty() {
        return unmatched();
    }

    let haystack: Vec<char> = text.chars().collect();
    let needle: Vec<char> = query.chars().map(fold).collect();
    let lowered: Vec<char> = haystack.iter().copied().map(fold).collect();

    if needle.len() > lowered.len() {
        return unmatched();
    }

    let Some(start) = lowered
        .windows(needle.len())
        .position(|window| window == needle.as_slice())
    else {
        return unmatched();
    };
    let end = start + needle.len();

    HighlightedText {
        before: haystack[..start].iter().collect(),
        matched: haystack[start..end].iter().collect(),
        after: haystack[end..].iter().collect(),
    }
}

/// One char in, one char out, so offsets line up with the original text.
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_in_middle_keeps_original_case() {
        let h = highlight_match("TheOctoCat", "octo");
        assert_eq!(h.before, "The");
        assert_eq!(h.matched, "Octo");
        assert_eq!(h.after, "Cat");
        assert!(h.has_match());
    }

    #[test]
    fn test_first_occurrence_only() {
        let h = highlight_match("abab", "ab");
        assert_eq!(h.before, "");
        assert_eq!(h.matched, "ab");
        assert_eq!(h.after, "ab");
    }

    #[test]
    fn test_no_match() {
        let h = highlight_match("octocat", "zzz");
        assert_eq!(h.before, "octocat");
        assert!(!h.has_match());
        assert!(h.after.is_empty());
    }

    #[test]
    fn test_empty_query_and_long_query() {
        assert!(!highlight_match("octocat", "").has_match());
        assert!(!highlight_match("oct", "octocat").has_match());
    }

    #[test]
    fn test_multibyte_label() {
        let h = highlight_match("jürgen-dev", "RG");
        assert_eq!(h.before, "jü");
        assert_eq!(h.matched, "rg");
        assert_eq!(h.after, "en-dev");
    }
}
