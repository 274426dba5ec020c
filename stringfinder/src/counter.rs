use memchr::memmem::{self, Finder};

/// Counts non-overlapping occurrences of `pattern` in `content`.
///
/// Scanning resumes right after the end of each match, so `"aa"` is found
/// twice in `"aaaa"` and once in `"aaa"`. An empty pattern counts as zero.
pub fn count_occurrences(content: &[u8], pattern: &[u8]) -> usize {
    if pattern.is_empty() {
        return 0;
    }
    memmem::find_iter(content, pattern).count()
}

/// A literal pattern prepared once and shared by every search task.
#[derive(Debug, Clone)]
pub struct PatternCounter {
    finder: Finder<'static>,
}

impl PatternCounter {
    pub fn new(pattern: &str) -> Self {
        Self {
            finder: Finder::new(pattern.as_bytes()).into_owned(),
        }
    }

    /// Same contract as [`count_occurrences`].
    pub fn count(&self, content: &[u8]) -> usize {
        if self.finder.needle().is_empty() {
            return 0;
        }
        self.finder.find_iter(content).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_overlapping() {
        assert_eq!(count_occurrences(b"aaaa", b"aa"), 2);
        assert_eq!(count_occurrences(b"aaa", b"aa"), 1);
        assert_eq!(count_occurrences(b"abababa", b"aba"), 2);
    }

    #[test]
    fn test_simple_counts() {
        assert_eq!(count_occurrences(b"foofoo", b"foo"), 2);
        assert_eq!(count_occurrences(b"foo", b"foo"), 1);
        assert_eq!(count_occurrences(b"a foo in the middle", b"foo"), 1);
        assert_eq!(count_occurrences(b"ends with foo", b"foo"), 1);
    }

    #[test]
    fn test_absent_pattern() {
        assert_eq!(count_occurrences(b"bar", b"foo"), 0);
        assert_eq!(count_occurrences(b"", b"foo"), 0);
        assert_eq!(count_occurrences(b"fo", b"foo"), 0);
        assert_eq!(count_occurrences(b"FOO", b"foo"), 0);
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(count_occurrences(b"anything", b""), 0);
        assert_eq!(PatternCounter::new("").count(b"anything"), 0);
    }

    #[test]
    fn test_binary_content() {
        let content = b"\x00\xffneedle\x00needle\xfe";
        assert_eq!(count_occurrences(content, b"needle"), 2);
        assert_eq!(count_occurrences(content, b"\x00"), 2);
    }

    #[test]
    fn test_counter_matches_free_function() {
        let counter = PatternCounter::new("ab");
        for content in [&b"ababab"[..], b"aabb", b"", b"ba", b"abab ab"] {
            assert_eq!(counter.count(content), count_occurrences(content, b"ab"));
        }
    }

    #[test]
    fn test_multibyte_pattern() {
        assert_eq!(PatternCounter::new("ü").count("über müde".as_bytes()), 2);
    }
}
