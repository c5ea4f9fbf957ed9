//! Overlapping text chunking.

/// Splits text into overlapping windows of at most `chunk_size`
/// characters, preferring paragraph, then sentence, then word
/// boundaries before falling back to a hard cut.
///
/// Consecutive chunks share `chunk_overlap` characters so that context
/// spanning a chunk boundary is not lost from retrieval.
pub struct TextChunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl TextChunker {
    /// Create a chunker.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_overlap >= chunk_size` or `chunk_size` is zero;
    /// such a configuration cannot make forward progress.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be > 0");
        assert!(
            chunk_overlap < chunk_size,
            "chunk_overlap must be smaller than chunk_size"
        );

        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    /// Split `text` into chunks, in source order.
    ///
    /// Whitespace-only input yields no chunks. Sizes are measured in
    /// chars, so multi-byte input never splits inside a code point.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = text.chars().collect();
        if chars.len() <= self.chunk_size {
            return vec![text.to_string()];
        }

        let mut chunks = Vec::new();
        let mut start = 0;

        loop {
            let hard_end = (start + self.chunk_size).min(chars.len());
            let end = if hard_end == chars.len() {
                hard_end
            } else {
                self.find_break(&chars, start, hard_end)
            };

            chunks.push(chars[start..end].iter().collect());

            if end == chars.len() {
                break;
            }
            start = end - self.chunk_overlap;
        }

        chunks
    }

    /// Pick a break position in `(floor, hard_end]`, preferring the
    /// latest paragraph, then sentence, then word boundary. The floor
    /// keeps the next chunk's start strictly past the current one.
    fn find_break(&self, chars: &[char], start: usize, hard_end: usize) -> usize {
        let floor = start + self.chunk_overlap + 1;

        let mut sentence_break = None;
        let mut word_break = None;

        for end in (floor..=hard_end).rev() {
            if end >= 2 && chars[end - 1] == '\n' && chars[end - 2] == '\n' {
                // Paragraph boundary wins outright
                return end;
            }

            if sentence_break.is_none()
                && matches!(chars[end - 1], '.' | '!' | '?' | '\n')
                && chars.get(end).map_or(true, |c| c.is_whitespace())
            {
                sentence_break = Some(end);
            }

            if word_break.is_none() && chars[end - 1].is_whitespace() {
                word_break = Some(end);
            }
        }

        sentence_break.or(word_break).unwrap_or(hard_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_single_chunk() {
        let chunker = TextChunker::new(100, 10);
        let chunks = chunker.chunk("hello world");
        assert_eq!(chunks, vec!["hello world".to_string()]);
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        let chunker = TextChunker::new(100, 10);
        assert!(chunker.chunk("").is_empty());
        assert!(chunker.chunk("   \n\n  ").is_empty());
    }

    #[test]
    fn test_chunk_length_bound() {
        let chunker = TextChunker::new(50, 10);
        let text = "word ".repeat(100);
        for chunk in chunker.chunk(&text) {
            assert!(chunk.chars().count() <= 50);
        }
    }

    #[test]
    fn test_consecutive_chunks_share_overlap() {
        let chunker = TextChunker::new(40, 8);
        let text = "alpha beta gamma delta ".repeat(20);
        let chunks = chunker.chunk(&text);
        assert!(chunks.len() > 1);

        for pair in chunks.windows(2) {
            let prev: Vec<char> = pair[0].chars().collect();
            let next: Vec<char> = pair[1].chars().collect();
            let suffix: String = prev[prev.len() - 8..].iter().collect();
            let prefix: String = next[..8].iter().collect();
            assert_eq!(suffix, prefix);
        }
    }

    #[test]
    fn test_coverage_reconstructs_source() {
        let chunker = TextChunker::new(30, 6);
        let text = "the quick brown fox jumps over the lazy dog again and again".to_string();
        let chunks = chunker.chunk(&text);

        let mut rebuilt = chunks[0].clone();
        for chunk in &chunks[1..] {
            let tail: String = chunk.chars().skip(6).collect();
            rebuilt.push_str(&tail);
        }
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_prefers_paragraph_boundary() {
        let chunker = TextChunker::new(40, 5);
        let text = format!("{}\n\n{}", "a".repeat(30), "b".repeat(30));
        let chunks = chunker.chunk(&text);

        // First chunk ends at the paragraph break, not at the hard cut
        assert!(chunks[0].ends_with("\n\n"));
        assert!(chunks[0].starts_with('a'));
    }

    #[test]
    fn test_prefers_sentence_over_word_boundary() {
        let chunker = TextChunker::new(40, 5);
        let text = "This is one sentence. And here comes another long one after it";
        let chunks = chunker.chunk(text);
        assert!(chunks[0].trim_end().ends_with("sentence."));
    }

    #[test]
    fn test_hard_cut_without_any_boundary() {
        let chunker = TextChunker::new(20, 4);
        let text = "x".repeat(50);
        let chunks = chunker.chunk(&text);
        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.chars().count() <= 20));
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        let chunker = TextChunker::new(10, 2);
        let text = "héllo wörld ünd sö wëiter ".repeat(5);
        let chunks = chunker.chunk(&text);
        assert!(!chunks.is_empty());
    }

    #[test]
    #[should_panic(expected = "chunk_overlap must be smaller")]
    fn test_overlap_must_be_smaller_than_size() {
        TextChunker::new(10, 10);
    }
}
