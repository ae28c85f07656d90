//! Overlap-aware text splitting at sentence or line boundaries.

/// Characters a chunk prefers to end on.
const TERMINATORS: &[char] = &['.', '!', '?', '\n'];

/// Splits text into chunks of at most `chunk_size` characters, each
/// starting `overlap` characters before the end of the previous one.
///
/// Sizes are counted in characters, so a cut never lands inside a UTF-8
/// code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSplitter {
    chunk_size: usize,
    overlap: usize,
}

impl Default for ChunkSplitter {
    fn default() -> Self {
        Self::new(10_000, 100)
    }
}

impl ChunkSplitter {
    /// `chunk_size` is at least 1 and `overlap` is clamped below it.
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            chunk_size,
            overlap: overlap.min(chunk_size - 1),
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        // offsets[i] is the byte offset of char i; the last entry is text.len().
        let offsets: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_len = offsets.len() - 1;

        let mut chunks = Vec::new();
        let mut start = 0;
        while start < char_len {
            let nominal = start + self.chunk_size;
            if nominal >= char_len {
                chunks.push(&text[offsets[start]..]);
                break;
            }

            let window = &text[offsets[start]..offsets[nominal]];
            let end = match window.rfind(TERMINATORS) {
                Some(byte) => {
                    let at = offsets.partition_point(|&o| o < offsets[start] + byte);
                    if at < start + self.overlap {
                        nominal
                    } else {
                        at + 1
                    }
                }
                None => nominal,
            };

            chunks.push(&text[offsets[start]..offsets[end]]);
            start = end - self.overlap;
        }
        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Undo the overlap between consecutive chunks.
    fn rejoin(chunks: &[&str], overlap: usize) -> String {
        let mut out = String::new();
        for (i, chunk) in chunks.iter().enumerate() {
            let skip = if i == 0 { 0 } else { overlap };
            out.extend(chunk.chars().skip(skip));
        }
        out
    }

    #[test]
    fn empty_text_has_no_chunks() {
        assert!(ChunkSplitter::default().split("").is_empty());
    }

    #[test]
    fn short_text_is_one_chunk() {
        let text = "A short paragraph. Nothing to split.";
        assert_eq!(ChunkSplitter::default().split(text), vec![text]);
    }

    #[test]
    fn cuts_after_last_terminator() {
        let splitter = ChunkSplitter::new(20, 2);
        let chunks = splitter.split("Alpha beta. Gamma delta epsilon zeta eta theta.");
        assert_eq!(chunks[0], "Alpha beta.");
        assert!(chunks[1].starts_with("a. Gamma"));
        assert_eq!(rejoin(&chunks, 2), "Alpha beta. Gamma delta epsilon zeta eta theta.");
    }

    #[test]
    fn terminator_inside_overlap_forces_hard_cut() {
        let splitter = ChunkSplitter::new(10, 4);
        let text = "Ab. cdefghijklmnopqrstuvwxyz";
        let chunks = splitter.split(text);
        assert_eq!(chunks[0], "Ab. cdefgh");
        assert_eq!(chunks[1].chars().take(4).collect::<String>(), "efgh");
        assert_eq!(rejoin(&chunks, 4), text);
    }

    #[test]
    fn no_terminator_cuts_at_nominal_size() {
        let splitter = ChunkSplitter::new(5, 1);
        let chunks = splitter.split("abcdefghijkl");
        assert_eq!(chunks, vec!["abcde", "efghi", "ijkl"]);
    }

    #[test]
    fn newline_counts_as_terminator() {
        let splitter = ChunkSplitter::new(12, 0);
        let chunks = splitter.split("line one\nline two\nline three");
        assert_eq!(chunks[0], "line one\n");
        assert_eq!(chunks.concat(), "line one\nline two\nline three");
    }

    #[test]
    fn multibyte_text_is_split_on_char_boundaries() {
        let splitter = ChunkSplitter::new(4, 1);
        let text = "αβγδεζηθικ";
        let chunks = splitter.split(text);
        assert!(chunks.iter().all(|c| c.chars().count() <= 4));
        assert_eq!(rejoin(&chunks, 1), text);
    }

    #[test]
    fn chunks_respect_size_and_reconstruct_text() {
        let sentence = "The model improves reasoning! Does it scale? Yes.\n";
        let text = sentence.repeat(40);
        for (size, overlap) in [(100, 10), (64, 20), (200, 0), (30, 29)] {
            let splitter = ChunkSplitter::new(size, overlap);
            let chunks = splitter.split(&text);
            assert!(chunks.iter().all(|c| c.chars().count() <= size));
            assert_eq!(rejoin(&chunks, overlap), text, "size {size} overlap {overlap}");
        }
    }

    #[test]
    fn overlap_is_clamped() {
        let splitter = ChunkSplitter::new(10, 50);
        assert_eq!(splitter.overlap(), 9);
        assert_eq!(ChunkSplitter::new(0, 0).chunk_size(), 1);
    }
}
