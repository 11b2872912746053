//! Recursive character splitter for resume text.
//!
//! Splits on the first separator present in the text (paragraph, then line,
//! then space, then single characters), greedily merges the pieces back into
//! chunks of at most `chunk_size` characters, and carries up to
//! `chunk_overlap` characters of trailing pieces into the next chunk.
//! Pieces that are still too long are split again with the finer separators.
//!
//! Each separator stays attached to the start of the piece that follows it,
//! so every chunk is a contiguous slice of the input (trimmed).
//! All lengths are counted in chars.

use tracing::warn;

pub const DEFAULT_CHUNK_SIZE: usize = 500;
pub const DEFAULT_CHUNK_OVERLAP: usize = 50;
pub const DEFAULT_SEPARATORS: &[&str] = &["\n\n", "\n", " ", ""];

#[derive(Debug, Clone)]
pub struct TextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<&'static str>,
}

impl Default for TextSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, DEFAULT_CHUNK_OVERLAP)
    }
}

impl TextSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        debug_assert!(chunk_overlap < chunk_size, "overlap must be smaller than chunk size");
        Self {
            chunk_size,
            chunk_overlap,
            separators: DEFAULT_SEPARATORS.to_vec(),
        }
    }

    pub fn split_text(&self, text: &str) -> Vec<String> {
        self.split_recursive(text, &self.separators)
    }

    fn split_recursive(&self, text: &str, separators: &[&'static str]) -> Vec<String> {
        let position = separators
            .iter()
            .position(|sep| sep.is_empty() || text.contains(*sep));
        let (separator, finer): (&str, &[&'static str]) = match position {
            Some(i) => (separators[i], &separators[i + 1..]),
            None => ("", &[]),
        };

        let mut chunks = Vec::new();
        let mut short_pieces: Vec<&str> = Vec::new();

        for piece in split_keeping_separator(text, separator) {
            if char_len(piece) < self.chunk_size {
                short_pieces.push(piece);
                continue;
            }
            if !short_pieces.is_empty() {
                chunks.extend(self.merge_pieces(&short_pieces));
                short_pieces.clear();
            }
            if finer.is_empty() {
                chunks.extend(join_pieces(&[piece]));
            } else {
                chunks.extend(self.split_recursive(piece, finer));
            }
        }

        if !short_pieces.is_empty() {
            chunks.extend(self.merge_pieces(&short_pieces));
        }
        chunks
    }

    /// Greedy merge of adjacent pieces with a sliding overlap window.
    fn merge_pieces(&self, pieces: &[&str]) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut window: Vec<&str> = Vec::new();
        let mut total = 0usize;

        for &piece in pieces {
            let len = char_len(piece);

            if total + len > self.chunk_size && !window.is_empty() {
                if total > self.chunk_size {
                    warn!(
                        "Created a chunk of size {}, which is longer than the specified {}",
                        total, self.chunk_size
                    );
                }
                chunks.extend(join_pieces(&window));

                // Shrink from the front until the remainder fits as overlap
                // and leaves room for the incoming piece.
                while !window.is_empty()
                    && (total > self.chunk_overlap || total + len > self.chunk_size)
                {
                    total -= char_len(window.remove(0));
                }
            }

            window.push(piece);
            total += len;
        }

        chunks.extend(join_pieces(&window));
        chunks
    }
}

/// Splits before every occurrence of `separator`, keeping the separator at
/// the start of the following piece. Concatenating the pieces gives back
/// `text`. The empty separator splits into single chars.
fn split_keeping_separator<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect();
    }

    let mut pieces = Vec::new();
    let mut start = 0;
    for (index, _) in text.match_indices(separator) {
        if index > start {
            pieces.push(&text[start..index]);
        }
        start = index;
    }
    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}

/// Concatenates adjacent pieces into a trimmed chunk; blank chunks are dropped.
fn join_pieces(pieces: &[&str]) -> Option<String> {
    let joined = pieces.concat();
    let trimmed = joined.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
