//! Fixed-window text chunking

use crate::config::ChunkingConfig;
use crate::error::Result;

/// Splits page text into fixed-size overlapping character windows.
///
/// Windows never span pages, so every chunk keeps a page-accurate citation.
pub struct WindowChunker {
    /// Window size in characters
    window_size: usize,
    /// Overlap between consecutive windows in characters
    overlap: usize,
}

impl WindowChunker {
    /// Create a new chunker. Fails if the overlap does not leave the window
    /// room to advance.
    pub fn new(window_size: usize, overlap: usize) -> Result<Self> {
        let config = ChunkingConfig {
            window_size,
            overlap,
        };
        config.validate()?;
        Ok(Self {
            window_size,
            overlap,
        })
    }

    /// Create a chunker from validated configuration
    pub fn from_config(config: &ChunkingConfig) -> Result<Self> {
        Self::new(config.window_size, config.overlap)
    }

    /// Split one page into windows.
    ///
    /// Text no longer than the window yields exactly one window equal to the
    /// input. Whitespace-only text yields none. The final partial window is
    /// kept even when shorter than the window size. Boundaries are `char`
    /// boundaries, so multi-byte text is never split mid-scalar.
    pub fn split_page<'a>(&self, text: &'a str) -> Vec<&'a str> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        // Byte offset of every char boundary, including the end of the text
        let mut bounds: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        bounds.push(text.len());
        let char_count = bounds.len() - 1;

        if char_count <= self.window_size {
            return vec![text];
        }

        let step = self.window_size - self.overlap;
        let mut windows = Vec::new();
        let mut start = 0;

        loop {
            let end = (start + self.window_size).min(char_count);
            windows.push(&text[bounds[start]..bounds[end]]);
            if end == char_count {
                break;
            }
            start += step;
        }

        windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_page_yields_single_window() {
        let chunker = WindowChunker::new(100, 20).unwrap();
        let text = "A short page of text.";
        assert_eq!(chunker.split_page(text), vec![text]);
    }

    #[test]
    fn test_page_exactly_window_size_yields_single_window() {
        let chunker = WindowChunker::new(10, 3).unwrap();
        let text = "abcdefghij";
        assert_eq!(chunker.split_page(text), vec![text]);
    }

    #[test]
    fn test_windows_advance_by_step_and_keep_final_partial() {
        let chunker = WindowChunker::new(10, 3).unwrap();
        // 25 chars, step 7: windows start at 0, 7, 14, 21
        let text = "abcdefghijklmnopqrstuvwxy";
        let windows = chunker.split_page(text);
        assert_eq!(
            windows,
            vec!["abcdefghij", "hijklmnopq", "opqrstuvwx", "vwxy"]
        );
    }

    #[test]
    fn test_consecutive_windows_overlap() {
        let chunker = WindowChunker::new(10, 4).unwrap();
        let text = "abcdefghijklmnop";
        let windows = chunker.split_page(text);
        for pair in windows.windows(2) {
            let tail = &pair[0][pair[0].len() - 4..];
            assert!(pair[1].starts_with(tail));
        }
    }

    #[test]
    fn test_whitespace_page_yields_nothing() {
        let chunker = WindowChunker::new(100, 20).unwrap();
        assert!(chunker.split_page("").is_empty());
        assert!(chunker.split_page("   \n\t  ").is_empty());
    }

    #[test]
    fn test_multibyte_text_splits_on_char_boundaries() {
        let chunker = WindowChunker::new(4, 1).unwrap();
        let text = "ααββγγδδ";
        let windows = chunker.split_page(text);
        // Every window is valid UTF-8 by construction; verify coverage
        assert_eq!(windows.first().copied(), Some("ααββ"));
        assert!(windows.last().unwrap().ends_with("δδ"));
    }

    #[test]
    fn test_invalid_overlap_rejected() {
        assert!(WindowChunker::new(10, 10).is_err());
        assert!(WindowChunker::new(0, 0).is_err());
    }
}
