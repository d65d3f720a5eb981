//! Block segmentation for run-summary logs
//!
//! A summary log is an unbounded line stream in which each run opens with
//! a recurring marker line (`Running : <name>`) and ends where the next
//! marker begins. Segmentation is a single stateful pass with no failure
//! mode: malformed input yields fewer or shorter blocks, never an error.

/// Start-marker prefix that opens a run block.
pub const DEFAULT_MARKER: &str = "Running :";

/// One contiguous run of log lines belonging to a single simulated
/// execution.
///
/// A block always contains at least its start-marker line, stores every
/// line whitespace-stripped, and is immutable once the segmenter closes
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    label: String,
    lines: Vec<String>,
}

impl Block {
    fn open(marker_line: &str, marker: &str) -> Self {
        let label = marker_line[marker.len()..].trim().to_string();
        Self {
            label,
            lines: vec![marker_line.to_string()],
        }
    }

    fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    /// Get the run label: the marker line's text after the marker prefix.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the stripped lines of this block, marker line first.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get the block content as a single newline-joined string.
    ///
    /// This is the text field patterns are matched against; a pattern may
    /// match anywhere within it, not just on a specific line.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Partitions a line stream into run blocks.
#[derive(Debug, Clone)]
pub struct Segmenter {
    marker: String,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    /// Create a segmenter using the default `Running :` marker.
    #[must_use]
    pub fn new() -> Self {
        Self::with_marker(DEFAULT_MARKER)
    }

    /// Create a segmenter with a custom start-marker prefix.
    #[must_use]
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Get the start-marker prefix.
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Partition `lines` into blocks.
    ///
    /// Lines preceding the first marker carry no block membership and are
    /// discarded. A marker line closes any open block and opens the next;
    /// end of input closes the last open block. Every stored line is
    /// stripped of leading and trailing whitespace first.
    #[must_use]
    pub fn segment<'a, I>(&self, lines: I) -> Vec<Block>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut blocks = Vec::new();
        let mut current: Option<Block> = None;

        for line in lines {
            let line = line.trim();
            if line.starts_with(self.marker.as_str()) {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
                current = Some(Block::open(line, &self.marker));
            } else if let Some(block) = current.as_mut() {
                block.push(line);
            }
        }

        if let Some(block) = current.take() {
            blocks.push(block);
        }

        blocks
    }
}
