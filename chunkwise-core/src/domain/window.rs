//! Sliding-window arithmetic over a token sequence

use super::planner::ChunkParams;
use serde::{Deserialize, Serialize};

/// Half-open token range `[start, end)` of one chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenWindow {
    /// Position of the window in the chunk list
    pub index: usize,
    /// First token index (inclusive)
    pub start: usize,
    /// Last token index (exclusive)
    pub end: usize,
}

impl TokenWindow {
    /// Number of tokens in the window
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the window holds no tokens
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl std::fmt::Display for TokenWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} [{}..{})", self.index, self.start, self.end)
    }
}

/// Iterator over the windows of a token sequence
#[derive(Debug, Clone)]
pub struct Windows {
    total: usize,
    chunk_size: usize,
    step: usize,
    next_start: usize,
    index: usize,
}

impl Iterator for Windows {
    type Item = TokenWindow;

    fn next(&mut self) -> Option<Self::Item> {
        if self.chunk_size == 0 || self.next_start >= self.total {
            return None;
        }

        let start = self.next_start;
        let end = start.saturating_add(self.chunk_size).min(self.total);
        let window = TokenWindow {
            index: self.index,
            start,
            end,
        };

        self.next_start = start.saturating_add(self.step);
        self.index += 1;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.chunk_size == 0 || self.next_start >= self.total {
            0
        } else {
            (self.total - self.next_start).div_ceil(self.step)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Windows {}

/// Windows covering `total` tokens
///
/// Starts at 0 and advances by [`ChunkParams::step`] while the start is still
/// inside the sequence; the last window is clipped to `total`. A zero
/// `chunk_size` yields no windows.
pub fn windows(total: usize, params: ChunkParams) -> Windows {
    Windows {
        total,
        chunk_size: params.chunk_size,
        step: params.step(),
        next_start: 0,
        index: 0,
    }
}

/// Number of windows [`windows`] yields
pub fn window_count(total: usize, params: ChunkParams) -> usize {
    if params.is_degenerate() {
        0
    } else {
        total.div_ceil(params.step())
    }
}
