//! Adaptive chunk sizing
//!
//! Window size and overlap are chosen once per text from its total token
//! count, using an ordered tier table. Texts shorter than the first tier are
//! passed through as a single window.

use serde::{Deserialize, Serialize};

/// Window size and overlap for one text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkParams {
    /// Tokens per window
    pub chunk_size: usize,
    /// Tokens shared by consecutive windows
    pub overlap: usize,
}

impl ChunkParams {
    /// Parameters of an empty text
    pub const EMPTY: ChunkParams = ChunkParams {
        chunk_size: 0,
        overlap: 0,
    };

    /// Create chunk parameters
    pub const fn new(chunk_size: usize, overlap: usize) -> Self {
        Self {
            chunk_size,
            overlap,
        }
    }

    /// Token advance between window starts
    ///
    /// Falls back to `chunk_size` when the overlap would stop the window
    /// from moving forward.
    pub fn step(&self) -> usize {
        if self.chunk_size > self.overlap {
            self.chunk_size - self.overlap
        } else {
            self.chunk_size
        }
    }

    /// A zero-size window cannot cover anything
    pub fn is_degenerate(&self) -> bool {
        self.chunk_size == 0
    }
}

/// One row of the planning table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTier {
    /// Smallest token count this tier applies to
    pub min_tokens: usize,
    /// Window size for texts in this tier
    pub chunk_size: usize,
    /// Overlap for texts in this tier
    pub overlap: usize,
}

impl PlanTier {
    /// Create a tier
    pub const fn new(min_tokens: usize, chunk_size: usize, overlap: usize) -> Self {
        Self {
            min_tokens,
            chunk_size,
            overlap,
        }
    }

    fn params(&self) -> ChunkParams {
        ChunkParams::new(self.chunk_size, self.overlap)
    }
}

/// Default tiers
pub const DEFAULT_TIERS: [PlanTier; 4] = [
    PlanTier::new(300, 512, 64),
    PlanTier::new(2_000, 1_024, 128),
    PlanTier::new(5_000, 1_500, 200),
    PlanTier::new(12_000, 2_000, 250),
];

/// Ordered tier table mapping a token count to [`ChunkParams`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanTable {
    tiers: Vec<PlanTier>,
}

impl Default for PlanTable {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_TIERS.to_vec(),
        }
    }
}

impl PlanTable {
    /// Build a table from tiers, validating their ordering and sizes
    pub fn new(tiers: Vec<PlanTier>) -> Result<Self, PlanTableError> {
        let mut previous: Option<usize> = None;
        for (index, tier) in tiers.iter().enumerate() {
            if tier.min_tokens == 0 {
                return Err(PlanTableError::ZeroThreshold { index });
            }
            if let Some(prev) = previous {
                if tier.min_tokens <= prev {
                    return Err(PlanTableError::Unordered {
                        index,
                        min_tokens: tier.min_tokens,
                        previous: prev,
                    });
                }
            }
            if tier.chunk_size == 0 {
                return Err(PlanTableError::ZeroChunkSize { index });
            }
            if tier.overlap >= tier.chunk_size {
                return Err(PlanTableError::OverlapTooLarge {
                    index,
                    chunk_size: tier.chunk_size,
                    overlap: tier.overlap,
                });
            }
            previous = Some(tier.min_tokens);
        }
        Ok(Self { tiers })
    }

    /// Tiers in ascending order
    pub fn tiers(&self) -> &[PlanTier] {
        &self.tiers
    }

    /// Token count below which a text stays in one window
    pub fn passthrough_limit(&self) -> Option<usize> {
        self.tiers.first().map(|tier| tier.min_tokens)
    }

    /// Pick parameters for a text of `total_tokens` tokens
    pub fn plan(&self, total_tokens: usize) -> ChunkParams {
        self.tiers
            .iter()
            .rev()
            .find(|tier| total_tokens >= tier.min_tokens)
            .map(PlanTier::params)
            .unwrap_or(ChunkParams::new(total_tokens, 0))
    }
}

/// Reasons a tier table is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanTableError {
    /// First tier must start above zero tokens
    #[error("tier {index}: min_tokens must be greater than 0")]
    ZeroThreshold {
        /// Tier position
        index: usize,
    },
    /// Thresholds must strictly increase
    #[error("tier {index}: min_tokens {min_tokens} must be greater than previous tier's {previous}")]
    Unordered {
        /// Tier position
        index: usize,
        /// Offending threshold
        min_tokens: usize,
        /// Threshold of the tier before it
        previous: usize,
    },
    /// Windows must hold at least one token
    #[error("tier {index}: chunk_size must be greater than 0")]
    ZeroChunkSize {
        /// Tier position
        index: usize,
    },
    /// Overlap must leave room for the window to advance
    #[error("tier {index}: overlap {overlap} must be smaller than chunk_size {chunk_size}")]
    OverlapTooLarge {
        /// Tier position
        index: usize,
        /// Tier window size
        chunk_size: usize,
        /// Tier overlap
        overlap: usize,
    },
}

/// Plan with the default table
pub fn plan(total_tokens: usize) -> ChunkParams {
    PlanTable::default().plan(total_tokens)
}
