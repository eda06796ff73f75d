//! Pure text and token arithmetic
//!
//! Nothing in this layer touches a tokenizer: normalization works on
//! codepoints, planning on a token count, windowing on index ranges.

pub mod normalizer;
pub mod planner;
pub mod window;

pub use normalizer::normalize;
pub use planner::{ChunkParams, PlanTable, PlanTableError, PlanTier, DEFAULT_TIERS};
pub use window::{window_count, windows, TokenWindow, Windows};
