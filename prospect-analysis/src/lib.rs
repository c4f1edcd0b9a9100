pub mod analysis;
pub mod engines;

pub use analysis::CustomerAnalysis;
pub use engines::{RecentBuyerEngine, SegmentAffinityEngine};
