//! Serializable summaries of a tiling run, used by the command-line tools.
pub mod report;
pub mod timing;

pub use report::{InputDescriptor, TileReport};
pub use timing::{StageTiming, TimingBreakdown};
