//! Command implementations

pub mod analyze;
pub mod letters;
pub mod simple;
pub mod simulate;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_pair};
pub use letters::run_letters;
pub use simple::{TranscriptLogger, run_simple};
pub use simulate::{SimulationStats, run_simulation};
pub use suggest::{build_query, run_suggest};
