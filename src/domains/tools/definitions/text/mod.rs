//! Text analysis tool definitions.

pub mod case;
pub mod counter;
pub mod diff;

pub use case::CaseConverterTool;
pub use counter::TextCounterTool;
pub use diff::TextDiffTool;
