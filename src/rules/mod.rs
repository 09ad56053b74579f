//! 음운 규칙 (특수 규칙, 규칙표, 연음)

pub mod citation;
pub mod linking;
pub mod pattern;
pub mod special;
pub mod table;

pub use citation::CitationMap;
pub use linking::LinkingRules;
pub use pattern::{Context, Element, Emit, Rewrite};
pub use special::SpecialRules;
pub use table::{RuleTable, TableEntry};
