//! Password evaluation sections
//!
//! Each section checks one criterion of the policy.

mod length;
mod special;
mod variety;

pub use length::length_section;
pub use special::special_character_section;
pub use variety::character_variety_section;

use crate::types::Criterion;

/// Result type for section evaluation functions.
/// - `Some(criterion)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<Criterion>;
