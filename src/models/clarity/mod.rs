//! The Clarity Gate scoring model.
//!
//! A clarification round starts from [`default_dimensions`], fills in scores
//! from caller input via [`parse_dimension_scores`], and reduces them to one
//! number with [`calculate_score`]. Nothing here is persisted between rounds;
//! only the aggregate score ends up on the project state.

mod dimension;
mod parse;
mod score;


pub use dimension::{default_dimensions, uncovered_dimensions, ClarityDimension, DimensionKind};
pub use parse::parse_dimension_scores;
pub use score::calculate_score;
