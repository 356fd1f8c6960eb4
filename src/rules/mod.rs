//! Game rules: winning lines, outcomes, and the reachable position set.
//!
//! `Board` asks this module whether a line is complete; nothing here
//! knows about search.

pub mod outcome;
pub mod positions;

pub use outcome::{completed_line, Outcome, WIN_LINES};
pub use positions::reachable_positions;
