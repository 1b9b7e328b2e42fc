//! Visual styling for the agenda viewer, separated from layout logic.

pub mod palette;
