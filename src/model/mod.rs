//! Participants, relationship tags and pairing constraints.
//!
//! A [`Participant`] carries a map from relationship tag to an ordered list
//! of other participants' names. A tag is either a semantic category
//! ("spouse", "household") or the key of a previously stored solution.
//! [`Constraint`]s compare those lists pairwise to forbid or de-prioritize
//! a directed pairing. [`Roster`] bundles both and is the only place a
//! solution is persisted.

mod constraint;
mod participant;
mod roster;

pub use constraint::{Comparator, Constraint, Limit};
pub use participant::Participant;
pub use roster::Roster;
