//! Change computer implementations.
//!
//! - [`MembershipChangeComputer`]: keys only on one side (removed, added)
//! - [`SharedComponentChangeComputer`]: keys on both sides (identity and field changes)

mod membership;
mod shared;

pub use membership::MembershipChangeComputer;
pub use shared::SharedComponentChangeComputer;
