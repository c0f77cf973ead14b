//! Granular check functions composed by the tree walk.
//!
//! - `bounds` - physical dimension/weight envelope checks (parcel-type level)
//! - `parameters` - special-service parameter, prerequisite and
//!   incompatibility checks (special-service level)

pub mod bounds;
pub mod parameters;
