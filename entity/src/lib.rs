//! SeaORM entity definitions for the campboard schema.
//!
//! Each module mirrors one table created by the `migration` crate. Signups join
//! campers to activities and cascade away with either parent.

pub mod prelude;

pub mod activity;
pub mod camper;
pub mod signup;
