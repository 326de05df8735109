//! Wire types shared by the API and its documentation.
//!
//! These DTOs describe request and response bodies. Response bodies themselves are
//! produced by the rule-driven serializer, so the shapes below document what a
//! client receives and let tests decode responses into typed values.

pub mod activity;
pub mod api;
pub mod camper;
pub mod signup;
