//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and serialized with exclusion rules at the
//! controller boundary. Request bodies only reach the data layer through the
//! whitelisted, validating parameter builders defined here.

pub mod activity;
pub mod camper;
pub mod field;
pub mod graph;
pub mod signup;
