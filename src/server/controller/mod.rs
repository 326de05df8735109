//! HTTP request handlers.
//!
//! Handlers extract the request, call into the service layer and serialize the
//! result with the entity's exclusion rules. Write handlers convert service
//! failures into the rejection status of their endpoint.

pub mod activity;
pub mod camper;
pub mod home;
pub mod signup;

#[cfg(test)]
mod test;
