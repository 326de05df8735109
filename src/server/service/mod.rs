//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Turning request bodies into checked parameters before any write
//! - **Orchestration**: Coordinating multiple repository calls, such as cascading deletes
//! - **Transaction Management**: Running every write in a single transaction
//! - **Graph Loading**: Collecting the related rows a response serializes against

pub mod activity;
pub mod camper;
pub mod signup;

#[cfg(test)]
mod test;
