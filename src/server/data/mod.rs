//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait`, so the same code runs against the
//! connection pool for reads and against a `DatabaseTransaction` for writes. Each
//! repository only touches its own table; cascades across tables are orchestrated by
//! the service layer inside one transaction.

pub mod activity;
pub mod camper;
pub mod signup;

#[cfg(test)]
mod test;
