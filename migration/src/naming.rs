//! Naming convention for generated constraint and index names.
//!
//! Every migration names its constraints through these helpers so the schema
//! stays predictable across backends:
//!
//! | Kind        | Pattern                                   |
//! |-------------|-------------------------------------------|
//! | index       | `ix_<table>_<column>`                     |
//! | foreign key | `fk_<table>_<column>_<referred_table>`    |
//!
//! Primary keys are inline `INTEGER PRIMARY KEY AUTOINCREMENT` columns, which
//! SQLite does not name.

pub fn ix(table: &str, column: &str) -> String {
    format!("ix_{}_{}", table, column)
}

pub fn fk(table: &str, column: &str, referred_table: &str) -> String {
    format!("fk_{}_{}_{}", table, column, referred_table)
}
