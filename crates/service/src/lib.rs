//! Service layer for calorie entries.
//! - Separates business rules (validation, timestamps, guards) from data access.
//! - Reuses entity definitions and validation from the `models` crate.
//! - Every operation maps to a single repository call.

pub mod errors;
pub mod entry;
#[cfg(test)]
pub mod test_support;
