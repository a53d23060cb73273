//! Command layer shared by the CLI
//!
//! Each command takes the application state and returns `Result<T, String>`
//! so callers can print or serialize the outcome directly.

pub mod goals;
pub mod library;
pub mod plan;
pub mod records;
pub mod trainer;
