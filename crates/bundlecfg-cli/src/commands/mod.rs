//! Command implementations.
//!
//! - [`generate`] - build descriptors and print or write them
//! - [`check`] - validate options and manifest

pub mod check;
pub mod generate;

pub use check::execute as check_execute;
pub use generate::execute as generate_execute;
