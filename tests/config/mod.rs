//! Configuration tests
//!
//! Persisting roles, addressees and grids, and versioning of the
//! configuration.

pub mod tests_persistence;
