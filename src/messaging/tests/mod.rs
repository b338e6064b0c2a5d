//! Unit tests for the messaging module.
//!
//! Tests are organised by use case, covering happy paths, rule violations,
//! and edge cases for all public APIs.
