//! Adapter implementations of the messaging ports.
//!
//! - [`memory`]: thread-safe in-memory repositories
//! - [`postgres`]: Diesel-backed message repository
//! - [`clock`]: fixed-instant clock for deterministic tests

pub mod clock;
pub mod memory;
pub mod postgres;
