//! Crieur: a small message timeline service.
//!
//! Authors post short messages, edit them, and read their timeline newest
//! first. Readers can follow authors.
//!
//! # Architecture
//!
//! Crieur follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, clocks, etc.)
//!
//! # Modules
//!
//! - [`messaging`]: Messages, timelines and subscriptions
//! - [`config`]: Layered runtime configuration
//! - [`observability`]: Tracing subscriber setup for binaries

pub mod config;
pub mod messaging;
pub mod observability;
