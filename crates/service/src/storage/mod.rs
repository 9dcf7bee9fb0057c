//! Storage abstractions for the service layer
//!
//! Contains the reusable in-memory store shared by the per-kind services,
//! so each record kind gets its own sequence and its own lock.

pub mod record_store;
