//! Outbound adapters implementing domain ports for infrastructure.
//!
//! - **memory**: process-local city store guarded by a single mutex
//! - **mail**: mail notifier that records messages through `tracing`
//!
//! Adapters are thin translators between domain types and their backing
//! resources. They contain no business rules beyond id allocation.

pub mod mail;
pub mod memory;
