//! Outbound adapters implementing domain ports for the hosted backend.
//!
//! - **supabase**: reqwest client for the hosted auth and REST APIs
//! - **memory**: in-process backend for local runs and end-to-end tests
//!
//! Adapters are thin translators that convert between domain types and
//! transport representations. They contain no business logic.

pub mod memory;
pub mod supabase;
