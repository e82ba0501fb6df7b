//! Supabase-compatible outbound adapter.
//!
//! This module provides a thin HTTP implementation of the
//! `IdentityProvider` and `EntryRepository` ports.

mod dto;
mod http_client;

pub use http_client::SupabaseClient;
