//! Inbound adapters that translate browser requests into controller calls
//! while keeping framework details at the edge.

pub mod http;
