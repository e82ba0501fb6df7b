//! Journal backend library modules.
//!
//! The crate follows a hexagonal layout: `domain` holds entities, ports and
//! the screen controllers, `inbound` adapts HTTP requests onto controllers and
//! `outbound` talks to the hosted identity/data service.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use domain::TraceId;
pub use middleware::Trace;
