//! Domain ports defining the edges of the hexagon.
//!
//! Both ports face the hosted backend. Each exposes a typed error so adapters
//! map their failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod entry_repository;
mod identity_provider;

#[cfg(test)]
pub use entry_repository::MockEntryRepository;
pub use entry_repository::{EntryRepository, EntryRepositoryError};
#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
pub use identity_provider::{IdentityError, IdentityProvider};
