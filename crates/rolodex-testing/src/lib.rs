//! Test support for the rolodex workspace: isolated CLI environments and
//! deterministic sample contacts.

pub mod fixtures;
pub mod world;

pub use fixtures::{sample_contacts, sample_fields};
pub use world::TestWorld;
