//! Value Objects
//!
//! Immutable value types shared across the domain.

pub mod provider;
pub mod publish_date;

pub use provider::ProviderKind;
pub use publish_date::parse_publish_date;
