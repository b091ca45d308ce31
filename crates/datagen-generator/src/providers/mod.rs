//! Data providers built on the resolution engine.
//!
//! Each provider borrows a [`DataGenerator`](crate::DataGenerator) and makes
//! one engine call per generated value.

pub mod credentials;
pub mod email;
pub mod name;

pub use credentials::CredentialsProvider;
pub use email::EmailProvider;
pub use name::NameProvider;
