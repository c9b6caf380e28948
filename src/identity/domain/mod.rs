//! Domain model for user identities.

mod error;
mod ids;
mod user;

pub use error::IdentityDomainError;
pub use ids::{EmailAddress, UserId};
pub use user::User;
