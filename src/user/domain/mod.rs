//! Domain model for user records.

mod error;
mod ids;
mod user;

pub use error::UserDomainError;
pub use ids::UserId;
pub use user::{NewUser, Password, User};
