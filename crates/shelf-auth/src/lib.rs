//! Mock authentication for the Shelf storefront.
//!
//! Login and registration are form-level only: fields are checked for
//! presence and a display user is derived, with no credential store behind
//! it. The session lives as long as its owner and is never persisted.

mod error;
mod form;
mod session;
mod user;

pub use error::AuthError;
pub use form::{AuthForm, AuthMode};
pub use session::MockSession;
pub use user::User;
