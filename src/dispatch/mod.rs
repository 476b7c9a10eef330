//! Method dispatch module
//!
//! Routes a request to a handler by its method:
//! - [`If`], [`get`], [`post`]: one expected method, a handler for it and a fallback
//! - [`Switch`]: a method table with an optional `"*"` entry
//! - [`Invalid`]: the process-wide fallback used when nothing else applies

pub mod conditional;
pub mod invalid;
pub mod switch;

pub use conditional::{get, if_method, post, If};
pub use invalid::{
    configure_invalid, invalid_handler, reset_invalid, set_invalid, Invalid, INVALID_METHOD_BODY,
};
pub use switch::{Switch, WILDCARD};
