//! Binary method dispatch
//!
//! [`If`] picks between two handlers by comparing the request method against a
//! single expected method. [`get`] and [`post`] fall back to [`Invalid`].

use super::invalid::Invalid;
use crate::handler::{shared, BoxFuture, Handler, HttpResponse, SharedHandler};
use crate::logger;
use hyper::Request;
use std::fmt;

/// Calls `then` when the request method equals `method`, `otherwise` for anything else.
///
/// The comparison is exact and case sensitive: `"get"` does not match `"GET"`.
pub struct If<B> {
    method: String,
    then: SharedHandler<B>,
    otherwise: SharedHandler<B>,
}

impl<B: 'static> If<B> {
    pub fn new(
        method: impl AsRef<str>,
        then: impl Handler<B>,
        otherwise: impl Handler<B>,
    ) -> Self {
        Self {
            method: method.as_ref().to_owned(),
            then: shared(then),
            otherwise: shared(otherwise),
        }
    }

    /// The method this dispatcher matches
    pub fn method(&self) -> &str {
        &self.method
    }
}

impl<B: 'static> Handler<B> for If<B> {
    fn call(&self, req: Request<B>) -> BoxFuture<HttpResponse> {
        if req.method().as_str() == self.method {
            logger::log_dispatch("if", &self.method, "then");
            self.then.call(req)
        } else {
            logger::log_dispatch("if", req.method().as_str(), "else");
            self.otherwise.call(req)
        }
    }
}

impl<B> fmt::Debug for If<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("If")
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

/// Shorthand for [`If::new`]
pub fn if_method<B: 'static>(
    method: impl AsRef<str>,
    then: impl Handler<B>,
    otherwise: impl Handler<B>,
) -> If<B> {
    If::new(method, then, otherwise)
}

/// `If("GET", handler, Invalid)`
pub fn get<B: 'static>(handler: impl Handler<B>) -> If<B> {
    If::new("GET", handler, Invalid)
}

/// `If("POST", handler, Invalid)`
pub fn post<B: 'static>(handler: impl Handler<B>) -> If<B> {
    If::new("POST", handler, Invalid)
}
