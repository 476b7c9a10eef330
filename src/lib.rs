//! Method dispatch for `hyper` servers
//!
//! A router decides which handler owns a path; what happens for each request
//! method is up to that handler. This crate provides the second half:
//!
//! ```no_run
//! use hyper::{Request, StatusCode};
//! use method_switch::http::build_text_response;
//! use method_switch::{get, handler_fn, into_service, shared, Handler, If, Switch, WILDCARD};
//!
//! fn text(body: &'static str) -> impl Handler<()> {
//!     handler_fn(move |_req: Request<()>| async move {
//!         build_text_response(StatusCode::OK, body)
//!     })
//! }
//!
//! let read_only = get::<()>(text("items"));
//! let patch_only = If::<()>::new("PATCH", text("patched"), text("custom 405"));
//! let item = Switch::<()>::new()
//!     .route("GET", text("item"))
//!     .route("DELETE", text("deleted"))
//!     .route(WILDCARD, text("custom 405"));
//!
//! // any dispatcher can be handed to hyper's `serve_connection`
//! let _service = into_service(shared(item));
//! # let _ = (read_only, patch_only);
//! ```
//!
//! Unmatched methods end at [`Invalid`], which forwards to the process-wide
//! handler (405 `Invalid method` unless replaced with [`set_invalid`] or
//! [`configure_invalid`]).

pub mod config;
pub mod dispatch;
pub mod handler;
pub mod http;
pub mod logger;

pub use config::{Config, InvalidConfig, InvalidFormat};
pub use dispatch::{
    configure_invalid, get, if_method, invalid_handler, post, reset_invalid, set_invalid, If,
    Invalid, Switch, INVALID_METHOD_BODY, WILDCARD,
};
pub use handler::{
    handler_fn, into_service, shared, BoxFuture, Handler, HandlerFn, HandlerService,
    HttpResponse, SharedHandler,
};
