// Demo routes
// Exact path router in front of the method dispatchers

use http_body_util::BodyExt;
use hyper::body::Body;
use hyper::{Request, StatusCode};
use method_switch::http::{build_404_response, build_405_response, build_text_response};
use method_switch::{
    get, handler_fn, logger, post, shared, BoxFuture, Handler, HttpResponse, If, SharedHandler,
    Switch, WILDCARD,
};
use std::collections::HashMap;
use std::fmt::Display;

/// Path router: picks the handler for a path, leaving methods to the handler
pub struct Router<B> {
    routes: HashMap<&'static str, SharedHandler<B>>,
}

impl<B: 'static> Router<B> {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    #[must_use]
    pub fn add(mut self, path: &'static str, handler: impl Handler<B>) -> Self {
        self.routes.insert(path, shared(handler));
        self
    }
}

impl<B: 'static> Default for Router<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: 'static> Handler<B> for Router<B> {
    fn call(&self, req: Request<B>) -> BoxFuture<HttpResponse> {
        match self.routes.get(req.uri().path()) {
            Some(handler) => handler.call(req),
            None => Box::pin(async { build_404_response() }),
        }
    }
}

fn hello<B: 'static>() -> impl Handler<B> {
    handler_fn(|_req: Request<B>| async { build_text_response(StatusCode::OK, "hello\n") })
}

fn patched<B: 'static>() -> impl Handler<B> {
    handler_fn(|_req: Request<B>| async { build_text_response(StatusCode::OK, "patched\n") })
}

/// Echo the request body back
fn echo<B>() -> impl Handler<B>
where
    B: Body + Send + 'static,
    B::Data: Send,
    B::Error: Display,
{
    handler_fn(|req: Request<B>| async move {
        match req.into_body().collect().await {
            Ok(collected) => build_text_response(StatusCode::OK, collected.to_bytes()),
            Err(e) => {
                logger::log_error(&format!("Failed to read request body: {e}"));
                build_text_response(StatusCode::BAD_REQUEST, "Failed to read request body\n")
            }
        }
    })
}

/// Route-specific 405 advertising the methods the route accepts
fn custom_invalid<B: 'static>(allow: String) -> impl Handler<B> {
    handler_fn(move |req: Request<B>| {
        let body = format!("{} is not supported here\n", req.method());
        let resp = build_405_response(body, Some(allow.as_str()));
        async move { resp }
    })
}

/// Routes served by the demo binary
pub fn demo_router<B>() -> Router<B>
where
    B: Body + Send + 'static,
    B::Data: Send,
    B::Error: Display,
{
    let multiple = Switch::new()
        .route("GET", hello::<B>())
        .route("POST", echo::<B>())
        .route("PATCH", patched::<B>());
    let allow = multiple.allow_header();
    let multiple = multiple.route(WILDCARD, custom_invalid::<B>(allow));

    Router::new()
        .add("/get", get(hello::<B>()))
        .add("/post", post(echo::<B>()))
        .add(
            "/patch",
            If::new(
                "PATCH",
                patched::<B>(),
                custom_invalid::<B>("PATCH".to_string()),
            ),
        )
        .add("/multiple-methods", multiple)
}
