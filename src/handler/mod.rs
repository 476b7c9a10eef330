//! Handler module
//!
//! Defines the capability every dispatcher composes: take a request, produce a response.
//! Closures are adapted with [`handler_fn`], and any handler can be handed to hyper
//! through [`into_service`].

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Response type produced by every handler
pub type HttpResponse = Response<Full<Bytes>>;

/// Boxed future returned by [`Handler::call`]
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Shared, type-erased handler
pub type SharedHandler<B> = Arc<dyn Handler<B>>;

/// Processes a request and produces a response.
///
/// `B` is the request body type: `hyper::body::Incoming` inside a server,
/// anything convenient in tests.
pub trait Handler<B>: Send + Sync + 'static {
    fn call(&self, req: Request<B>) -> BoxFuture<HttpResponse>;
}

impl<B, H> Handler<B> for Arc<H>
where
    H: Handler<B> + ?Sized,
{
    fn call(&self, req: Request<B>) -> BoxFuture<HttpResponse> {
        (**self).call(req)
    }
}

/// Handler backed by a closure, see [`handler_fn`]
pub struct HandlerFn<F> {
    f: F,
}

/// Wrap a closure returning a response future into a [`Handler`]
pub const fn handler_fn<F>(f: F) -> HandlerFn<F> {
    HandlerFn { f }
}

impl<B, F, Fut> Handler<B> for HandlerFn<F>
where
    F: Fn(Request<B>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HttpResponse> + Send + 'static,
{
    fn call(&self, req: Request<B>) -> BoxFuture<HttpResponse> {
        Box::pin((self.f)(req))
    }
}

/// Box a handler into a [`SharedHandler`]
pub fn shared<B, H: Handler<B>>(handler: H) -> SharedHandler<B> {
    Arc::new(handler)
}

/// Adapter exposing a handler as a `hyper` service
pub struct HandlerService<B: 'static> {
    handler: SharedHandler<B>,
}

/// Wrap a handler so it can be passed to `serve_connection`
pub fn into_service<B: 'static>(handler: SharedHandler<B>) -> HandlerService<B> {
    HandlerService { handler }
}

impl<B: 'static> Clone for HandlerService<B> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<B: 'static> hyper::service::Service<Request<B>> for HandlerService<B> {
    type Response = HttpResponse;
    type Error = Infallible;
    type Future = BoxFuture<Result<HttpResponse, Infallible>>;

    fn call(&self, req: Request<B>) -> Self::Future {
        let fut = self.handler.call(req);
        Box::pin(async move { Ok(fut.await) })
    }
}
