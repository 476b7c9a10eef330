//! Process-wide invalid-method handler
//!
//! Every dispatcher without an explicit fallback ends up here. The handler is
//! looked up on each request, so replacing it with [`set_invalid`] takes effect
//! for dispatchers that were built earlier.

use crate::config::{InvalidConfig, InvalidFormat};
use crate::handler::{shared, BoxFuture, Handler, HttpResponse, SharedHandler};
use crate::http::{build_405_response, build_json_response, build_text_response};
use crate::logger;
use hyper::body::Bytes;
use hyper::http::status::InvalidStatusCode;
use hyper::{Request, StatusCode};
use serde::Serialize;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// Body of the default invalid-method response
pub const INVALID_METHOD_BODY: &str = "Invalid method";

static INVALID: OnceLock<RwLock<SharedHandler<()>>> = OnceLock::new();

fn slot() -> &'static RwLock<SharedHandler<()>> {
    INVALID.get_or_init(|| RwLock::new(shared(DefaultInvalid)))
}

/// Current process-wide invalid-method handler
pub fn invalid_handler() -> SharedHandler<()> {
    let guard = slot().read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&guard)
}

/// Replace the process-wide invalid-method handler
///
/// The handler receives the request head only; the body is replaced by `()`.
pub fn set_invalid(handler: impl Handler<()>) {
    let mut guard = slot().write().unwrap_or_else(PoisonError::into_inner);
    *guard = shared(handler);
}

/// Restore the built-in 405 handler
pub fn reset_invalid() {
    set_invalid(DefaultInvalid);
}

/// Install an invalid-method handler built from configuration
pub fn configure_invalid(config: &InvalidConfig) -> Result<(), InvalidStatusCode> {
    if *config == InvalidConfig::default() {
        reset_invalid();
        return Ok(());
    }

    let status = StatusCode::from_u16(config.status)?;
    set_invalid(ConfiguredInvalid {
        status,
        body: Bytes::from(config.body.clone()),
        format: config.format,
    });
    Ok(())
}

/// Forwards to whatever handler is installed process-wide at call time
#[derive(Debug, Clone, Copy, Default)]
pub struct Invalid;

impl<B> Handler<B> for Invalid {
    fn call(&self, req: Request<B>) -> BoxFuture<HttpResponse> {
        let (parts, _body) = req.into_parts();
        invalid_handler().call(Request::from_parts(parts, ()))
    }
}

/// Built-in handler: 405 with a plain text body
struct DefaultInvalid;

impl Handler<()> for DefaultInvalid {
    fn call(&self, req: Request<()>) -> BoxFuture<HttpResponse> {
        logger::log_invalid_method(req.method().as_str());
        Box::pin(async { build_405_response(INVALID_METHOD_BODY, None) })
    }
}

#[derive(Serialize)]
struct InvalidBody<'a> {
    error: &'a str,
    method: &'a str,
}

struct ConfiguredInvalid {
    status: StatusCode,
    body: Bytes,
    format: InvalidFormat,
}

impl Handler<()> for ConfiguredInvalid {
    fn call(&self, req: Request<()>) -> BoxFuture<HttpResponse> {
        logger::log_invalid_method(req.method().as_str());
        let resp = match self.format {
            InvalidFormat::Text => build_text_response(self.status, self.body.clone()),
            InvalidFormat::Json => {
                let error = String::from_utf8_lossy(&self.body);
                build_json_response(
                    self.status,
                    &InvalidBody {
                        error: &error,
                        method: req.method().as_str(),
                    },
                )
            }
        };
        Box::pin(async move { resp })
    }
}

/// Serializes tests that touch the process-wide handler
#[cfg(test)]
pub(crate) async fn lock_global() -> tokio::sync::MutexGuard<'static, ()> {
    static LOCK: OnceLock<tokio::sync::Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| tokio::sync::Mutex::new(())).lock().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::handler_fn;
    use http_body_util::BodyExt;
    use hyper::Method;

    async fn body_string(resp: HttpResponse) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn request(method: &str) -> Request<String> {
        Request::builder()
            .method(method)
            .uri("/")
            .body("ignored".to_string())
            .unwrap()
    }

    #[tokio::test]
    async fn test_default_is_405_invalid_method() {
        let _guard = lock_global().await;
        reset_invalid();

        let resp = Invalid.call(request("DELETE")).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_string(resp).await, "Invalid method");
    }

    #[tokio::test]
    async fn test_set_invalid_is_seen_by_existing_forwarder() {
        let _guard = lock_global().await;
        reset_invalid();

        let forwarder = Invalid;
        set_invalid(handler_fn(|req: Request<()>| async move {
            build_text_response(StatusCode::IM_A_TEAPOT, format!("no {}", req.method()))
        }));

        let resp = forwarder.call(request("PUT")).await;
        assert_eq!(resp.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(body_string(resp).await, "no PUT");

        reset_invalid();
        let resp = forwarder.call(request("PUT")).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_forwarder_keeps_request_head() {
        let _guard = lock_global().await;

        set_invalid(handler_fn(|req: Request<()>| async move {
            build_text_response(StatusCode::OK, req.uri().path().to_string())
        }));

        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/items/7")
            .body(vec![1u8, 2, 3])
            .unwrap();
        let resp = Invalid.call(req).await;
        assert_eq!(body_string(resp).await, "/items/7");

        reset_invalid();
    }

    #[tokio::test]
    async fn test_configure_json() {
        let _guard = lock_global().await;

        configure_invalid(&InvalidConfig {
            status: 405,
            body: "Method not supported".to_string(),
            format: InvalidFormat::Json,
        })
        .unwrap();

        let resp = Invalid.call(request("TRACE")).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "application/json"
        );
        let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
        assert_eq!(json["error"], "Method not supported");
        assert_eq!(json["method"], "TRACE");

        reset_invalid();
    }

    #[tokio::test]
    async fn test_configure_text_status() {
        let _guard = lock_global().await;

        configure_invalid(&InvalidConfig {
            status: 501,
            body: "Not Implemented".to_string(),
            format: InvalidFormat::Text,
        })
        .unwrap();

        let resp = Invalid.call(request("PATCH")).await;
        assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(body_string(resp).await, "Not Implemented");

        reset_invalid();
    }

    #[tokio::test]
    async fn test_configure_rejects_bad_status() {
        let _guard = lock_global().await;
        reset_invalid();

        let result = configure_invalid(&InvalidConfig {
            status: 42,
            body: "bad".to_string(),
            format: InvalidFormat::Text,
        });
        assert!(result.is_err());

        let resp = Invalid.call(request("PATCH")).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
