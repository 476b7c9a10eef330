//! HTTP response building module
//!
//! Builders never panic: if `Response::builder()` rejects its input the error is
//! logged and a bare response carrying the same body is returned instead.

use crate::handler::HttpResponse;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Build a plain text response
pub fn build_text_response(status: StatusCode, body: impl Into<Bytes>) -> HttpResponse {
    let body = body.into();
    Response::builder()
        .status(status)
        .header("Content-Type", TEXT_CONTENT_TYPE)
        .body(Full::new(body.clone()))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(body))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> HttpResponse {
    build_text_response(StatusCode::NOT_FOUND, "404 Not Found")
}

/// Build a 405 response, optionally advertising the methods the route accepts
pub fn build_405_response(body: impl Into<Bytes>, allow: Option<&str>) -> HttpResponse {
    let body = body.into();
    let mut builder = Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", TEXT_CONTENT_TYPE);

    if let Some(methods) = allow {
        builder = builder.header("Allow", methods);
    }

    builder.body(Full::new(body.clone())).unwrap_or_else(|e| {
        log_build_error("405", &e);
        let mut resp = Response::new(Full::new(body));
        *resp.status_mut() = StatusCode::METHOD_NOT_ALLOWED;
        resp
    })
}

/// Build a JSON response; serialization failures become a 500 with a fixed body
pub fn build_json_response<T: Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            return Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", JSON_CONTENT_TYPE)
                .body(Full::new(Bytes::from(r#"{"error":"Internal server error"}"#)))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))));
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", JSON_CONTENT_TYPE)
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(resp: HttpResponse) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_405_without_allow() {
        let resp = build_405_response("Invalid method", None);
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(resp.headers().get("Allow").is_none());
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            TEXT_CONTENT_TYPE
        );
        assert_eq!(body_string(resp).await, "Invalid method");
    }

    #[test]
    fn test_405_with_allow() {
        let resp = build_405_response("nope", Some("GET, POST"));
        assert_eq!(resp.headers().get("Allow").unwrap(), "GET, POST");
    }

    #[tokio::test]
    async fn test_json_response() {
        let resp = build_json_response(StatusCode::OK, &serde_json::json!({"ok": true}));
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            JSON_CONTENT_TYPE
        );
        assert_eq!(body_string(resp).await, r#"{"ok":true}"#);
    }

    #[test]
    fn test_404() {
        assert_eq!(build_404_response().status(), StatusCode::NOT_FOUND);
    }
}
