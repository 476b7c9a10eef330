//! Table method dispatch
//!
//! [`Switch`] maps request methods to handlers. Lookup order is the exact
//! method, then the [`WILDCARD`] entry, then the process-wide [`Invalid`] handler.

use super::invalid::Invalid;
use crate::handler::{shared, BoxFuture, Handler, HttpResponse, SharedHandler};
use crate::logger;
use hyper::Request;
use std::collections::HashMap;
use std::fmt;

/// Table key matched when no exact method entry exists
pub const WILDCARD: &str = "*";

/// Method-keyed handler table. Keys are case sensitive.
pub struct Switch<B> {
    routes: HashMap<String, SharedHandler<B>>,
}

impl<B: 'static> Switch<B> {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Builder form of [`Switch::insert`]
    #[must_use]
    pub fn route(mut self, method: impl AsRef<str>, handler: impl Handler<B>) -> Self {
        self.insert(method, handler);
        self
    }

    /// Add or replace the handler for `method`, returning the previous one
    pub fn insert(
        &mut self,
        method: impl AsRef<str>,
        handler: impl Handler<B>,
    ) -> Option<SharedHandler<B>> {
        self.routes
            .insert(method.as_ref().to_owned(), shared(handler))
    }

    pub fn remove(&mut self, method: &str) -> Option<SharedHandler<B>> {
        self.routes.remove(method)
    }

    pub fn get(&self, method: &str) -> Option<&SharedHandler<B>> {
        self.routes.get(method)
    }

    pub fn contains(&self, method: &str) -> bool {
        self.routes.contains_key(method)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Explicit methods in the table, sorted, without the wildcard
    pub fn allowed_methods(&self) -> Vec<&str> {
        let mut methods: Vec<&str> = self
            .routes
            .keys()
            .map(String::as_str)
            .filter(|m| *m != WILDCARD)
            .collect();
        methods.sort_unstable();
        methods
    }

    /// `Allow` header value for the explicit methods, e.g. `GET, POST`
    pub fn allow_header(&self) -> String {
        self.allowed_methods().join(", ")
    }
}

impl<B: 'static> Handler<B> for Switch<B> {
    fn call(&self, req: Request<B>) -> BoxFuture<HttpResponse> {
        let found = self
            .routes
            .get(req.method().as_str())
            .map(|h| (h, "exact"))
            .or_else(|| self.routes.get(WILDCARD).map(|h| (h, WILDCARD)));

        let Some((handler, target)) = found else {
            logger::log_dispatch("switch", req.method().as_str(), "invalid");
            return Invalid.call(req);
        };
        logger::log_dispatch("switch", req.method().as_str(), target);
        handler.call(req)
    }
}

impl<B: 'static> Default for Switch<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> From<HashMap<String, SharedHandler<B>>> for Switch<B> {
    fn from(routes: HashMap<String, SharedHandler<B>>) -> Self {
        Self { routes }
    }
}

impl<B, K> FromIterator<(K, SharedHandler<B>)> for Switch<B>
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, SharedHandler<B>)>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().map(|(k, h)| (k.into(), h)).collect(),
        }
    }
}

impl<B> fmt::Debug for Switch<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut methods: Vec<&String> = self.routes.keys().collect();
        methods.sort_unstable();
        f.debug_struct("Switch").field("methods", &methods).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::invalid::{lock_global, reset_invalid, set_invalid};
    use crate::handler::handler_fn;
    use crate::http::build_text_response;
    use http_body_util::BodyExt;
    use hyper::StatusCode;
    use std::sync::Arc;

    fn named(name: &'static str) -> SharedHandler<()> {
        shared(handler_fn(move |_req: Request<()>| async move {
            build_text_response(StatusCode::OK, name)
        }))
    }

    fn request(method: &str) -> Request<()> {
        Request::builder().method(method).body(()).unwrap()
    }

    async fn body_string(resp: HttpResponse) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_exact_match() {
        let s = Switch::new()
            .route("GET", named("g"))
            .route("POST", named("p"));
        assert_eq!(body_string(s.call(request("GET")).await).await, "g");
        assert_eq!(body_string(s.call(request("POST")).await).await, "p");
    }

    #[tokio::test]
    async fn test_missing_method_without_wildcard_is_invalid() {
        let _guard = lock_global().await;
        reset_invalid();

        let s = Switch::new()
            .route("GET", named("g"))
            .route("POST", named("p"));
        let resp = s.call(request("DELETE")).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_string(resp).await, "Invalid method");
    }

    #[tokio::test]
    async fn test_wildcard_catches_unmatched() {
        let _guard = lock_global().await;
        set_invalid(named("global"));

        let s = Switch::new()
            .route("GET", named("g"))
            .route(WILDCARD, named("other"));
        assert_eq!(body_string(s.call(request("DELETE")).await).await, "other");
        assert_eq!(body_string(s.call(request("get")).await).await, "other");
        assert_eq!(body_string(s.call(request("GET")).await).await, "g");

        reset_invalid();
    }

    #[tokio::test]
    async fn test_empty_switch_uses_current_global() {
        let _guard = lock_global().await;

        let s: Switch<()> = Switch::default();
        set_invalid(named("first"));
        assert_eq!(body_string(s.call(request("GET")).await).await, "first");
        set_invalid(named("second"));
        assert_eq!(body_string(s.call(request("GET")).await).await, "second");

        reset_invalid();
    }

    #[tokio::test]
    async fn test_edits_are_visible() {
        let _guard = lock_global().await;
        reset_invalid();

        let mut s = Switch::new().route("GET", named("g"));
        assert_eq!(
            s.call(request("PUT")).await.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );

        s.insert("PUT", named("put"));
        assert_eq!(body_string(s.call(request("PUT")).await).await, "put");

        assert!(s.remove("PUT").is_some());
        assert!(!s.contains("PUT"));
        assert_eq!(
            s.call(request("PUT")).await.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[tokio::test]
    async fn test_from_map_and_iter() {
        let mut map = HashMap::new();
        map.insert("GET".to_string(), named("g"));
        map.insert(WILDCARD.to_string(), named("any"));
        let s = Switch::from(map);
        assert_eq!(s.len(), 2);
        assert_eq!(body_string(s.call(request("HEAD")).await).await, "any");

        let shared_get = named("shared");
        let s: Switch<()> = [("GET", Arc::clone(&shared_get)), ("HEAD", shared_get)]
            .into_iter()
            .collect();
        assert_eq!(body_string(s.call(request("GET")).await).await, "shared");
        assert_eq!(body_string(s.call(request("HEAD")).await).await, "shared");
    }

    #[test]
    fn test_allowed_methods() {
        let s = Switch::<()>::new()
            .route("POST", named("p"))
            .route(WILDCARD, named("any"))
            .route("GET", named("g"));
        assert_eq!(s.allowed_methods(), vec!["GET", "POST"]);
        assert_eq!(s.allow_header(), "GET, POST");
        assert!(s.get(WILDCARD).is_some());
        assert!(!s.is_empty());
    }

    #[test]
    fn test_insert_replaces() {
        let mut s = Switch::<()>::new();
        assert!(s.insert("GET", named("a")).is_none());
        assert!(s.insert("GET", named("b")).is_some());
        assert_eq!(s.len(), 1);
    }
}
