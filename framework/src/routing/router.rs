use crate::http::{Envelope, HttpResponse, Request, Response};
use hyper::{Method, StatusCode};
use matchit::Router as MatchitRouter;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for route handlers
pub type BoxedHandler =
    Box<dyn Fn(Request) -> Pin<Box<dyn Future<Output = Response> + Send>> + Send + Sync>;

/// HTTP router keyed by method, then by path pattern
///
/// Paths use matchit syntax, so `/todo-items/{id}` captures `id`.
///
/// ```rust,ignore
/// Router::new()
///     .get("/todo-items", list)
///     .get("/todo-items/{id}", show)
///     .patch("/todo-items/{id}", update)
/// ```
pub struct Router {
    routes: HashMap<Method, MatchitRouter<Arc<BoxedHandler>>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    fn insert<H, Fut>(mut self, method: Method, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let handler: BoxedHandler = Box::new(move |req| Box::pin(handler(req)));
        let routes = self
            .routes
            .entry(method.clone())
            .or_insert_with(MatchitRouter::new);
        if let Err(err) = routes.insert(path, Arc::new(handler)) {
            tracing::warn!(%method, path, error = %err, "route was not registered");
        }
        self
    }

    /// Register a GET route
    pub fn get<H, Fut>(self, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.insert(Method::GET, path, handler)
    }

    /// Register a POST route
    pub fn post<H, Fut>(self, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.insert(Method::POST, path, handler)
    }

    /// Register a PATCH route
    pub fn patch<H, Fut>(self, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.insert(Method::PATCH, path, handler)
    }

    /// Register a DELETE route
    pub fn delete<H, Fut>(self, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.insert(Method::DELETE, path, handler)
    }

    /// Match a request and return the handler with extracted params
    pub fn match_route(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(Arc<BoxedHandler>, HashMap<String, String>)> {
        let matched = self.routes.get(method)?.at(path).ok()?;
        let params: HashMap<String, String> = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Some((matched.value.clone(), params))
    }

    /// Whether any method has a route for this path
    fn knows_path(&self, path: &str) -> bool {
        self.routes.values().any(|routes| routes.at(path).is_ok())
    }

    /// Run the matching handler, or answer 404/405 in the envelope format
    pub async fn dispatch(&self, request: Request) -> HttpResponse {
        let method = request.method().clone();
        let path = request.path().to_string();

        match self.match_route(&method, &path) {
            Some((handler, params)) => {
                // Both Ok and Err carry a finished response
                handler(request.with_params(params))
                    .await
                    .unwrap_or_else(|e| e)
            }
            None if self.knows_path(&path) => {
                let envelope: Envelope = Envelope::failure(
                    StatusCode::METHOD_NOT_ALLOWED,
                    format!("Method {} is not allowed on {}", method, path),
                );
                HttpResponse::envelope(&envelope).status(StatusCode::METHOD_NOT_ALLOWED)
            }
            None => {
                let envelope: Envelope =
                    Envelope::failure(StatusCode::NOT_FOUND, format!("Route {} Not Found", path));
                HttpResponse::envelope(&envelope).status(StatusCode::NOT_FOUND)
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
