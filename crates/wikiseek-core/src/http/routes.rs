//! Routes: the search page and the `/search` redirect.

use axum::extract::{Query, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::http::Site;
use crate::redirector::Action;

type SharedSite = Arc<Site>;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// `GET`/`HEAD` on `/`, `/index.html` and `/search`; anything else is 404 or 405.
pub fn router(site: SharedSite, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(page))
        .route("/index.html", get(page))
        .route("/search", get(search))
        .with_state(site)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
}

async fn page(State(site): State<SharedSite>) -> Html<String> {
    Html(site.page().to_string())
}

/// Server-side trigger: the form's button and Enter key both submit here.
async fn search(State(site): State<SharedSite>, Query(params): Query<SearchParams>) -> Response {
    let q = params.q.unwrap_or_default();
    match site.redirector().attempt(&q) {
        Action::Navigate(url) => {
            tracing::info!(%url, "redirecting search");
            (StatusCode::FOUND, [(LOCATION, url)]).into_response()
        }
        Action::NoOp => (StatusCode::SEE_OTHER, [(LOCATION, "/")]).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redirector::Redirector;
    use axum::body::{self, Body};
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    fn test_router(site: Site) -> Router {
        router(Arc::new(site), Duration::from_secs(5))
    }

    fn site() -> Site {
        Site::new("<html>page</html>".to_string(), Redirector::default())
    }

    async fn call(router: Router, method: Method, uri: &str) -> Response {
        router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn get(site: Site, uri: &str) -> Response {
        call(test_router(site), Method::GET, uri).await
    }

    fn location(resp: &Response) -> Option<&str> {
        resp.headers().get(LOCATION).and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn serves_page() {
        for uri in ["/", "/index.html", "/?utm=1"] {
            let resp = get(site(), uri).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
            assert_eq!(
                resp.headers()[axum::http::header::CONTENT_TYPE],
                "text/html; charset=utf-8"
            );
            let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
            assert_eq!(&bytes[..], b"<html>page</html>");
        }
    }

    #[tokio::test]
    async fn head_has_no_body() {
        let resp = call(test_router(site()), Method::HEAD, "/").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn search_redirects() {
        let resp = get(site(), "/search?q=Albert+Einstein").await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            location(&resp),
            Some("https://en.wikipedia.org/wiki/Albert%20Einstein")
        );

        let resp = get(site(), "/search?q=%20%20C%2B%2B%20").await;
        assert_eq!(location(&resp), Some("https://en.wikipedia.org/wiki/C%2B%2B"));

        let resp = get(site(), "/search?lang=en&q=Go").await;
        assert_eq!(location(&resp), Some("https://en.wikipedia.org/wiki/Go"));
    }

    #[tokio::test]
    async fn blank_search_returns_to_page() {
        for uri in ["/search", "/search?q=", "/search?q=+++", "/search?x=1"] {
            let resp = get(site(), uri).await;
            assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{uri}");
            assert_eq!(location(&resp), Some("/"));
        }
    }

    #[tokio::test]
    async fn head_search_redirects() {
        let resp = call(test_router(site()), Method::HEAD, "/search?q=Go").await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), Some("https://en.wikipedia.org/wiki/Go"));
    }

    #[tokio::test]
    async fn configured_base() {
        let site = Site::new(
            String::new(),
            Redirector::with_base("https://de.wikipedia.org/wiki/").unwrap(),
        );
        let resp = get(site, "/search?q=Berlin").await;
        assert_eq!(location(&resp), Some("https://de.wikipedia.org/wiki/Berlin"));
    }

    #[tokio::test]
    async fn unknown_path_and_method() {
        assert_eq!(
            get(site(), "/favicon.ico").await.status(),
            StatusCode::NOT_FOUND
        );
        let resp = call(test_router(site()), Method::POST, "/search").await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let allow = resp.headers()[axum::http::header::ALLOW].to_str().unwrap();
        assert!(allow.contains("GET"), "{allow}");
        assert!(allow.contains("HEAD"), "{allow}");
    }
}
