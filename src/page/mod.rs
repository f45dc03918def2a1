//! Static page rendering.
//!
//! The homepage is a pure function of nothing: [`home::render_home`]
//! always yields the same fragment. `GET /home` serves it as a full
//! document.

pub mod home;
pub mod markup;

use axum::Router;
use axum::response::{Html, IntoResponse};
use axum::routing::get;

use crate::app_state::AppState;

pub use home::{render_home, render_home_document};

/// `GET /home`: The homepage document.
pub async fn home_handler() -> impl IntoResponse {
    Html(render_home_document())
}

/// Page routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/home", get(home_handler))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;
    use crate::config::ServerConfig;

    #[tokio::test]
    async fn serves_html_document() {
        let app = routes().with_state(AppState::new(&ServerConfig::default()));
        let Ok(request) = Request::builder().uri("/home").body(Body::empty()) else {
            panic!("request must build");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("router is infallible");
        };
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok());
        assert_eq!(content_type, Some("text/html; charset=utf-8"));

        let Ok(body) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body must read");
        };
        assert_eq!(body.as_ref(), render_home_document().as_bytes());
    }
}
