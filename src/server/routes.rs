use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::debug;

use crate::http_probe::prelude::*;
use crate::server::AppState;

type AppStateArc = Arc<AppState>;

pub fn status_routes() -> Router<AppStateArc> {
    // Both paths served the same check historically; keep one handler.
    Router::new()
        .route("/_check/site-status", get(site_status))
        .route("/api/site-status", get(site_status))
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/healthz", get(|| async { "ok" }))
}

#[derive(Debug, Deserialize)]
struct StatusQuery {
    url: Option<String>,
}

async fn site_status(
    State(state): State<AppStateArc>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<ProbeResult>, (StatusCode, String)> {
    let url = query
        .url
        .filter(|u| !u.is_empty())
        .ok_or((StatusCode::BAD_REQUEST, "Missing url parameter".to_string()))?;

    debug!("checking {url}");
    let result = state
        .prober
        .probe(&url)
        .await
        .map_err(|err| (StatusCode::BAD_REQUEST, format!("Invalid URL: {err}")))?;

    Ok(Json(result))
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    fn test_app() -> Router {
        let prober = Prober::new("siteprobe-test/1.0", Duration::from_secs(2)).unwrap();
        crate::server::app(AppState { prober })
    }

    async fn get_response(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn healthz_answers() {
        let (status, body) = get_response(test_app(), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn missing_url_is_a_bad_request() {
        let (status, body) = get_response(test_app(), "/_check/site-status").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(String::from_utf8(body).unwrap(), "Missing url parameter");
    }

    #[tokio::test]
    async fn empty_url_is_a_bad_request() {
        let (status, _) = get_response(test_app(), "/_check/site-status?url=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn invalid_url_is_a_bad_request() {
        let (status, body) =
            get_response(test_app(), "/_check/site-status?url=ftp%3A%2F%2Fx").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(String::from_utf8(body).unwrap().starts_with("Invalid URL"));
    }

    #[tokio::test]
    async fn reachable_target_is_reported_as_json() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let target = Router::new().route("/", get(|| async { "ok" }));
            axum::serve(listener, target).await.unwrap();
        });

        let uri = format!("/api/site-status?url=http%3A%2F%2F{addr}%2F");
        let (status, body) = get_response(test_app(), &uri).await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["up"], true);
        assert_eq!(json["statusCode"], 200);
        assert!(json["responseTimeMs"].as_u64().unwrap() > 0);
        assert!(json.get("error").is_none());
    }
}
