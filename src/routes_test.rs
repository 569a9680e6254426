use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn test_app() -> Router {
    let options = LeptosOptions::builder().output_name("portfolio").build();
    let assets = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public");
    app(options, &assets)
}

async fn status_of(uri: &str) -> StatusCode {
    test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
    assert_eq!(status_of("/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn stylesheet_is_served_from_assets() {
    assert_eq!(status_of("/style.css").await, StatusCode::OK);
}

#[tokio::test]
async fn unknown_asset_is_not_found() {
    assert_eq!(status_of("/does-not-exist.txt").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_bundle_file_is_not_found() {
    assert_eq!(status_of("/pkg/nothing-here.wasm").await, StatusCode::NOT_FOUND);
}
