//! Requests sent through the full router with a memory-backed session layer.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use registru::{
    model::auth::{CheckAuthDto, LoginResponse},
    server::{model::app::AppState, router::routes},
};
use registru_test_utils::prelude::*;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::{body_json, setup, TEST_PASSWORD};

fn app(test: &TestContext) -> Router {
    let state: AppState = test.to_app_state();

    routes()
        .with_state(state)
        .layer(SessionManagerLayer::new(MemoryStore::default()).with_secure(false))
}

/// `name=value` pairs of every cookie the response sets, ready for a `Cookie` header
fn cookies(response: &Response) -> Vec<(String, String)> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .filter_map(|pair| pair.split_once('='))
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .collect()
}

fn cookie_header(cookies: &[(String, String)]) -> String {
    cookies
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

#[tokio::test]
/// Expect the public years route and the OpenAPI document to be served
async fn serves_public_routes() -> Result<(), TestError> {
    let test = setup().await?;
    let app = app(&test);

    let years = app
        .clone()
        .oneshot(Request::get("/api/years/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let docs = app
        .oneshot(
            Request::get("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(years.status(), StatusCode::OK);
    assert_eq!(docs.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect the staff write routes to be mounted next to their GET counterparts
async fn write_routes_are_mounted() -> Result<(), TestError> {
    let test = setup().await?;
    let app = app(&test);

    for (uri, body) in [
        ("/api/years/", r#"{"year":2030}"#),
        ("/api/years/1/activate/", "{}"),
        ("/api/manifests/", r#"{"numar_manifest":"M1","container":"MSCU1234567"}"#),
    ] {
        let response = app
            .clone()
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{uri}");
    }

    Ok(())
}

#[tokio::test]
/// Expect protected routes to answer 403 without a session
async fn protected_routes_need_session() -> Result<(), TestError> {
    let test = setup().await?;
    let app = app(&test);

    for uri in [
        "/api/check-auth/",
        "/api/manifests/",
        "/api/manifests/search/?container=MSCU1234567",
        "/api/manifests/1/",
        "/api/latest-manifest/",
        "/api/ships/",
    ] {
        let response = app
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{uri}");
    }

    Ok(())
}

#[tokio::test]
/// Expect csrf, login and check-auth to work together over cookies
async fn login_flow_over_cookies() -> Result<(), TestError> {
    let test = setup().await?;
    let app = app(&test);

    let csrf = app
        .clone()
        .oneshot(Request::get("/api/csrf/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(csrf.status(), StatusCode::OK);

    let jar = cookies(&csrf);
    let token = jar
        .iter()
        .find(|(name, _)| name == "csrftoken")
        .map(|(_, value)| value.clone())
        .unwrap();

    let login = app
        .clone()
        .oneshot(
            Request::post("/api/login/")
                .header(header::COOKIE, cookie_header(&jar))
                .header(header::CONTENT_TYPE, "application/json")
                .header("X-CSRFToken", token)
                .body(Body::from(
                    serde_json::json!({
                        "username": TEST_USERNAME,
                        "password": TEST_PASSWORD
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(login.status(), StatusCode::OK);

    // Login cycles the session id
    let mut jar: Vec<(String, String)> = jar
        .into_iter()
        .filter(|(name, _)| cookies(&login).iter().all(|(n, _)| n != name))
        .collect();
    jar.extend(cookies(&login));
    let login_body: LoginResponse = body_json(login).await;
    assert_eq!(login_body.username, TEST_USERNAME);

    let check = app
        .oneshot(
            Request::get("/api/check-auth/")
                .header(header::COOKIE, cookie_header(&jar))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(check.status(), StatusCode::OK);
    let body: CheckAuthDto = body_json(check).await;
    assert!(body.authenticated);

    Ok(())
}
