use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use registru::{
    model::{
        api::DetailDto,
        auth::{CheckAuthDto, LoginRequest, LoginResponse},
    },
    server::{
        controller::auth::{check_auth, csrf, login, logout, LOGIN_SUCCESS, LOGOUT_SUCCESS},
        model::{app::AppState, session::user::SessionUserId},
    },
};
use registru_test_utils::prelude::*;

use crate::util::{body_json, csrf_headers, detail, logged_in, setup, TEST_PASSWORD};

fn credentials(username: Option<&str>, password: Option<&str>) -> Json<LoginRequest> {
    Json(LoginRequest {
        username: username.map(str::to_string),
        password: password.map(str::to_string),
    })
}

#[tokio::test]
/// Expect the csrftoken cookie to carry the session's token
async fn csrf_sets_cookie() -> Result<(), TestError> {
    let test = setup().await?;

    let response = csrf(test.session.clone()).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("csrftoken="));
    assert!(cookie.contains("Path=/"));

    let body: DetailDto = body_json(response).await;
    assert_eq!(body.detail, "CSRF cookie set");

    Ok(())
}

#[tokio::test]
/// Expect 200 with the username and a session user after valid credentials
async fn login_succeeds() -> Result<(), TestError> {
    let test = setup().await?;
    let state: AppState = test.to_app_state();
    let headers = csrf_headers(&test.session).await;

    let response = login(
        State(state),
        test.session.clone(),
        headers,
        credentials(Some(TEST_USERNAME), Some(TEST_PASSWORD)),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body: LoginResponse = body_json(response).await;
    assert_eq!(body.detail, LOGIN_SUCCESS);
    assert_eq!(body.username, TEST_USERNAME);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_some());

    Ok(())
}

#[tokio::test]
/// Expect 400 when the password is missing
async fn login_requires_both_fields() -> Result<(), TestError> {
    let test = setup().await?;
    let state: AppState = test.to_app_state();
    let headers = csrf_headers(&test.session).await;

    let response = login(
        State(state),
        test.session.clone(),
        headers,
        credentials(Some(TEST_USERNAME), None),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(detail(response).await, "Username și password sunt obligatorii");

    Ok(())
}

#[tokio::test]
/// Expect 401 and no session user for a wrong password
async fn login_rejects_bad_credentials() -> Result<(), TestError> {
    let test = setup().await?;
    let state: AppState = test.to_app_state();
    let headers = csrf_headers(&test.session).await;

    let response = login(
        State(state),
        test.session.clone(),
        headers,
        credentials(Some(TEST_USERNAME), Some("gresit")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(detail(response).await, "Credențiale invalide");
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 403 when the CSRF header does not match the session
async fn login_rejects_csrf_mismatch() -> Result<(), TestError> {
    let test = setup().await?;
    let state: AppState = test.to_app_state();
    csrf_headers(&test.session).await;

    let mut headers = HeaderMap::new();
    headers.insert("x-csrftoken", "not-the-token".parse().unwrap());

    let response = login(
        State(state),
        test.session.clone(),
        headers,
        credentials(Some(TEST_USERNAME), Some(TEST_PASSWORD)),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 200 with the username for a logged in session
async fn check_auth_reports_user() -> Result<(), TestError> {
    let test = logged_in().await?;
    let state: AppState = test.to_app_state();

    let response = check_auth(State(state), test.session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body: CheckAuthDto = body_json(response).await;
    assert!(body.authenticated);
    assert_eq!(body.username, TEST_USERNAME);

    Ok(())
}

#[tokio::test]
/// Expect 403 for an anonymous session
async fn check_auth_forbidden_without_session() -> Result<(), TestError> {
    let test = setup().await?;
    let state: AppState = test.to_app_state();

    let response = check_auth(State(state), test.session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect the session user removed after logout
async fn logout_clears_session() -> Result<(), TestError> {
    let test = logged_in().await?;
    let state: AppState = test.to_app_state();
    let headers = csrf_headers(&test.session).await;

    let response = logout(State(state), test.session.clone(), headers)
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body: DetailDto = body_json(response).await;
    assert_eq!(body.detail, LOGOUT_SUCCESS);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 403 when logging out without being logged in
async fn logout_requires_user() -> Result<(), TestError> {
    let test = setup().await?;
    let state: AppState = test.to_app_state();
    let headers = csrf_headers(&test.session).await;

    let response = logout(State(state), test.session.clone(), headers)
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}
