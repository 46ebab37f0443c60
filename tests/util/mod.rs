//! Shared helpers for controller integration tests.

use axum::{
    body::to_bytes,
    http::{HeaderMap, HeaderValue},
    response::Response,
};
use registru::server::{
    controller::util::csrf::CSRF_HEADER,
    model::session::{csrf::SessionCsrfToken, user::SessionUserId},
    service::auth::hash_password,
};
use registru_test_utils::prelude::*;
use serde::de::DeserializeOwned;
use tower_sessions::Session;

pub const TEST_PASSWORD: &str = "parola-de-test";

/// Headers carrying the session's CSRF token, issuing one first if needed
pub async fn csrf_headers(session: &Session) -> HeaderMap {
    let token = SessionCsrfToken::get_or_create(session).await.unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(CSRF_HEADER, HeaderValue::from_str(&token).unwrap());
    headers
}

/// Test context with the manifest tables, an active year and a staff user whose
/// password is [`TEST_PASSWORD`]
pub async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_year(TEST_YEAR, true)
        .with_user(TEST_USERNAME, &hash_password(TEST_PASSWORD).unwrap())
        .build()
        .await
}

/// Like [`setup`], with the staff user already logged in
pub async fn logged_in() -> Result<TestContext, TestError> {
    let test = setup().await?;
    log_in(&test).await;

    Ok(test)
}

pub async fn log_in(test: &TestContext) {
    use registru::server::data::user::UserRepository;

    let user = UserRepository::new(&test.db)
        .find_by_username(TEST_USERNAME)
        .await
        .unwrap()
        .unwrap();

    SessionUserId::insert(&test.session, user.id).await.unwrap();
}

pub async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&body).unwrap()
}

pub async fn detail(response: Response) -> String {
    body_json::<registru::model::api::ErrorDto>(response)
        .await
        .detail
}
