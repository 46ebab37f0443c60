use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap},
    response::IntoResponse,
    Json,
};
use tower_sessions::{
    cookie::{Cookie, SameSite},
    Session,
};

use crate::{
    model::{
        api::{DetailDto, ErrorDto},
        auth::{CheckAuthDto, LoginRequest, LoginResponse},
    },
    server::{
        controller::util::{csrf::validate_csrf, get_user::get_user_from_session},
        error::Error,
        model::{
            app::AppState,
            session::{csrf::SessionCsrfToken, user::SessionUserId},
        },
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Cookie the client reads the CSRF token from
pub const CSRF_COOKIE: &str = "csrftoken";

pub const LOGIN_SUCCESS: &str = "Autentificare reușită";
pub const LOGOUT_SUCCESS: &str = "Deconectare reușită";

/// Issue a CSRF token
///
/// Stores a token in the session (reusing an existing one) and mirrors it into the
/// `csrftoken` cookie. State-changing requests must echo it in the `X-CSRFToken` header.
///
/// # Responses
/// - 200 (Success): Cookie set
/// - 500 (Internal Server Error): Session store failure
#[utoipa::path(
    get,
    path = "/api/csrf/",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "CSRF cookie set", body = DetailDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn csrf(session: Session) -> Result<impl IntoResponse, Error> {
    let token = SessionCsrfToken::get_or_create(&session).await?;

    let cookie = Cookie::build((CSRF_COOKIE, token))
        .path("/")
        .same_site(SameSite::Lax)
        .build();

    Ok((
        [(SET_COOKIE, cookie.to_string())],
        Json(DetailDto {
            detail: "CSRF cookie set".to_string(),
        }),
    ))
}

/// Log in with a username and password
///
/// # Responses
/// - 200 (Success): Session now belongs to the user
/// - 400 (Bad Request): Username or password missing
/// - 401 (Unauthorized): Credentials do not match a staff account
/// - 403 (Forbidden): CSRF token missing or incorrect
#[utoipa::path(
    post,
    path = "/api/login/",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, description = "Missing username or password", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "CSRF validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(credentials): Json<LoginRequest>,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, &headers).await?;

    let user = AuthService::new(&state.db)
        .authenticate(
            credentials.username.as_deref(),
            credentials.password.as_deref(),
        )
        .await?;

    // New session id on privilege change, data is kept
    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    Ok(Json(LoginResponse {
        detail: LOGIN_SUCCESS.to_string(),
        username: user.username,
    }))
}

/// Log out by deleting the session
///
/// # Responses
/// - 200 (Success): Session removed
/// - 403 (Forbidden): No logged in user, or CSRF validation failed
#[utoipa::path(
    post,
    path = "/api/logout/",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = DetailDto),
        (status = 403, description = "Not logged in or CSRF validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, &headers).await?;
    get_user_from_session(&state, &session).await?;

    session.flush().await?;

    Ok(Json(DetailDto {
        detail: LOGOUT_SUCCESS.to_string(),
    }))
}

/// Report whether the session belongs to a logged in user
///
/// # Responses
/// - 200 (Success): Logged in, with the username
/// - 403 (Forbidden): No logged in user
#[utoipa::path(
    get,
    path = "/api/check-auth/",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged in", body = CheckAuthDto),
        (status = 403, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_auth(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok(Json(CheckAuthDto {
        authenticated: true,
        username: user.username,
    }))
}
