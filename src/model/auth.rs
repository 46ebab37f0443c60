use serde::{Deserialize, Serialize};

/// Credentials posted to the login endpoint.
///
/// Both fields are optional on the wire so a missing field can be answered with a 400
/// carrying a readable message instead of a deserialization rejection.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginResponse {
    pub detail: String,
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CheckAuthDto {
    pub authenticated: bool,
    pub username: String,
}
