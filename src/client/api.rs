//! HTTP client for the registry API.
//!
//! Every request goes through one `reqwest` client sharing a cookie jar, so the session
//! cookie from login and the `csrftoken` cookie are replayed automatically. State-changing
//! requests copy the CSRF cookie into the `X-CSRFToken` header.

use std::sync::Arc;

use dioxus_logger::tracing;
use reqwest::{
    cookie::{CookieStore, Jar},
    Response, StatusCode, Url,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::error::ApiError,
    model::{
        api::{DetailDto, ErrorDto, Listing},
        auth::{LoginRequest, LoginResponse},
        manifest::{ManifestEntryDto, YearDto},
    },
};

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "REGISTRU_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Parameters of a manifest search. Empty values are left out of the request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchQuery {
    pub container: Option<String>,
    pub numar_manifest: Option<String>,
    pub year: Option<i32>,
}

impl SearchQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(container) = self.container.as_ref().filter(|c| !c.is_empty()) {
            params.push(("container", container.clone()));
        }
        if let Some(numar) = self.numar_manifest.as_ref().filter(|n| !n.is_empty()) {
            params.push(("numar_manifest", numar.clone()));
        }
        if let Some(year) = self.year {
            params.push(("year", year.to_string()));
        }

        params
    }
}

/// Resolve `image` against the origin of `base_url`.
///
/// Absolute URLs and blank values are returned unchanged, as is anything that does not
/// form a valid URL.
pub fn resolve_media(base_url: &str, image: &str) -> String {
    let image = image.trim();
    if image.is_empty() {
        return String::new();
    }

    Url::parse(base_url)
        .and_then(|base| base.join(image))
        .map(String::from)
        .unwrap_or_else(|_| image.to_string())
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    jar: Arc<Jar>,
    base_url: String,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Arc::ptr_eq(&self.jar, &other.jar)
    }
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`, e.g. `http://localhost:8000/api`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(jar.clone())
            .build()?;

        Ok(Self {
            http,
            jar,
            base_url,
        })
    }

    /// Create a client using `REGISTRU_API_URL`, falling back to the local default.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an image served by the backend.
    ///
    /// Root-relative media paths such as `/media/ships/x.png` are resolved against the
    /// origin of the API, so the desktop webview loads them from the backend.
    pub fn media_url(&self, image: &str) -> String {
        resolve_media(&self.base_url, image)
    }

    fn resolve_images(&self, entry: &mut ManifestEntryDto) {
        for image in [
            &mut entry.ship_image,
            &mut entry.container_type_image,
            &mut entry.pavilion_image,
        ] {
            if let Some(path) = image.as_mut() {
                *path = self.media_url(path);
            }
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(Url::parse(&format!("{}/{}", self.base_url, path))?)
    }

    /// Current value of the `csrftoken` cookie, if the backend has set one.
    pub fn csrf_token(&self) -> Option<String> {
        let url = Url::parse(&format!("{}/", self.base_url)).ok()?;
        let header = self.jar.cookies(&url)?;
        let cookies = header.to_str().ok()?;

        cookies.split(';').find_map(|cookie| {
            let (name, value) = cookie.trim().split_once('=')?;
            (name == CSRF_COOKIE).then(|| value.to_string())
        })
    }

    /// Fetch the CSRF cookie, then post the credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response = self.http.get(self.endpoint("csrf/")?).send().await?;
        Self::check(response).await?;

        let request = LoginRequest {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        };

        self.post("login/", &request).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let _: DetailDto = self.post("logout/", &serde_json::json!({})).await?;

        Ok(())
    }

    /// Whether the current session is authenticated. Never fails: any error means `false`.
    pub async fn check_auth(&self) -> bool {
        let Ok(url) = self.endpoint("check-auth/") else {
            return false;
        };

        match self.http.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("Session check failed: {}", e);
                false
            }
        }
    }

    /// Every entry matching `query`, following the pagination to the last page.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<ManifestEntryDto>, ApiError> {
        let url = self.endpoint("manifests/search/")?;
        let mut entries = Vec::new();
        let mut page: u64 = 1;

        loop {
            let mut params = query.params();
            if page > 1 {
                params.push(("page", page.to_string()));
            }

            let response = self.http.get(url.clone()).query(&params).send().await?;
            let listing: Listing<ManifestEntryDto> = Self::decode(response).await?;
            let has_next = listing.has_next();
            let items = listing.into_vec();
            let exhausted = items.is_empty();

            entries.extend(items);
            if exhausted || !has_next {
                break;
            }
            page += 1;
        }

        entries.iter_mut().for_each(|entry| self.resolve_images(entry));

        Ok(entries)
    }

    /// One page of every manifest entry, newest registration first.
    pub async fn manifests(&self, page: u64) -> Result<Listing<ManifestEntryDto>, ApiError> {
        let response = self
            .http
            .get(self.endpoint("manifests/")?)
            .query(&[("page", page)])
            .send()
            .await?;

        let mut listing: Listing<ManifestEntryDto> = Self::decode(response).await?;
        listing
            .items_mut()
            .iter_mut()
            .for_each(|entry| self.resolve_images(entry));

        Ok(listing)
    }

    pub async fn years(&self) -> Result<Vec<YearDto>, ApiError> {
        let response = self.http.get(self.endpoint("years/")?).send().await?;
        let listing: Listing<YearDto> = Self::decode(response).await?;

        Ok(listing.into_vec())
    }

    /// Highest running number of `year`, or of the active year when `None`.
    ///
    /// A 404 means the year has no entries yet and yields `Ok(None)`.
    pub async fn latest_manifest(
        &self,
        year: Option<i32>,
    ) -> Result<Option<ManifestEntryDto>, ApiError> {
        let mut request = self.http.get(self.endpoint("latest-manifest/")?);
        if let Some(year) = year {
            request = request.query(&[("year", year)]);
        }

        let response = request.send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let mut entry: ManifestEntryDto = Self::decode(response).await?;
        self.resolve_images(&mut entry);

        Ok(Some(entry))
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.http.post(self.endpoint(path)?).json(body);
        if let Some(token) = self.csrf_token() {
            request = request.header(CSRF_HEADER, token);
        }

        let response = request.send().await?;

        Self::decode(response).await
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = response.json::<ErrorDto>().await.ok().map(|e| e.detail);

        Err(ApiError::Status { status, detail })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check(response).await?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
