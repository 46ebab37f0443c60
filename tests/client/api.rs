use mockito::{Matcher, Server};
use registru::client::{
    api::{ApiClient, SearchQuery},
    error::ApiError,
};

fn entry_json(id: i32, container: &str) -> String {
    format!(
        r#"{{"id":{id},"numar_curent":{id},"numar_manifest":"M{id:05}","container":"{container}","greutate_bruta":"12500.50"}}"#
    )
}

#[tokio::test]
/// Expect the search query sent in container, year order and a bare array accepted
async fn search_sends_expected_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/manifests/search/")
        .match_query(Matcher::Exact("container=ABCD123&year=2025".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!("[{}]", entry_json(1, "ABCD1234567")))
        .create_async()
        .await;

    let client = ApiClient::new(&format!("{}/api", server.url())).unwrap();
    let results = client
        .search(&SearchQuery {
            container: Some("ABCD123".to_string()),
            numar_manifest: None,
            year: Some(2025),
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].greutate_bruta, Some(12500.5));
}

#[tokio::test]
/// Expect the paginated envelope unwrapped to its results
async fn search_unwraps_envelope() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/manifests/search/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"count":2,"next":null,"previous":null,"results":[{},{}]}}"#,
            entry_json(1, "MSCU1234567"),
            entry_json(2, "MSCU1234567")
        ))
        .create_async()
        .await;

    let client = ApiClient::new(&format!("{}/api", server.url())).unwrap();
    let results = client
        .search(&SearchQuery {
            container: Some("MSCU1234567".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let ids: Vec<i32> = results.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
/// Expect every page of a long result set to be fetched in order
async fn search_follows_every_page() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("GET", "/api/manifests/search/")
        .match_query(Matcher::Exact("container=MSCU1234567".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"count":3,"next":"/api/manifests/search/?container=MSCU1234567&page=2","previous":null,"results":[{},{}]}}"#,
            entry_json(1, "MSCU1234567"),
            entry_json(2, "MSCU1234567")
        ))
        .create_async()
        .await;
    let second = server
        .mock("GET", "/api/manifests/search/")
        .match_query(Matcher::Exact("container=MSCU1234567&page=2".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"count":3,"next":null,"previous":"/api/manifests/search/?container=MSCU1234567","results":[{}]}}"#,
            entry_json(3, "MSCU1234567")
        ))
        .create_async()
        .await;

    let client = ApiClient::new(&format!("{}/api", server.url())).unwrap();
    let results = client
        .search(&SearchQuery {
            container: Some("MSCU1234567".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    first.assert_async().await;
    second.assert_async().await;
    let ids: Vec<i32> = results.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
/// Expect root-relative image paths turned into URLs on the API host
async fn search_resolves_media_urls() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/manifests/search/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{"id":1,"numar_curent":1,"numar_manifest":"M1","container":"MSCU1234567","ship_image":"/media/ships/aurora.png","pavilion_image":"https://cdn.example.com/pa.png"}]"#,
        )
        .create_async()
        .await;

    let client = ApiClient::new(&format!("{}/api", server.url())).unwrap();
    let results = client
        .search(&SearchQuery {
            container: Some("MSCU1234567".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(
        results[0].ship_image.as_deref(),
        Some(format!("{}/media/ships/aurora.png", server.url()).as_str())
    );
    assert_eq!(
        results[0].pavilion_image.as_deref(),
        Some("https://cdn.example.com/pa.png")
    );
    assert_eq!(results[0].container_type_image, None);
}

#[tokio::test]
/// Expect the backend's detail message carried in the error
async fn search_error_keeps_detail() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/manifests/search/")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Containerul trebuie să conțină minim 7 cifre"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&format!("{}/api", server.url())).unwrap();
    let error = client
        .search(&SearchQuery {
            container: Some("ABC".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::Status { .. }));
    assert_eq!(
        error.detail(),
        Some("Containerul trebuie să conțină minim 7 cifre")
    );
}

#[tokio::test]
/// Expect false for any non-2xx answer and true for 200
async fn check_auth_follows_status() {
    let mut server = Server::new_async().await;
    let client = ApiClient::new(&format!("{}/api", server.url())).unwrap();

    let forbidden = server
        .mock("GET", "/api/check-auth/")
        .with_status(403)
        .create_async()
        .await;
    assert!(!client.check_auth().await);
    forbidden.remove_async().await;

    server
        .mock("GET", "/api/check-auth/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"authenticated":true,"username":"operator"}"#)
        .create_async()
        .await;
    assert!(client.check_auth().await);
}

#[tokio::test]
/// Expect false when the backend is unreachable
async fn check_auth_false_when_offline() {
    let client = ApiClient::new("http://127.0.0.1:9/api").unwrap();

    assert!(!client.check_auth().await);
}

#[tokio::test]
/// Expect 404 mapped to None
async fn latest_manifest_missing_is_none() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/latest-manifest/")
        .match_query(Matcher::UrlEncoded("year".to_string(), "2024".to_string()))
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Nu există manifeste înregistrate pentru anul selectat"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&format!("{}/api", server.url())).unwrap();
    let latest = client.latest_manifest(Some(2024)).await.unwrap();

    assert!(latest.is_none());
}

#[tokio::test]
/// Expect the CSRF cookie fetched first and echoed in the login request header
async fn login_sends_csrf_header() {
    let mut server = Server::new_async().await;
    let csrf = server
        .mock("GET", "/api/csrf/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("set-cookie", "csrftoken=abc123; Path=/; SameSite=Lax")
        .with_body(r#"{"detail":"CSRF cookie set"}"#)
        .create_async()
        .await;
    let login = server
        .mock("POST", "/api/login/")
        .match_header("x-csrftoken", "abc123")
        .match_body(Matcher::Json(serde_json::json!({
            "username": "operator",
            "password": "secret"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Autentificare reușită","username":"operator"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&format!("{}/api", server.url())).unwrap();
    let response = client.login("operator", "secret").await.unwrap();

    csrf.assert_async().await;
    login.assert_async().await;
    assert_eq!(response.username, "operator");
    assert_eq!(client.csrf_token().as_deref(), Some("abc123"));
}

#[tokio::test]
/// Expect a failed login to surface the backend detail
async fn login_failure_keeps_detail() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/csrf/")
        .with_status(200)
        .with_header("set-cookie", "csrftoken=abc123; Path=/")
        .with_body(r#"{"detail":"CSRF cookie set"}"#)
        .create_async()
        .await;
    server
        .mock("POST", "/api/login/")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Credențiale invalide"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&format!("{}/api", server.url())).unwrap();
    let error = client.login("operator", "wrong").await.unwrap_err();

    assert_eq!(error.detail(), Some("Credențiale invalide"));
}

#[tokio::test]
/// Expect years to decode from a bare array
async fn years_from_bare_array() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/years/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":2,"year":2025,"is_active":true},{"id":1,"year":2024,"is_active":false}]"#)
        .create_async()
        .await;

    let client = ApiClient::new(&format!("{}/api", server.url())).unwrap();
    let years = client.years().await.unwrap();

    assert_eq!(years.len(), 2);
    assert!(years[0].is_active);
}
