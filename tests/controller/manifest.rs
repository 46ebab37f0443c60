use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use registru::{
    model::{
        api::Page,
        container::CONTAINER_TOO_SHORT,
        manifest::{ManifestEntryDto, NewManifestEntryDto},
    },
    server::{
        controller::manifest::{create, get, list, search, ListParams, SearchParams},
        data::year::YearRepository,
        model::app::AppState,
    },
};
use registru_test_utils::prelude::*;

use crate::util::{body_json, csrf_headers, detail, logged_in, setup};

fn search_params(container: &str, page: Option<u64>) -> SearchParams {
    SearchParams {
        container: Some(container.to_string()),
        page,
        ..Default::default()
    }
}

async fn active_year_id(test: &TestContext) -> i32 {
    YearRepository::new(&test.db)
        .active()
        .await
        .unwrap()
        .unwrap()
        .id
}

#[tokio::test]
/// Expect matching entries in running-number order inside the paginated envelope
async fn search_returns_page() -> Result<(), TestError> {
    let test = logged_in().await?;
    let year_id = active_year_id(&test).await;
    test.manifest().insert_entry(year_id, 2, "MSCU1234567").await?;
    test.manifest().insert_entry(year_id, 1, "MSCU1234567").await?;
    test.manifest().insert_entry(year_id, 3, "TGHU7654321").await?;
    let state: AppState = test.to_app_state();

    let response = search(
        State(state),
        test.session.clone(),
        OriginalUri(Uri::from_static("/api/manifests/search/?container=MSCU1234567")),
        Query(search_params("MSCU1234567", None)),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let page: Page<ManifestEntryDto> = body_json(response).await;
    let numbers: Vec<i32> = page.results.iter().map(|e| e.numar_curent).collect();
    assert_eq!(page.count, 2);
    assert_eq!(numbers, vec![1, 2]);
    assert!(page.next.is_none());
    assert!(page.previous.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 400 with the digit message for a short container
async fn search_rejects_short_container() -> Result<(), TestError> {
    let test = logged_in().await?;
    let state: AppState = test.to_app_state();

    let response = search(
        State(state),
        test.session.clone(),
        OriginalUri(Uri::from_static("/api/manifests/search/?container=ABCD123")),
        Query(search_params("ABCD123", None)),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(detail(response).await, CONTAINER_TOO_SHORT);

    Ok(())
}

#[tokio::test]
/// Expect 403 for an anonymous session, before any validation
async fn search_requires_login() -> Result<(), TestError> {
    let test = setup().await?;
    let state: AppState = test.to_app_state();

    let response = search(
        State(state),
        test.session.clone(),
        OriginalUri(Uri::from_static("/api/manifests/search/")),
        Query(search_params("ABCD123", None)),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 404 for a page past the last one
async fn search_rejects_invalid_page() -> Result<(), TestError> {
    let test = logged_in().await?;
    let year_id = active_year_id(&test).await;
    test.manifest().insert_entry(year_id, 1, "MSCU1234567").await?;
    let state: AppState = test.to_app_state();

    let response = search(
        State(state),
        test.session.clone(),
        OriginalUri(Uri::from_static(
            "/api/manifests/search/?container=MSCU1234567&page=5",
        )),
        Query(search_params("MSCU1234567", Some(5))),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(detail(response).await, "Invalid page.");

    Ok(())
}

#[tokio::test]
/// Expect page links when results span several pages
async fn list_links_pages() -> Result<(), TestError> {
    let test = logged_in().await?;
    let year_id = active_year_id(&test).await;
    for n in 1..=3 {
        test.manifest().insert_entry(year_id, n, "MSCU1234567").await?;
    }
    let mut state: AppState = test.to_app_state();
    state.page_size = 2;

    let response = list(
        State(state),
        test.session.clone(),
        OriginalUri(Uri::from_static("/api/manifests/")),
        Query(ListParams::default()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let page: Page<ManifestEntryDto> = body_json(response).await;
    assert_eq!(page.count, 3);
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.next.as_deref(), Some("/api/manifests/?page=2"));

    Ok(())
}

#[tokio::test]
/// Expect a single entry by id and 404 for an unknown id
async fn get_by_id() -> Result<(), TestError> {
    let test = logged_in().await?;
    let year_id = active_year_id(&test).await;
    let entry = test.manifest().insert_entry(year_id, 1, "MSCU1234567").await?;
    let state: AppState = test.to_app_state();

    let found = get(State(state.clone()), test.session.clone(), Path(entry.id))
        .await
        .into_response();
    let missing = get(State(state), test.session.clone(), Path(entry.id + 100))
        .await
        .into_response();

    assert_eq!(found.status(), StatusCode::OK);
    let dto: ManifestEntryDto = body_json(found).await;
    assert_eq!(dto.container, "MSCU1234567");
    assert_eq!(dto.year, Some(TEST_YEAR));
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    Ok(())
}

fn new_entry(container: &str) -> Json<NewManifestEntryDto> {
    Json(NewManifestEntryDto {
        numar_manifest: "M00200".to_string(),
        container: container.to_string(),
        tip_container: "22G1".to_string(),
        nume_nava: "Maersk Elba".to_string(),
        pavilion_nava: "DANEMARCA".to_string(),
        ..Default::default()
    })
}

#[tokio::test]
/// Expect a recorded entry with the next running number in the active year
async fn create_records_entry() -> Result<(), TestError> {
    let test = logged_in().await?;
    let year_id = active_year_id(&test).await;
    test.manifest().insert_entry(year_id, 9, "TGHU7654321").await?;
    let state: AppState = test.to_app_state();

    let response = create(
        State(state),
        test.session.clone(),
        csrf_headers(&test.session).await,
        new_entry("maeu 1234567"),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);
    let entry: ManifestEntryDto = body_json(response).await;
    assert_eq!(entry.numar_curent, 10);
    assert_eq!(entry.container, "MAEU1234567");
    assert_eq!(entry.model_container, "MAEU22G1");
    assert_eq!(entry.year, Some(TEST_YEAR));

    Ok(())
}

#[tokio::test]
/// Expect 400 for a blank container and 403 without CSRF or login
async fn create_rejects_invalid_requests() -> Result<(), TestError> {
    let test = logged_in().await?;
    let state: AppState = test.to_app_state();

    let blank = create(
        State(state.clone()),
        test.session.clone(),
        csrf_headers(&test.session).await,
        new_entry(" "),
    )
    .await
    .into_response();
    let without_csrf = create(
        State(state.clone()),
        test.session.clone(),
        HeaderMap::new(),
        new_entry("MAEU1234567"),
    )
    .await
    .into_response();

    let anonymous = test.new_session();
    let headers = csrf_headers(&anonymous).await;
    let not_logged_in = create(State(state), anonymous, headers, new_entry("MAEU1234567"))
        .await
        .into_response();

    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);
    assert_eq!(without_csrf.status(), StatusCode::FORBIDDEN);
    assert_eq!(not_logged_in.status(), StatusCode::FORBIDDEN);

    Ok(())
}
