use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use registru::{
    model::manifest::{CreateYearRequest, ManifestEntryDto, YearDto},
    server::{
        controller::year::{activate_year, create_year, latest_manifest, years, LatestParams},
        model::{app::AppState, session::user::SessionUserId},
    },
};
use registru_test_utils::prelude::*;

use crate::util::{body_json, csrf_headers, detail, logged_in, setup};

#[tokio::test]
/// Expect years newest first without logging in
async fn years_are_public() -> Result<(), TestError> {
    let test = setup().await?;
    test.manifest().insert_year(2023, false).await?;
    let state: AppState = test.to_app_state();

    let response = years(State(state)).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let years: Vec<YearDto> = body_json(response).await;
    let values: Vec<i32> = years.iter().map(|y| y.year).collect();
    assert_eq!(values, vec![TEST_YEAR, 2023]);
    assert!(years[0].is_active);

    Ok(())
}

#[tokio::test]
/// Expect the highest running number of the requested year
async fn latest_manifest_found() -> Result<(), TestError> {
    let test = logged_in().await?;
    let year = test.manifest().insert_year(2024, false).await?;
    test.manifest().insert_entry(year.id, 11, "MSCU1234567").await?;
    test.manifest().insert_entry(year.id, 12, "TGHU7654321").await?;
    let state: AppState = test.to_app_state();

    let response = latest_manifest(
        State(state),
        test.session.clone(),
        Query(LatestParams { year: Some(2024) }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let entry: ManifestEntryDto = body_json(response).await;
    assert_eq!(entry.numar_curent, 12);
    assert_eq!(entry.container, "TGHU7654321");

    Ok(())
}

#[tokio::test]
/// Expect 404 when the active year has no entries
async fn latest_manifest_missing() -> Result<(), TestError> {
    let test = logged_in().await?;
    let state: AppState = test.to_app_state();

    let response = latest_manifest(
        State(state),
        test.session.clone(),
        Query(LatestParams::default()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect a staff user to create a year that takes over as the only active one
async fn create_year_activates_when_asked() -> Result<(), TestError> {
    let test = logged_in().await?;
    let state: AppState = test.to_app_state();
    let headers = csrf_headers(&test.session).await;

    let response = create_year(
        State(state.clone()),
        test.session.clone(),
        headers,
        Json(CreateYearRequest {
            year: TEST_YEAR + 1,
            is_active: true,
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created: YearDto = body_json(response).await;
    assert!(created.is_active);

    let years: Vec<YearDto> = body_json(years(State(state)).await.into_response()).await;
    let active: Vec<i32> = years.iter().filter(|y| y.is_active).map(|y| y.year).collect();
    assert_eq!(active, vec![TEST_YEAR + 1]);

    Ok(())
}

#[tokio::test]
/// Expect 409 for a year that already exists
async fn create_year_rejects_duplicate() -> Result<(), TestError> {
    let test = logged_in().await?;
    let state: AppState = test.to_app_state();
    let headers = csrf_headers(&test.session).await;

    let response = create_year(
        State(state),
        test.session.clone(),
        headers,
        Json(CreateYearRequest {
            year: TEST_YEAR,
            is_active: false,
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(detail(response).await.contains(&TEST_YEAR.to_string()));

    Ok(())
}

#[tokio::test]
/// Expect 403 without the CSRF header, even for a logged in staff user
async fn create_year_requires_csrf() -> Result<(), TestError> {
    let test = logged_in().await?;
    let state: AppState = test.to_app_state();

    let response = create_year(
        State(state),
        test.session.clone(),
        HeaderMap::new(),
        Json(CreateYearRequest {
            year: TEST_YEAR + 1,
            is_active: false,
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 403 for a logged in account without staff rights
async fn create_year_requires_staff() -> Result<(), TestError> {
    let test = setup().await?;
    let user = test.user().insert_non_staff_user("vizitator", "hash").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();
    let state: AppState = test.to_app_state();
    let headers = csrf_headers(&test.session).await;

    let response = create_year(
        State(state),
        test.session.clone(),
        headers,
        Json(CreateYearRequest {
            year: TEST_YEAR + 1,
            is_active: false,
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect activation to move the active flag and 404 for an unknown year
async fn activate_year_moves_active_flag() -> Result<(), TestError> {
    let test = logged_in().await?;
    let previous = test.manifest().insert_year(2024, false).await?;
    let state: AppState = test.to_app_state();

    let response = activate_year(
        State(state.clone()),
        test.session.clone(),
        csrf_headers(&test.session).await,
        Path(previous.id),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let years: Vec<YearDto> = body_json(years(State(state.clone())).await.into_response()).await;
    let active: Vec<i32> = years.iter().filter(|y| y.is_active).map(|y| y.year).collect();
    assert_eq!(active, vec![2024]);

    let missing = activate_year(
        State(state),
        test.session.clone(),
        csrf_headers(&test.session).await,
        Path(previous.id + 100),
    )
    .await
    .into_response();

    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    Ok(())
}
