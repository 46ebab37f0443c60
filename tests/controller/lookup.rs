use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use registru::{
    model::manifest::ContainerTypeDto,
    server::{
        controller::lookup::{container_types, pavilions, ships, LookupParams},
        model::app::AppState,
    },
};
use registru_test_utils::prelude::*;

use crate::util::{body_json, logged_in, setup};

#[tokio::test]
/// Expect the search term to narrow container types and images to carry the media prefix
async fn container_types_filtered() -> Result<(), TestError> {
    let test = logged_in().await?;
    test.manifest()
        .insert_container_type("MSCU22G1", "22G1", Some("containers/22g1.png"))
        .await?;
    test.manifest()
        .insert_container_type("TGHU45R1", "45R1", None)
        .await?;
    let state: AppState = test.to_app_state();

    let response = container_types(
        State(state),
        test.session.clone(),
        Query(LookupParams {
            search: Some("22g".to_string()),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let items: Vec<ContainerTypeDto> = body_json(response).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].image.as_deref(), Some("/media/containers/22g1.png"));

    Ok(())
}

#[tokio::test]
/// Expect every lookup listing to require a login
async fn lookups_require_login() -> Result<(), TestError> {
    let test = setup().await?;
    let state: AppState = test.to_app_state();

    let ships_response = ships(
        State(state.clone()),
        test.session.clone(),
        Query(LookupParams::default()),
    )
    .await
    .into_response();
    let pavilions_response = pavilions(State(state), test.session.clone(), Query(LookupParams::default()))
        .await
        .into_response();

    assert_eq!(ships_response.status(), StatusCode::FORBIDDEN);
    assert_eq!(pavilions_response.status(), StatusCode::FORBIDDEN);

    Ok(())
}
