use mockito::{Matcher, Server};
use registru::{
    client::{
        api::ApiClient,
        search::{SearchFlow, SearchState, NO_RESULTS},
    },
    model::container::CONTAINER_TOO_SHORT,
};

#[tokio::test]
/// Expect no request at all for a container with fewer than 7 digits
async fn short_container_never_hits_network() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/manifests/search/")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = ApiClient::new(&format!("{}/api", server.url())).unwrap();
    let mut flow = SearchFlow::new();
    flow.form.container = "ABCD123".to_string();

    flow.search(&client).await;

    mock.assert_async().await;
    assert_eq!(
        flow.state(),
        &SearchState::Error(CONTAINER_TOO_SHORT.to_string())
    );
}

#[tokio::test]
/// Expect results with the cursor on the first one
async fn search_populates_results() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/manifests/search/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("container".to_string(), "MSCU1234567".to_string()),
            Matcher::UrlEncoded("year".to_string(), "2025".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{"id":1,"numar_curent":1,"numar_manifest":"M1","container":"MSCU1234567"},
                {"id":2,"numar_curent":2,"numar_manifest":"M2","container":"MSCU1234567"}]"#,
        )
        .create_async()
        .await;

    let client = ApiClient::new(&format!("{}/api", server.url())).unwrap();
    let mut flow = SearchFlow::new();
    flow.form.container = "MSCU1234567".to_string();
    flow.form.year = Some(2025);

    flow.search(&client).await;

    assert_eq!(flow.state(), &SearchState::ResultsFound);
    assert_eq!(flow.results().len(), 2);
    assert_eq!(flow.cursor(), 0);
    assert!(!flow.can_previous());
    assert!(flow.can_next());
}

#[tokio::test]
/// Expect the no-results state and message for an empty answer
async fn empty_answer_is_no_results() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/manifests/search/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"count":0,"next":null,"previous":null,"results":[]}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&format!("{}/api", server.url())).unwrap();
    let mut flow = SearchFlow::new();
    flow.form.container = "MSCU1234567".to_string();

    flow.search(&client).await;

    assert_eq!(flow.state(), &SearchState::NoResults);
    assert_eq!(flow.message(), Some(NO_RESULTS));
    assert!(flow.current().is_none());
}
