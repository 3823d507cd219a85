use pokedex::api::{ApiError, ListEntry, PokeApi, PokeApiClient};
use pokedex::core::catalog::load_catalog;
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

const CATALOG_BODY: &str = r#"{
    "count": 4,
    "next": null,
    "previous": null,
    "results": [
        {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon/25/"},
        {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
        {"name": "Pidgey", "url": "https://pokeapi.co/api/v2/pokemon/16/"},
        {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
    ]
}"#;

const PIKACHU_BODY: &str = r#"{
    "name": "pikachu",
    "id": 25,
    "height": 4,
    "weight": 60,
    "base_experience": 112,
    "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}],
    "abilities": [
        {"ability": {"name": "static", "url": ""}, "is_hidden": false, "slot": 1},
        {"ability": {"name": "lightning-rod", "url": ""}, "is_hidden": true, "slot": 3}
    ],
    "stats": [
        {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
        {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": ""}},
        {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": ""}}
    ]
}"#;

async fn catalog_server(template: ResponseTemplate) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "10000"))
        .respond_with(template)
        .expect(1)
        .mount(&mock_server)
        .await;
    mock_server
}

// ============================================================================
// Catalog Client Tests
// ============================================================================

#[tokio::test]
async fn test_catalog_fetched_in_one_request() {
    let mock_server =
        catalog_server(ResponseTemplate::new(200).set_body_string(CATALOG_BODY)).await;
    let client = PokeApiClient::new(mock_server.uri(), 10_000);

    let entries = assert_ok!(client.fetch_catalog().await);

    assert_eq!(entries.len(), 4);
    assert_eq!(
        entries[0],
        ListEntry::new("pikachu", "https://pokeapi.co/api/v2/pokemon/25/")
    );
}

#[tokio::test]
async fn test_catalog_error_status_includes_code() {
    let mock_server =
        catalog_server(ResponseTemplate::new(500).set_body_string("Internal Server Error")).await;
    let client = PokeApiClient::new(mock_server.uri(), 10_000);

    let err = assert_err!(client.fetch_catalog().await);

    assert!(matches!(err, ApiError::Status { status: 500, .. }));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_catalog_malformed_body_is_decode_error() {
    let mock_server =
        catalog_server(ResponseTemplate::new(200).set_body_string(r#"{"results": [{"name": 1}]}"#))
            .await;
    let client = PokeApiClient::new(mock_server.uri(), 10_000);

    let result = client.fetch_catalog().await;

    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn test_catalog_unreachable_host_is_network_error() {
    // Nothing listens on the discard port
    let client = PokeApiClient::new("http://127.0.0.1:9", 10_000);

    let result = client.fetch_catalog().await;

    assert!(matches!(result, Err(ApiError::Network(_))));
}

#[tokio::test]
async fn test_load_catalog_groups_response() {
    let mock_server =
        catalog_server(ResponseTemplate::new(200).set_body_string(CATALOG_BODY)).await;
    let client = PokeApiClient::new(mock_server.uri(), 10_000);

    let tree = assert_ok!(load_catalog(&client).await);

    assert_eq!(tree.group_count(), 3);
    assert_eq!(tree.entry_count(), 4);
    let leaves: Vec<&str> = tree
        .rows()
        .iter()
        .filter_map(|row| row.reference())
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(leaves, vec!["bulbasaur", "ivysaur", "Pidgey", "pikachu"]);
}

// ============================================================================
// Detail Client Tests
// ============================================================================

#[tokio::test]
async fn test_detail_fetched_from_locator() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/25/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PIKACHU_BODY))
        .mount(&mock_server)
        .await;
    let client = PokeApiClient::new(mock_server.uri(), 10_000);

    let record = assert_ok!(
        client
            .fetch_detail(&format!("{}/pokemon/25/", mock_server.uri()))
            .await
    );

    assert_eq!(record.name, "pikachu");
    assert_eq!(record.id, 25);
    assert_eq!(record.base_experience, Some(112));
    assert_eq!(record.types, vec!["electric"]);
    assert_eq!(record.abilities, vec!["static", "lightning-rod"]);
    let stats: Vec<(&str, u32)> = record
        .stats
        .iter()
        .map(|s| (s.name.as_str(), s.value))
        .collect();
    assert_eq!(stats, vec![("hp", 35), ("attack", 55), ("speed", 90)]);
}

#[tokio::test]
async fn test_detail_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/99999/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;
    let client = PokeApiClient::new(mock_server.uri(), 10_000);
    let locator = format!("{}/pokemon/99999/", mock_server.uri());

    let result = client.fetch_detail(&locator).await;

    assert_eq!(
        result,
        Err(ApiError::Status {
            status: 404,
            url: locator
        })
    );
}

#[tokio::test]
async fn test_detail_html_body_is_decode_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;
    let client = PokeApiClient::new(mock_server.uri(), 10_000);

    let result = client
        .fetch_detail(&format!("{}/pokemon/1/", mock_server.uri()))
        .await;

    assert!(matches!(result, Err(ApiError::Decode(_))));
}
