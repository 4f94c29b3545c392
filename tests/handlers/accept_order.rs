use std::sync::Arc;

use common::test_tools::http::constants::{
    ACCEPT_ORDER_PATH_FOR_MOCK_REQUESTS, MONGO_ORDER_ID_FOR_MOCK_REQUESTS,
    ORDER_ID_FOR_MOCK_REQUESTS,
};
use common::test_tools::http::helpers::{mock_json_post, mock_raw_post, received_json_bodies};
use driver_order_acceptance::acceptance::{AcceptanceOutcome, OrderAcceptanceClient};
use driver_order_acceptance::driver_api::HttpDriverApi;
use driver_order_acceptance::dtos::responses::{AcceptOrderResponse, AcceptanceAcknowledgement};
use driver_order_acceptance::navigation::LocationNavigator;
use model::order::OrderId;
use rstest::rstest;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::fixtures::backend::{backend_config, backend_fixture, BackendFixture};
use crate::helpers::navigation::RecordingNavigator;

fn recording_client(
    fixture: &BackendFixture,
) -> (
    OrderAcceptanceClient<HttpDriverApi, RecordingNavigator>,
    Arc<RecordingNavigator>,
) {
    let navigator = Arc::new(RecordingNavigator::default());
    let client = OrderAcceptanceClient::new(fixture.driver_api.clone(), navigator.clone());
    (client, navigator)
}

#[rstest]
#[tokio::test]
async fn accepted_order_redirects_to_ongoing_ride(#[future] backend_fixture: BackendFixture) {
    let fixture = backend_fixture.await;
    mock_json_post(
        &fixture.mock_server,
        ACCEPT_ORDER_PATH_FOR_MOCK_REQUESTS,
        json!({ "order_id": ORDER_ID_FOR_MOCK_REQUESTS }),
        200,
        json!({ "accepted": true }),
        1,
    )
    .await;

    let navigator = Arc::new(LocationNavigator::new(
        fixture.config.origin(),
        "/driver_home",
    ));
    let client = OrderAcceptanceClient::new(fixture.driver_api.clone(), navigator.clone());

    let outcome = client
        .accept_order(OrderId::from(ORDER_ID_FOR_MOCK_REQUESTS))
        .await
        .unwrap();

    assert_eq!(
        AcceptanceOutcome::Succeeded {
            response: AcceptOrderResponse::Acknowledged(AcceptanceAcknowledgement {
                accepted: Some(true),
                ..AcceptanceAcknowledgement::default()
            }),
            location: "/driver_ongoing_ride/ORD-42".to_owned(),
        },
        outcome
    );
    assert_eq!(
        format!("{}/driver_ongoing_ride/ORD-42", fixture.config.origin()),
        navigator.href()
    );
}

#[rstest]
#[tokio::test]
async fn success_navigates_once_and_sends_a_single_request(
    #[future] backend_fixture: BackendFixture,
) {
    let fixture = backend_fixture.await;
    mock_json_post(
        &fixture.mock_server,
        ACCEPT_ORDER_PATH_FOR_MOCK_REQUESTS,
        json!({ "order_id": MONGO_ORDER_ID_FOR_MOCK_REQUESTS }),
        200,
        json!({ "status": "ok" }),
        1,
    )
    .await;
    let (client, navigator) = recording_client(&fixture);

    client
        .accept_order(OrderId::from(MONGO_ORDER_ID_FOR_MOCK_REQUESTS))
        .await
        .unwrap();

    assert_eq!(
        vec![format!(
            "/driver_ongoing_ride/{MONGO_ORDER_ID_FOR_MOCK_REQUESTS}"
        )],
        navigator.visited()
    );
    assert_eq!(
        vec![json!({ "order_id": MONGO_ORDER_ID_FOR_MOCK_REQUESTS })],
        received_json_bodies(&fixture.mock_server).await
    );
}

#[rstest]
#[tokio::test]
async fn numeric_order_id_is_sent_as_number(#[future] backend_fixture: BackendFixture) {
    let fixture = backend_fixture.await;
    mock_json_post(
        &fixture.mock_server,
        ACCEPT_ORDER_PATH_FOR_MOCK_REQUESTS,
        json!({ "order_id": 1024 }),
        200,
        json!({ "status": "ok" }),
        1,
    )
    .await;
    let (client, navigator) = recording_client(&fixture);

    client.accept_order(OrderId::from(1024_u64)).await.unwrap();

    assert_eq!(vec!["/driver_ongoing_ride/1024"], navigator.visited());
}

#[rstest]
#[case::server_error(500)]
#[case::not_found(404)]
#[case::already_accepted(409)]
#[tokio::test]
async fn rejected_acceptance_does_not_navigate(
    #[future] backend_fixture: BackendFixture,
    #[case] status: u16,
) {
    let fixture = backend_fixture.await;
    mock_json_post(
        &fixture.mock_server,
        ACCEPT_ORDER_PATH_FOR_MOCK_REQUESTS,
        json!({ "order_id": ORDER_ID_FOR_MOCK_REQUESTS }),
        status,
        json!({ "error": "order can't be accepted" }),
        1,
    )
    .await;
    let (client, navigator) = recording_client(&fixture);

    let outcome = client
        .accept_order(OrderId::from(ORDER_ID_FOR_MOCK_REQUESTS))
        .await
        .unwrap();

    assert_eq!(AcceptanceOutcome::Failed, outcome);
    assert!(navigator.visited().is_empty());
}

#[rstest]
#[tokio::test]
async fn non_json_response_does_not_navigate(#[future] backend_fixture: BackendFixture) {
    let fixture = backend_fixture.await;
    mock_raw_post(
        &fixture.mock_server,
        ACCEPT_ORDER_PATH_FOR_MOCK_REQUESTS,
        200,
        "<!doctype html><title>Driver home</title>",
    )
    .await;
    let (client, navigator) = recording_client(&fixture);

    let outcome = client
        .accept_order(OrderId::from(ORDER_ID_FOR_MOCK_REQUESTS))
        .await
        .unwrap();

    assert_eq!(AcceptanceOutcome::Failed, outcome);
    assert!(navigator.visited().is_empty());
}

#[tokio::test]
async fn network_error_does_not_navigate() {
    let mock_server = MockServer::start().await;
    let config = backend_config(mock_server.uri());
    drop(mock_server);

    let navigator = Arc::new(RecordingNavigator::default());
    let client = OrderAcceptanceClient::new(
        Arc::new(HttpDriverApi::new(&config).unwrap()),
        navigator.clone(),
    );

    let outcome = client
        .accept_order(OrderId::from(ORDER_ID_FOR_MOCK_REQUESTS))
        .await
        .unwrap();

    assert_eq!(AcceptanceOutcome::Failed, outcome);
    assert!(navigator.visited().is_empty());
}

#[rstest]
#[tokio::test]
async fn concurrent_orders_complete_independently(#[future] backend_fixture: BackendFixture) {
    let fixture = backend_fixture.await;
    mock_json_post(
        &fixture.mock_server,
        ACCEPT_ORDER_PATH_FOR_MOCK_REQUESTS,
        json!({ "order_id": "A1" }),
        200,
        json!({ "accepted": true }),
        1,
    )
    .await;
    mock_json_post(
        &fixture.mock_server,
        ACCEPT_ORDER_PATH_FOR_MOCK_REQUESTS,
        json!({ "order_id": "B2" }),
        200,
        json!({ "accepted": true }),
        1,
    )
    .await;
    let (client, navigator) = recording_client(&fixture);

    let first = client.accept_order(OrderId::from("A1"));
    let second = client.accept_order(OrderId::from("B2"));
    let (first, second) = tokio::join!(first, second);

    assert!(matches!(first.unwrap(), AcceptanceOutcome::Succeeded { location, .. } if location == "/driver_ongoing_ride/A1"));
    assert!(matches!(second.unwrap(), AcceptanceOutcome::Succeeded { location, .. } if location == "/driver_ongoing_ride/B2"));

    let mut visited = navigator.visited();
    visited.sort();
    assert_eq!(
        vec!["/driver_ongoing_ride/A1", "/driver_ongoing_ride/B2"],
        visited
    );
}

#[rstest]
#[tokio::test]
async fn accepting_the_same_order_twice_sends_two_requests(
    #[future] backend_fixture: BackendFixture,
) {
    let fixture = backend_fixture.await;
    Mock::given(method("POST"))
        .and(path(ACCEPT_ORDER_PATH_FOR_MOCK_REQUESTS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accepted": true })))
        .expect(2)
        .mount(&fixture.mock_server)
        .await;
    let (client, navigator) = recording_client(&fixture);

    let first = client.accept_order(OrderId::from(ORDER_ID_FOR_MOCK_REQUESTS));
    let second = client.accept_order(OrderId::from(ORDER_ID_FOR_MOCK_REQUESTS));
    let (first, second) = tokio::join!(first, second);
    first.unwrap();
    second.unwrap();

    assert_eq!(
        vec![
            json!({ "order_id": ORDER_ID_FOR_MOCK_REQUESTS }),
            json!({ "order_id": ORDER_ID_FOR_MOCK_REQUESTS })
        ],
        received_json_bodies(&fixture.mock_server).await
    );
    assert_eq!(2, navigator.visited().len());
}

#[rstest]
#[tokio::test]
async fn dropped_handle_still_completes(#[future] backend_fixture: BackendFixture) {
    let fixture = backend_fixture.await;
    mock_json_post(
        &fixture.mock_server,
        ACCEPT_ORDER_PATH_FOR_MOCK_REQUESTS,
        json!({ "order_id": ORDER_ID_FOR_MOCK_REQUESTS }),
        200,
        json!({ "accepted": true }),
        1,
    )
    .await;

    let navigator = Arc::new(LocationNavigator::new(
        fixture.config.origin(),
        "/driver_home",
    ));
    let mut location = navigator.subscribe();
    let client = OrderAcceptanceClient::new(fixture.driver_api.clone(), navigator.clone());

    drop(client.accept_order(OrderId::from(ORDER_ID_FOR_MOCK_REQUESTS)));

    location.changed().await.unwrap();
    assert!(location
        .borrow()
        .ends_with("/driver_ongoing_ride/ORD-42"));
}
