use serde_json::Value;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts a `POST {endpoint}` mock that only matches JSON requests carrying `expected_body`,
/// answering with `status` and `response`. The mock must be hit exactly `times` times.
pub async fn mock_json_post(
    server: &MockServer,
    endpoint: &str,
    expected_body: Value,
    status: u16,
    response: Value,
    times: u64,
) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(status).set_body_json(response))
        .expect(times)
        .mount(server)
        .await;
}

/// Mounts a `POST {endpoint}` mock answering with a raw, non JSON body.
pub async fn mock_raw_post(server: &MockServer, endpoint: &str, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Returns the bodies of every request the server received, in arrival order.
pub async fn received_json_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter_map(|request| serde_json::from_slice(&request.body).ok())
        .collect()
}
