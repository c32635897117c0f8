/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for getresponse-client tests

use getresponse_client::{ClientConfig, Credentials, GetResponseClient};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "0123456789abcdef";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at `{server}/v3`, mirroring the real endpoint layout
pub fn client_for(server: &MockServer, credentials: Credentials) -> GetResponseClient {
    GetResponseClient::with_config_and_endpoint(
        ClientConfig::default(),
        credentials,
        &format!("{}/v3", server.uri()),
    )
    .expect("client init")
}

/// Canned body of `GET /campaigns`
pub fn campaigns_fixture() -> serde_json::Value {
    serde_json::json!([
        {
            "campaignId": "V",
            "name": "main_list",
            "techName": "main_list",
            "languageCode": "EN",
            "isDefault": "true",
            "createdOn": "2017-01-01T10:00:00+0000",
            "href": "https://api.getresponse.com/v3/campaigns/V"
        }
    ])
}
