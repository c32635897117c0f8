/*
[INPUT]:  From-field ids and sender payloads
[OUTPUT]: From-field (sender address) documents
[POS]:    HTTP layer - from-field endpoints
[UPDATE]: When adding from-field endpoints
*/

use serde_json::Value;

use crate::http::client::resource_path;
use crate::http::{GetResponseClient, Result};
use crate::types::{NewFromField, QueryParams};

pub const FROM_FIELDS: &str = "/from-fields";

/// Sender address endpoints
#[derive(Debug, Clone, Copy)]
pub struct FromFields<'a> {
    client: &'a GetResponseClient,
}

impl GetResponseClient {
    pub fn from_fields(&self) -> FromFields<'_> {
        FromFields { client: self }
    }
}

impl FromFields<'_> {
    /// GET /from-fields
    pub async fn list(&self, params: &QueryParams) -> Result<Value> {
        let builder = self.client.get(FROM_FIELDS, params)?;
        self.client.send_json(builder).await
    }

    /// GET /from-fields/{from_field_id}
    pub async fn get(&self, from_field_id: &str) -> Result<Value> {
        let path = resource_path(FROM_FIELDS, from_field_id)?;
        let builder = self.client.get(&path, &QueryParams::new())?;
        self.client.send_json(builder).await
    }

    /// POST /from-fields
    pub async fn create(&self, from_field: &NewFromField) -> Result<Value> {
        let builder = self.client.post(FROM_FIELDS, from_field)?;
        self.client.send_json(builder).await
    }

    /// DELETE /from-fields/{from_field_id}
    pub async fn delete(&self, from_field_id: &str) -> Result<String> {
        let path = resource_path(FROM_FIELDS, from_field_id)?;
        let builder = self.client.delete(&path)?;
        self.client.send_text(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, Credentials, GetResponseClient};
    use crate::types::{NewFromField, QueryParams};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> GetResponseClient {
        GetResponseClient::with_config_and_endpoint(
            ClientConfig::default(),
            Credentials::new("test-key"),
            &server.uri(),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_list_from_fields() {
        let server = MockServer::start().await;
        let body = json!([{"fromFieldId": "f", "email": "jan@example.com", "isDefault": "true"}]);

        Mock::given(method("GET"))
            .and(path("/from-fields"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .from_fields()
            .list(&QueryParams::new())
            .await
            .expect("list from fields failed");

        assert_eq!(response, body);
    }

    #[tokio::test]
    async fn test_create_and_delete_from_field() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/from-fields"))
            .and(body_json(json!({"name": "Jan", "email": "jan@example.com"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"fromFieldId": "f"})))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/from-fields/f"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server);
        let created = client
            .from_fields()
            .create(&NewFromField {
                name: "Jan".to_string(),
                email: "jan@example.com".to_string(),
            })
            .await
            .expect("create from field failed");
        assert_eq!(created["fromFieldId"], "f");

        let deleted = client
            .from_fields()
            .delete("f")
            .await
            .expect("delete from field failed");
        assert!(deleted.is_empty());
    }
}
