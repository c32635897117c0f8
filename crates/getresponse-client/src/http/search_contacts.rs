/*
[INPUT]:  Saved search (segment) ids and search options
[OUTPUT]: Saved search documents and the contacts they match
[POS]:    HTTP layer - search-contacts endpoints
[UPDATE]: When adding saved search endpoints
*/

use serde_json::Value;

use crate::http::client::resource_path;
use crate::http::{GetResponseClient, Result};
use crate::types::QueryParams;

pub const SEARCH_CONTACTS: &str = "/search-contacts";

/// Saved contact searches (segments)
#[derive(Debug, Clone, Copy)]
pub struct SearchContacts<'a> {
    client: &'a GetResponseClient,
}

impl GetResponseClient {
    pub fn search_contacts(&self) -> SearchContacts<'_> {
        SearchContacts { client: self }
    }
}

impl SearchContacts<'_> {
    /// GET /search-contacts
    pub async fn list(&self, params: &QueryParams) -> Result<Value> {
        let builder = self.client.get(SEARCH_CONTACTS, params)?;
        self.client.send_json(builder).await
    }

    /// GET /search-contacts/{search_contact_id}
    pub async fn get(&self, search_contact_id: &str) -> Result<Value> {
        let path = resource_path(SEARCH_CONTACTS, search_contact_id)?;
        let builder = self.client.get(&path, &QueryParams::new())?;
        self.client.send_json(builder).await
    }

    /// GET /search-contacts/{search_contact_id}/contacts
    pub async fn contacts(&self, search_contact_id: &str, params: &QueryParams) -> Result<Value> {
        let path = format!("{}/contacts", resource_path(SEARCH_CONTACTS, search_contact_id)?);
        let builder = self.client.get(&path, params)?;
        self.client.send_json(builder).await
    }

    /// DELETE /search-contacts/{search_contact_id}
    pub async fn delete(&self, search_contact_id: &str) -> Result<String> {
        let path = resource_path(SEARCH_CONTACTS, search_contact_id)?;
        let builder = self.client.delete(&path)?;
        self.client.send_text(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, Credentials, GetResponseClient};
    use crate::types::QueryParams;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_segments_and_their_contacts() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search-contacts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"searchContactId": "m", "name": "active"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/search-contacts/m/contacts"))
            .and(query_param("perPage", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"contactId": "x"}])))
            .expect(1)
            .mount(&server)
            .await;

        let client = GetResponseClient::with_config_and_endpoint(
            ClientConfig::default(),
            Credentials::new("test-key"),
            &server.uri(),
        )
        .expect("client init");

        let segments = client
            .search_contacts()
            .list(&QueryParams::new())
            .await
            .expect("list segments failed");
        let segment_id = segments[0]["searchContactId"].as_str().expect("segment id");

        let contacts = client
            .search_contacts()
            .contacts(segment_id, &QueryParams::new().per_page(50))
            .await
            .expect("segment contacts failed");

        assert_eq!(contacts, json!([{"contactId": "x"}]));
    }
}
