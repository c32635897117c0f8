/*
[INPUT]:  Custom field ids, search options and custom field definitions
[OUTPUT]: Custom field documents
[POS]:    HTTP layer - custom field endpoints
[UPDATE]: When adding custom field endpoints
*/

use serde_json::Value;

use crate::http::client::resource_path;
use crate::http::{GetResponseClient, Result};
use crate::types::{CustomFieldUpdate, NewCustomField, QueryParams};

pub const CUSTOM_FIELDS: &str = "/custom-fields";

#[derive(Debug, Clone, Copy)]
pub struct CustomFields<'a> {
    client: &'a GetResponseClient,
}

impl GetResponseClient {
    pub fn custom_fields(&self) -> CustomFields<'_> {
        CustomFields { client: self }
    }
}

impl CustomFields<'_> {
    /// GET /custom-fields
    pub async fn list(&self, params: &QueryParams) -> Result<Value> {
        let builder = self.client.get(CUSTOM_FIELDS, params)?;
        self.client.send_json(builder).await
    }

    /// GET /custom-fields/{custom_field_id}
    pub async fn get(&self, custom_field_id: &str) -> Result<Value> {
        let path = resource_path(CUSTOM_FIELDS, custom_field_id)?;
        let builder = self.client.get(&path, &QueryParams::new())?;
        self.client.send_json(builder).await
    }

    /// POST /custom-fields
    pub async fn create(&self, field: &NewCustomField) -> Result<Value> {
        let builder = self.client.post(CUSTOM_FIELDS, field)?;
        self.client.send_json(builder).await
    }

    /// POST /custom-fields/{custom_field_id}
    ///
    /// Only `hidden` and `values` can change once a field exists.
    pub async fn update(&self, custom_field_id: &str, update: &CustomFieldUpdate) -> Result<Value> {
        let path = resource_path(CUSTOM_FIELDS, custom_field_id)?;
        let builder = self.client.post(&path, update)?;
        self.client.send_json(builder).await
    }

    /// DELETE /custom-fields/{custom_field_id}
    pub async fn delete(&self, custom_field_id: &str) -> Result<String> {
        let path = resource_path(CUSTOM_FIELDS, custom_field_id)?;
        let builder = self.client.delete(&path)?;
        self.client.send_text(builder).await
    }
}
