/*
[INPUT]:  Contact ids, search options and contact payloads
[OUTPUT]: Contact documents, activities and custom field updates
[POS]:    HTTP layer - contact endpoints
[UPDATE]: When adding contact endpoints
*/

use serde_json::Value;

use crate::http::client::resource_path;
use crate::http::{GetResponseClient, Result};
use crate::types::{ContactCustomFields, ContactUpdate, NewContact, QueryParams};

pub const CONTACTS: &str = "/contacts";

#[derive(Debug, Clone, Copy)]
pub struct Contacts<'a> {
    client: &'a GetResponseClient,
}

impl GetResponseClient {
    pub fn contacts(&self) -> Contacts<'_> {
        Contacts { client: self }
    }
}

impl Contacts<'_> {
    /// GET /contacts
    pub async fn list(&self, params: &QueryParams) -> Result<Value> {
        let builder = self.client.get(CONTACTS, params)?;
        self.client.send_json(builder).await
    }

    /// GET /contacts/{contact_id}
    pub async fn get(&self, contact_id: &str) -> Result<Value> {
        let path = resource_path(CONTACTS, contact_id)?;
        let builder = self.client.get(&path, &QueryParams::new())?;
        self.client.send_json(builder).await
    }

    /// POST /contacts
    ///
    /// GetResponse queues the contact and answers `202 Accepted` with an
    /// empty body, which comes back as `Value::Null`.
    pub async fn create(&self, contact: &NewContact) -> Result<Value> {
        let builder = self.client.post(CONTACTS, contact)?;
        self.client.send_json(builder).await
    }

    /// POST /contacts/{contact_id}
    pub async fn update(&self, contact_id: &str, update: &ContactUpdate) -> Result<Value> {
        let path = resource_path(CONTACTS, contact_id)?;
        let builder = self.client.post(&path, update)?;
        self.client.send_json(builder).await
    }

    /// POST /contacts/{contact_id}/custom-fields
    ///
    /// Upserts the given values; custom fields not listed are left untouched.
    pub async fn update_custom_fields(
        &self,
        contact_id: &str,
        values: &ContactCustomFields,
    ) -> Result<Value> {
        let path = format!("{}/custom-fields", resource_path(CONTACTS, contact_id)?);
        let builder = self.client.post(&path, values)?;
        self.client.send_json(builder).await
    }

    /// GET /contacts/{contact_id}/activities
    pub async fn activities(&self, contact_id: &str, params: &QueryParams) -> Result<Value> {
        let path = format!("{}/activities", resource_path(CONTACTS, contact_id)?);
        let builder = self.client.get(&path, params)?;
        self.client.send_json(builder).await
    }

    /// DELETE /contacts/{contact_id}
    pub async fn delete(&self, contact_id: &str) -> Result<String> {
        let path = resource_path(CONTACTS, contact_id)?;
        let builder = self.client.delete(&path)?;
        self.client.send_text(builder).await
    }
}
