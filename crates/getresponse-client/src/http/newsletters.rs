/*
[INPUT]:  Newsletter ids and search options
[OUTPUT]: Newsletter documents and delivery statistics
[POS]:    HTTP layer - newsletter endpoints
[UPDATE]: When adding newsletter endpoints
*/

use serde_json::Value;

use crate::http::client::{join_ids, resource_path};
use crate::http::{GetResponseClient, Result};
use crate::types::QueryParams;

pub const NEWSLETTERS: &str = "/newsletters";

#[derive(Debug, Clone, Copy)]
pub struct Newsletters<'a> {
    client: &'a GetResponseClient,
}

impl GetResponseClient {
    pub fn newsletters(&self) -> Newsletters<'_> {
        Newsletters { client: self }
    }
}

impl Newsletters<'_> {
    /// GET /newsletters
    pub async fn list(&self, params: &QueryParams) -> Result<Value> {
        let builder = self.client.get(NEWSLETTERS, params)?;
        self.client.send_json(builder).await
    }

    /// GET /newsletters/{newsletter_id}
    pub async fn get(&self, newsletter_id: &str) -> Result<Value> {
        let path = resource_path(NEWSLETTERS, newsletter_id)?;
        let builder = self.client.get(&path, &QueryParams::new())?;
        self.client.send_json(builder).await
    }

    /// GET /newsletters/statistics
    ///
    /// The API expects at least one filter such as `query[newsletterId]`.
    pub async fn statistics(&self, params: &QueryParams) -> Result<Value> {
        let builder = self.client.get(&format!("{NEWSLETTERS}/statistics"), params)?;
        self.client.send_json(builder).await
    }

    /// GET /newsletters/statistics?query[newsletterId]={ids}
    pub async fn statistics_for<S: AsRef<str>>(&self, newsletter_ids: &[S]) -> Result<Value> {
        let ids = join_ids("newsletter", newsletter_ids)?;
        self.statistics(&QueryParams::new().query("newsletterId", ids)).await
    }
}
