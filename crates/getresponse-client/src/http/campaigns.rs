/*
[INPUT]:  Campaign ids, search options and campaign payloads
[OUTPUT]: Campaign documents, campaign contacts, blacklists and statistics
[POS]:    HTTP layer - campaign endpoints
[UPDATE]: When adding campaign endpoints or statistics reports
*/

use serde_json::Value;

use crate::http::client::{join_ids, resource_path};
use crate::http::{GetResponseClient, Result};
use crate::types::{BlacklistUpdate, CampaignUpdate, NewCampaign, QueryParams};

pub const CAMPAIGNS: &str = "/campaigns";

/// Campaign (contact list) endpoints
#[derive(Debug, Clone, Copy)]
pub struct Campaigns<'a> {
    client: &'a GetResponseClient,
}

impl GetResponseClient {
    pub fn campaigns(&self) -> Campaigns<'_> {
        Campaigns { client: self }
    }
}

impl Campaigns<'_> {
    /// GET /campaigns
    pub async fn list(&self, params: &QueryParams) -> Result<Value> {
        let builder = self.client.get(CAMPAIGNS, params)?;
        self.client.send_json(builder).await
    }

    /// GET /campaigns?query[name]={name}
    pub async fn list_by_name(&self, name: &str, params: &QueryParams) -> Result<Value> {
        let query = QueryParams::new().query("name", name).extend(params);
        let builder = self.client.get(CAMPAIGNS, &query)?;
        self.client.send_json(builder).await
    }

    /// GET /campaigns/{campaign_id}
    pub async fn get(&self, campaign_id: &str) -> Result<Value> {
        let path = resource_path(CAMPAIGNS, campaign_id)?;
        let builder = self.client.get(&path, &QueryParams::new())?;
        self.client.send_json(builder).await
    }

    /// POST /campaigns
    pub async fn create(&self, campaign: &NewCampaign) -> Result<Value> {
        let builder = self.client.post(CAMPAIGNS, campaign)?;
        self.client.send_json(builder).await
    }

    /// POST /campaigns/{campaign_id}
    pub async fn update(&self, campaign_id: &str, update: &CampaignUpdate) -> Result<Value> {
        let path = resource_path(CAMPAIGNS, campaign_id)?;
        let builder = self.client.post(&path, update)?;
        self.client.send_json(builder).await
    }

    /// GET /campaigns/{campaign_id}/contacts
    pub async fn contacts(&self, campaign_id: &str, params: &QueryParams) -> Result<Value> {
        let path = format!("{}/contacts", resource_path(CAMPAIGNS, campaign_id)?);
        let builder = self.client.get(&path, params)?;
        self.client.send_json(builder).await
    }

    /// GET /campaigns/{campaign_id}/blacklists?query[mask]={mask}
    pub async fn blacklist(&self, campaign_id: &str, mask: &str) -> Result<Value> {
        let path = format!("{}/blacklists", resource_path(CAMPAIGNS, campaign_id)?);
        let query = QueryParams::new().query("mask", mask);
        let builder = self.client.get(&path, &query)?;
        self.client.send_json(builder).await
    }

    /// POST /campaigns/{campaign_id}/blacklists
    ///
    /// Replaces the blacklist with `masks` (emails or domains).
    pub async fn update_blacklist<S: AsRef<str>>(
        &self,
        campaign_id: &str,
        masks: &[S],
    ) -> Result<Value> {
        let path = format!("{}/blacklists", resource_path(CAMPAIGNS, campaign_id)?);
        let body = BlacklistUpdate {
            masks: masks.iter().map(|m| m.as_ref().to_string()).collect(),
        };
        let builder = self.client.post(&path, &body)?;
        self.client.send_json(builder).await
    }

    /// GET /campaigns/statistics/list-size
    pub async fn statistics_list_size<S: AsRef<str>>(
        &self,
        campaign_ids: &[S],
        params: &QueryParams,
    ) -> Result<Value> {
        self.statistics("list-size", campaign_ids, params).await
    }

    /// GET /campaigns/statistics/locations
    pub async fn statistics_locations<S: AsRef<str>>(
        &self,
        campaign_ids: &[S],
        params: &QueryParams,
    ) -> Result<Value> {
        self.statistics("locations", campaign_ids, params).await
    }

    /// GET /campaigns/statistics/origins
    pub async fn statistics_origins<S: AsRef<str>>(
        &self,
        campaign_ids: &[S],
        params: &QueryParams,
    ) -> Result<Value> {
        self.statistics("origins", campaign_ids, params).await
    }

    /// GET /campaigns/statistics/removals
    pub async fn statistics_removals<S: AsRef<str>>(
        &self,
        campaign_ids: &[S],
        params: &QueryParams,
    ) -> Result<Value> {
        self.statistics("removals", campaign_ids, params).await
    }

    /// GET /campaigns/statistics/subscriptions
    pub async fn statistics_subscriptions<S: AsRef<str>>(
        &self,
        campaign_ids: &[S],
        params: &QueryParams,
    ) -> Result<Value> {
        self.statistics("subscriptions", campaign_ids, params).await
    }

    /// GET /campaigns/statistics/balance
    pub async fn statistics_balance<S: AsRef<str>>(
        &self,
        campaign_ids: &[S],
        params: &QueryParams,
    ) -> Result<Value> {
        self.statistics("balance", campaign_ids, params).await
    }

    /// GET /campaigns/statistics/summary
    pub async fn statistics_summary<S: AsRef<str>>(&self, campaign_ids: &[S]) -> Result<Value> {
        self.statistics("summary", campaign_ids, &QueryParams::new()).await
    }

    async fn statistics<S: AsRef<str>>(
        &self,
        report: &str,
        campaign_ids: &[S],
        params: &QueryParams,
    ) -> Result<Value> {
        let query = QueryParams::new()
            .query("campaignId", join_ids("campaign", campaign_ids)?)
            .extend(params);
        let path = format!("{CAMPAIGNS}/statistics/{report}");
        let builder = self.client.get(&path, &query)?;
        self.client.send_json(builder).await
    }
}
