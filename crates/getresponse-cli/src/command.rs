/*
[INPUT]:  Parsed subcommand and query flags
[OUTPUT]: One GetResponse API call and its JSON response
[POS]:    Command layer - maps subcommands onto client resource paths
[UPDATE]: When adding subcommands or query flags
*/

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use getresponse_client::http::{
    CAMPAIGNS, CONTACTS, CUSTOM_FIELDS, FROM_FIELDS, NEWSLETTERS, SEARCH_CONTACTS, resource_path,
};
use getresponse_client::{GetResponseClient, QueryParams};
use serde_json::Value;
use tracing::debug;

/// Search, sort and paging flags shared by list commands
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Search condition `field=value`, rendered as `query[field]=value`
    #[arg(long = "query", value_name = "FIELD=VALUE")]
    pub query: Vec<String>,
    /// Sort condition `field=asc|desc`
    #[arg(long = "sort", value_name = "FIELD=ORDER")]
    pub sort: Vec<String>,
    /// Comma separated list of fields to return
    #[arg(long = "fields", value_name = "A,B")]
    pub fields: Option<String>,
    #[arg(long = "page")]
    pub page: Option<u32>,
    #[arg(long = "per-page")]
    pub per_page: Option<u32>,
    /// Match search values exactly instead of by substring
    #[arg(long = "exact-match")]
    pub exact_match: bool,
}

impl QueryArgs {
    pub fn to_params(&self) -> Result<QueryParams> {
        let mut params = QueryParams::new();
        for expr in &self.query {
            params = params.query_expr(expr).context("invalid --query")?;
        }
        for expr in &self.sort {
            params = params.sort_expr(expr).context("invalid --sort")?;
        }
        if let Some(fields) = &self.fields {
            params = params.fields(fields.split(','));
        }
        if let Some(page) = self.page {
            params = params.page(page);
        }
        if let Some(per_page) = self.per_page {
            params = params.per_page(per_page);
        }
        if self.exact_match {
            params = params.additional_flags("exactMatch");
        }
        Ok(params)
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List campaigns, optionally filtered by name
    Campaigns {
        #[arg(long = "name")]
        name: Option<String>,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Show one campaign
    Campaign { id: String },
    /// List contacts of a campaign
    CampaignContacts {
        id: String,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// List contacts
    Contacts {
        #[command(flatten)]
        query: QueryArgs,
    },
    /// List from-fields (sender addresses)
    FromFields {
        #[command(flatten)]
        query: QueryArgs,
    },
    /// List custom fields
    CustomFields {
        #[command(flatten)]
        query: QueryArgs,
    },
    /// List newsletters
    Newsletters {
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Show one newsletter
    Newsletter { id: String },
    /// List saved contact searches
    Segments {
        #[command(flatten)]
        query: QueryArgs,
    },
}

impl Command {
    /// API path and query parameters this command requests.
    ///
    /// Both `--dry-run` and `execute` go through this mapping.
    pub fn endpoint(&self) -> Result<(String, QueryParams)> {
        let endpoint = match self {
            Command::Campaigns { name, query } => {
                let mut params = QueryParams::new();
                if let Some(name) = name {
                    params = params.query("name", name.as_str());
                }
                (CAMPAIGNS.to_string(), params.extend(&query.to_params()?))
            }
            Command::Campaign { id } => (resource_path(CAMPAIGNS, id)?, QueryParams::new()),
            Command::CampaignContacts { id, query } => (
                format!("{}/contacts", resource_path(CAMPAIGNS, id)?),
                query.to_params()?,
            ),
            Command::Contacts { query } => (CONTACTS.to_string(), query.to_params()?),
            Command::FromFields { query } => (FROM_FIELDS.to_string(), query.to_params()?),
            Command::CustomFields { query } => (CUSTOM_FIELDS.to_string(), query.to_params()?),
            Command::Newsletters { query } => (NEWSLETTERS.to_string(), query.to_params()?),
            Command::Newsletter { id } => (resource_path(NEWSLETTERS, id)?, QueryParams::new()),
            Command::Segments { query } => (SEARCH_CONTACTS.to_string(), query.to_params()?),
        };
        Ok(endpoint)
    }

    /// URL the command would request, without calling the API
    pub fn url(&self, client: &GetResponseClient) -> Result<String> {
        let (path, params) = self.endpoint()?;
        Ok(client.endpoint_url(&path, &params)?.to_string())
    }

    pub async fn execute(&self, client: &GetResponseClient) -> Result<Value> {
        debug!(command = ?self, "executing command");
        let (path, params) = self.endpoint()?;
        let builder = client.get(&path, &params)?;
        Ok(client.send_json(builder).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use getresponse_client::{ClientConfig, Credentials};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn args(query: &[&str], sort: &[&str]) -> QueryArgs {
        QueryArgs {
            query: query.iter().map(|s| s.to_string()).collect(),
            sort: sort.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_query_args_to_params() {
        let mut query = args(&["campaignId=O"], &["createdOn=desc"]);
        query.fields = Some("name,email".to_string());
        query.per_page = Some(100);
        query.exact_match = true;

        let params = query.to_params().expect("valid args");
        assert_eq!(
            params.to_query_string(),
            "query[campaignId]=O&sort[createdOn]=desc&fields=name,email&perPage=100\
             &additionalFlags=exactMatch"
        );
    }

    #[test]
    fn test_invalid_sort_flag() {
        let err = args(&[], &["createdOn"]).to_params().expect_err("missing order");
        assert!(err.to_string().contains("invalid --sort"));
    }

    #[test]
    fn test_campaigns_by_name_endpoint() {
        let command = Command::Campaigns {
            name: Some("main".to_string()),
            query: args(&[], &["name=asc"]),
        };
        let (path, params) = command.endpoint().expect("endpoint");
        assert_eq!(path, "/campaigns");
        assert_eq!(params.to_query_string(), "query[name]=main&sort[name]=asc");
    }

    #[tokio::test]
    async fn test_dry_run_url_matches_executed_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = GetResponseClient::with_config_and_endpoint(
            ClientConfig::default(),
            Credentials::new("key"),
            &format!("{}/v3", server.uri()),
        )
        .expect("client init");
        let commands = [
            Command::Campaigns {
                name: Some("main list".to_string()),
                query: args(&["createdOn][from]=2017-01-01"], &["name=asc"]),
            },
            Command::Campaign { id: "V".to_string() },
            Command::CampaignContacts {
                id: "a/b".to_string(),
                query: args(&["email=com"], &[]),
            },
            Command::Contacts { query: args(&[], &["createdOn=desc"]) },
            Command::FromFields { query: QueryArgs::default() },
            Command::CustomFields { query: QueryArgs::default() },
            Command::Newsletters { query: args(&["subject=hi"], &[]) },
            Command::Newsletter { id: "n1".to_string() },
            Command::Segments { query: QueryArgs::default() },
        ];

        for command in &commands {
            command.execute(&client).await.expect("execute");
        }

        let received = server.received_requests().await.expect("recording enabled");
        assert_eq!(received.len(), commands.len());
        for (command, request) in commands.iter().zip(&received) {
            let dry_run_url = command.url(&client).expect("url");
            let mut sent = request.url.path().to_string();
            if let Some(query) = request.url.query() {
                sent = format!("{sent}?{query}");
            }
            assert_eq!(
                dry_run_url.strip_prefix(server.uri().as_str()),
                Some(sent.as_str()),
                "{command:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_execute_segments() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search-contacts"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"searchContactId": "m"}])))
            .expect(1)
            .mount(&server)
            .await;

        let client = GetResponseClient::with_config_and_endpoint(
            ClientConfig::default(),
            Credentials::new("key"),
            &server.uri(),
        )
        .expect("client init");
        let command = Command::Segments {
            query: QueryArgs {
                page: Some(1),
                ..Default::default()
            },
        };

        let value = command.execute(&client).await.expect("execute");
        assert_eq!(value[0]["searchContactId"], "m");
        assert!(
            command
                .url(&client)
                .expect("url")
                .ends_with("/search-contacts?page=1")
        );
    }
}
