/*
[INPUT]:  API_KEY, API_ENDPOINT, X_DOMAIN environment variables
[OUTPUT]: Campaign list, contacts of the first campaign and its list-size statistics
[POS]:    Examples - campaign queries
[UPDATE]: When campaign endpoints change
*/

use getresponse_client::*;

/// Example: list campaigns and drill into the first one
#[tokio::main]
async fn main() {
    println!("=== GetResponse Campaigns Example ===\n");

    let client = match client_from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let campaigns = match client
        .campaigns()
        .list(&QueryParams::new().sort("createdOn", SortOrder::Asc))
        .await
    {
        Ok(campaigns) => campaigns,
        Err(e) => {
            eprintln!("✗ Listing campaigns failed: {}", e);
            return;
        }
    };
    println!("✓ Campaigns: {}\n", campaigns);

    let Some(campaign_id) = campaigns[0]["campaignId"].as_str() else {
        println!("No campaigns in this account");
        return;
    };

    let params = QueryParams::new()
        .query("email", "com")
        .sort("email", SortOrder::Asc)
        .sort("createdOn", SortOrder::Desc)
        .fields(["name", "email", "campaigns", "createdOn"]);
    match client.campaigns().contacts(campaign_id, &params).await {
        Ok(contacts) => println!("✓ Contacts of {}: {}", campaign_id, contacts),
        Err(e) => println!("✗ Error: {}", e),
    }

    let params = QueryParams::new()
        .group_by("month")
        .query_nested("createdOn", "from", "2017-01-01")
        .fields(["totalSubscribers", "addedSubscribers"]);
    match client
        .campaigns()
        .statistics_list_size(&[campaign_id], &params)
        .await
    {
        Ok(stats) => println!("✓ List size: {}", stats),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Campaigns example complete");
}

fn client_from_env() -> Result<GetResponseClient> {
    let api_key = std::env::var("API_KEY")
        .map_err(|_| GetResponseError::Config("API_KEY is not set".to_string()))?;
    let endpoint =
        std::env::var("API_ENDPOINT").unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string());

    let mut credentials = Credentials::new(api_key);
    if let Ok(domain) = std::env::var("X_DOMAIN") {
        credentials = credentials.with_domain(domain);
    }
    GetResponseClient::with_config_and_endpoint(ClientConfig::default(), credentials, &endpoint)
}
