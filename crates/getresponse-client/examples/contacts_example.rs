/*
[INPUT]:  API_KEY, API_ENDPOINT, CAMPAIGN_ID, CONTACT_ID environment variables
[OUTPUT]: Contacts of a campaign and a custom field update
[POS]:    Examples - contact queries and custom field writes
[UPDATE]: When contact endpoints change
*/

use getresponse_client::*;

#[tokio::main]
async fn main() {
    println!("=== GetResponse Contacts Example ===\n");

    let Ok(api_key) = std::env::var("API_KEY") else {
        eprintln!("API_KEY is not set");
        return;
    };
    let endpoint =
        std::env::var("API_ENDPOINT").unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string());
    let campaign_id = std::env::var("CAMPAIGN_ID").unwrap_or_else(|_| "O".to_string());

    let client = match GetResponseClient::with_config_and_endpoint(
        ClientConfig::default(),
        Credentials::new(api_key),
        &endpoint,
    ) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let params = QueryParams::new()
        .query("campaignId", campaign_id.as_str())
        .additional_flags("exactMatch");
    match client.contacts().list(&params).await {
        Ok(contacts) => println!("✓ Contacts of campaign {}: {}", campaign_id, contacts),
        Err(e) => println!("✗ Error: {}", e),
    }

    match client.custom_fields().list(&QueryParams::new()).await {
        Ok(fields) => println!("✓ Custom fields: {}", fields),
        Err(e) => println!("✗ Error: {}", e),
    }

    if let Ok(contact_id) = std::env::var("CONTACT_ID") {
        let values = ContactCustomFields::new(vec![CustomFieldValue::new("GBaeF", ["5"])]);
        match client
            .contacts()
            .update_custom_fields(&contact_id, &values)
            .await
        {
            Ok(contact) => println!("✓ Updated contact: {}", contact),
            Err(e) => println!("✗ Error: {}", e),
        }
    }

    println!("\n✓ Contacts example complete");
}
