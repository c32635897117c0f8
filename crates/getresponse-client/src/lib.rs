/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public GetResponse client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Async client for the GetResponse v3 REST API.
//!
//! ```no_run
//! use getresponse_client::{Credentials, GetResponseClient, QueryParams, SortOrder};
//!
//! # async fn run() -> getresponse_client::Result<()> {
//! let client = GetResponseClient::new(Credentials::new("my-api-key"))?;
//! let campaigns = client
//!     .campaigns()
//!     .list(&QueryParams::new().sort("createdOn", SortOrder::Asc))
//!     .await?;
//! println!("{campaigns}");
//! # Ok(())
//! # }
//! ```

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    Campaigns,
    ClientConfig,
    Contacts,
    Credentials,
    CustomFields,
    DEFAULT_API_ENDPOINT,
    FromFields,
    GetResponseClient,
    GetResponseError,
    Newsletters,
    Result,
    SearchContacts,
};

// Re-export all types
pub use types::*;
