/*
[INPUT]:  HTTP client configuration and GetResponse API resources
[OUTPUT]: Raw JSON responses from the REST API
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new resources or changing client behavior
*/

pub mod campaigns;
pub mod client;
pub mod contacts;
pub mod custom_fields;
pub mod error;
pub mod from_fields;
pub mod newsletters;
pub mod search_contacts;

pub use error::{GetResponseError, Result};

pub use campaigns::{CAMPAIGNS, Campaigns};
pub use client::{
    ClientConfig, Credentials, DEFAULT_API_ENDPOINT, GetResponseClient, resource_path,
};
pub use contacts::{CONTACTS, Contacts};
pub use custom_fields::{CUSTOM_FIELDS, CustomFields};
pub use from_fields::{FROM_FIELDS, FromFields};
pub use newsletters::{NEWSLETTERS, Newsletters};
pub use search_contacts::{SEARCH_CONTACTS, SearchContacts};
