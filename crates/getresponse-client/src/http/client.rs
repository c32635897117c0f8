/*
[INPUT]:  HTTP configuration (endpoint, timeouts, API credentials)
[OUTPUT]: Configured reqwest client with GetResponse auth headers
[POS]:    HTTP layer - core client implementation and request helpers
[UPDATE]: When adding connection options or changing request/response handling
*/

use std::fmt;
use std::time::Duration;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::{GetResponseError, Result};
use crate::types::QueryParams;

/// Default endpoint for regular GetResponse accounts.
///
/// GetResponse 360 accounts use `https://api3.getresponse360.pl/v3` or
/// `https://api3.getresponse360.com/v3` together with a domain.
pub const DEFAULT_API_ENDPOINT: &str = "https://api.getresponse.com/v3";

const AUTH_TOKEN_HEADER: &str = "x-auth-token";
const DOMAIN_HEADER: &str = "x-domain";
const TIME_ZONE_HEADER: &str = "x-time-zone";

const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Credentials sent with every request
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    /// Account domain for GetResponse 360, without scheme or `www`
    pub domain: Option<String>,
    /// tz database name; responses use UTC when unset
    pub time_zone: Option<String>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            domain: None,
            time_zone: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("domain", &self.domain)
            .field("time_zone", &self.time_zone)
            .finish()
    }
}

/// Main HTTP client for the GetResponse v3 API
#[derive(Debug, Clone)]
pub struct GetResponseClient {
    http_client: Client,
    api_endpoint: String,
}

impl GetResponseClient {
    /// Create a new client for the default endpoint
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(ClientConfig::default(), credentials)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        Self::with_config_and_endpoint(config, credentials, DEFAULT_API_ENDPOINT)
    }

    /// Create a new client for an explicit endpoint (GetResponse 360, mock servers)
    pub fn with_config_and_endpoint(
        config: ClientConfig,
        credentials: Credentials,
        api_endpoint: &str,
    ) -> Result<Self> {
        let api_endpoint = api_endpoint.trim().trim_end_matches('/').to_string();
        Url::parse(&api_endpoint)?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .default_headers(default_headers(&credentials)?)
            .build()?;

        Ok(Self {
            http_client,
            api_endpoint,
        })
    }

    /// Base endpoint without trailing slash
    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    /// Build the full URL for an API path such as `/campaigns`
    pub fn endpoint_url(&self, path: &str, query: &QueryParams) -> Result<Url> {
        let mut url = format!("{}{}", self.api_endpoint, path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.to_query_string());
        }
        Ok(Url::parse(&url)?)
    }

    /// Build request builder for an API path
    pub fn request(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
    ) -> Result<RequestBuilder> {
        let url = self.endpoint_url(path, query)?;
        debug!(method = %method, url = %url, "prepared GetResponse request");
        Ok(self.http_client.request(method, url))
    }

    /// GET request builder for an API path
    pub fn get(&self, path: &str, query: &QueryParams) -> Result<RequestBuilder> {
        self.request(Method::GET, path, query)
    }

    pub(crate) fn post<B>(&self, path: &str, body: &B) -> Result<RequestBuilder>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body)?;
        Ok(self.request(Method::POST, path, &QueryParams::new())?.body(body))
    }

    pub(crate) fn delete(&self, path: &str) -> Result<RequestBuilder> {
        self.request(Method::DELETE, path, &QueryParams::new())
    }

    /// Execute a request and decode the JSON body.
    ///
    /// An empty success body yields `Value::Null`.
    pub async fn send_json(&self, builder: RequestBuilder) -> Result<Value> {
        let text = self.send_text(builder).await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Execute a request and return the raw body text.
    pub async fn send_text(&self, builder: RequestBuilder) -> Result<String> {
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(
            status = status.as_u16(),
            bytes = text.len(),
            "received GetResponse response"
        );

        if !status.is_success() {
            let err = GetResponseError::api_error(status, &text);
            warn!(status = status.as_u16(), error = %err, "GetResponse request failed");
            return Err(err);
        }
        Ok(text)
    }
}

/// `/{collection}/{id}` with `id` encoded as a single path segment.
///
/// Ids are used as given; blank ids and ids with surrounding whitespace are
/// rejected.
pub fn resource_path(collection: &str, id: &str) -> Result<String> {
    if id.trim().is_empty() {
        return Err(GetResponseError::InvalidInput(format!(
            "empty resource id for {collection}"
        )));
    }
    if id.trim() != id {
        return Err(GetResponseError::InvalidInput(format!(
            "resource id '{id}' for {collection} has surrounding whitespace"
        )));
    }
    Ok(format!(
        "{collection}/{}",
        utf8_percent_encode(id, PATH_SEGMENT_ENCODE_SET)
    ))
}

/// Comma-joined id list for `query[...Id]` filters; blank ids are dropped
pub(crate) fn join_ids<S: AsRef<str>>(kind: &str, ids: &[S]) -> Result<String> {
    let ids: Vec<&str> = ids
        .iter()
        .map(|id| id.as_ref().trim())
        .filter(|id| !id.is_empty())
        .collect();
    if ids.is_empty() {
        return Err(GetResponseError::InvalidInput(format!(
            "at least one {kind} id is required"
        )));
    }
    Ok(ids.join(","))
}

fn default_headers(credentials: &Credentials) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    let mut token = header_value("api key", &format!("api-key {}", credentials.api_key))?;
    token.set_sensitive(true);
    headers.insert(HeaderName::from_static(AUTH_TOKEN_HEADER), token);

    if let Some(domain) = credentials.domain.as_deref() {
        headers.insert(
            HeaderName::from_static(DOMAIN_HEADER),
            header_value("domain", domain)?,
        );
    }
    if let Some(time_zone) = credentials.time_zone.as_deref() {
        headers.insert(
            HeaderName::from_static(TIME_ZONE_HEADER),
            header_value("time zone", time_zone)?,
        );
    }
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| GetResponseError::Config(format!("invalid {name} header value: {e}")))
}
