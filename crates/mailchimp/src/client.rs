use std::fmt;
use std::future::Future;

use crate::{
    API_KEY_SEPARATOR, BASIC_AUTH_USERNAME, MailchimpError, SubscribeRequest, base_url_for,
    into_result, list_members_path,
};
use reqwest::{Method, header};
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// Operations exposed by a Mailchimp client.
pub trait MailchimpApi {
    /// Base URL every request path is appended to.
    fn base_url(&self) -> &Url;

    /// Replaces the base URL, e.g. to target a test double.
    fn set_base_url(&mut self, base_url: Url);

    /// Adds `email` to the audience list `list_id` with status `subscribed`.
    fn subscribe(
        &self,
        email: &str,
        list_id: &str,
    ) -> impl Future<Output = Result<Value, MailchimpError>> + Send;
}

/// Client for the Mailchimp Marketing API.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct MailchimpClient {
    client: reqwest::Client,
    base_url: Url,
    data_center: String,
    api_key: String,
}

impl MailchimpClient {
    /// Creates a client from an API key formatted like `xyz-us11`.
    ///
    /// The data center after the separator selects the API host. When `client`
    /// is `None` a default `reqwest::Client` is built; pass your own to control
    /// timeouts, proxies or pooling.
    pub fn new(api_key: &str, client: Option<reqwest::Client>) -> Result<Self, MailchimpError> {
        let data_center = parse_data_center(api_key)?.to_owned();
        let base_url = Url::parse(&base_url_for(&data_center))?;
        let client = match client {
            Some(client) => client,
            None => reqwest::Client::builder().build()?,
        };

        Ok(Self { client, base_url, data_center, api_key: api_key.to_owned() })
    }

    /// Base URL every request path is appended to.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Points the client at another host, e.g. a test double.
    pub fn set_base_url(&mut self, base_url: Url) {
        self.base_url = base_url;
    }

    /// Data center parsed from the API key, e.g. `us11`.
    pub fn data_center(&self) -> &str {
        &self.data_center
    }

    pub async fn subscribe(&self, email: &str, list_id: &str) -> Result<Value, MailchimpError> {
        let body = SubscribeRequest::new(email);
        self.request(Method::POST, &list_members_path(list_id), Some(&body)).await
    }

    /// Sends an authenticated request and decodes the JSON reply.
    ///
    /// `path` is appended verbatim to the base URL, so it should start with `/`.
    /// Requests without a body pass `None::<&()>`.
    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
    ) -> Result<Value, MailchimpError>
    where
        T: ?Sized + Serialize,
    {
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(MailchimpError::Serialization)?;

        let url = Url::parse(&self.endpoint(path))?;
        log::debug!("{method} {url}");

        let mut request =
            self.client.request(method, url).basic_auth(BASIC_AUTH_USERNAME, Some(&self.api_key));
        if let Some(payload) = payload {
            request = request.header(header::CONTENT_TYPE, "application/json").body(payload);
        }

        let response = request.send().await?;
        into_result(response).await
    }

    /// Concatenates the base URL and `path` without normalizing slashes,
    /// except for the `/` the `url` crate adds to a base URL with no path.
    fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.as_str();
        let base = if self.base_url.path() == "/" {
            base.strip_suffix('/').unwrap_or(base)
        } else {
            base
        };
        format!("{base}{path}")
    }
}

impl MailchimpApi for MailchimpClient {
    fn base_url(&self) -> &Url {
        Self::base_url(self)
    }

    fn set_base_url(&mut self, base_url: Url) {
        Self::set_base_url(self, base_url);
    }

    fn subscribe(
        &self,
        email: &str,
        list_id: &str,
    ) -> impl Future<Output = Result<Value, MailchimpError>> + Send {
        Self::subscribe(self, email, list_id)
    }
}

impl fmt::Debug for MailchimpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailchimpClient")
            .field("base_url", &self.base_url.as_str())
            .field("data_center", &self.data_center)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

fn parse_data_center(api_key: &str) -> Result<&str, MailchimpError> {
    match api_key.split(API_KEY_SEPARATOR).collect::<Vec<_>>().as_slice() {
        [key, dc] if !key.is_empty() && !dc.is_empty() => Ok(*dc),
        _ => Err(MailchimpError::InvalidApiKey),
    }
}
