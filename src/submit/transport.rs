use super::{HttpResponse, Transport};
use crate::error::TransportError;
use crate::validate::UserRecord;
use reqwest::blocking::Client;
use tracing::warn;
use url::Url;

/// [`Transport`] backed by a blocking reqwest client with default timeouts.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("usercreate/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn post_json(&self, url: &Url, user: &UserRecord) -> Result<HttpResponse, TransportError> {
        let resp = self
            .client
            .post(url.clone())
            .json(user)
            .send()
            .map_err(|e| TransportError {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = resp.status().as_u16();
        // the status already decides the outcome; a lost body only costs log detail
        let body = resp.text().unwrap_or_else(|e| {
            warn!(%url, status, "could not read response body: {}", e);
            String::new()
        });

        Ok(HttpResponse { status, body })
    }
}
