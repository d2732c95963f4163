//! HTTP delivery of serialized payloads

use crate::error::Result;
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Posts a JSON body to an endpoint and reports the response status.
///
/// The response body is never read; any status counts as delivered.
pub trait Transport: Send + Sync {
    fn post_json(&self, endpoint: &Url, body: Vec<u8>) -> Result<u16>;
}

/// Blocking reqwest client, reused across notifications
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, endpoint: &Url, body: Vec<u8>) -> Result<u16> {
        let response = self
            .client
            .post(endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;
        Ok(response.status().as_u16())
    }
}
