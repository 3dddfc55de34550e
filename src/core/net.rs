// src/core/net.rs
// Blocking HTTP GET. One call at a time; pacing lives in core::throttle.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::REFERER;
use serde_json::Value;
use thiserror::Error;

use crate::config::consts::{HTTP_TIMEOUT_SECS, REFERRER, USER_AGENT};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing field `{0}` in response")]
    MissingField(&'static str),

    #[error("API error: {0}")]
    Api(String),

    #[error("Scrape error: {0}")]
    Scrape(String),
}

#[derive(Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, FetchError> {
        let inner = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self { inner })
    }

    /// GET a web page as text.
    pub fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.inner.get(url).header(REFERER, REFERRER).send()?;
        Ok(check_status(resp, url)?.text()?)
    }

    /// GET a JSON document, with extra request headers.
    pub fn get_json(&self, url: &str, headers: &[(&str, &str)]) -> Result<Value, FetchError> {
        let mut req = self.inner.get(url);
        for (k, v) in headers {
            req = req.header(*k, *v);
        }
        let resp = check_status(req.send()?, url)?;
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn check_status(resp: Response, url: &str) -> Result<Response, FetchError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp)
}
