// src/core/net.rs
// Blocking HTTPS GET. The body arriving in full is our "page loaded" signal.

use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;

static CLIENT: OnceCell<Client> = OnceCell::new();

#[derive(Debug)]
pub enum GetError {
    /// No complete response within the timeout.
    TimedOut,
    Failed(String),
}

fn client() -> Result<&'static Client, GetError> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GetError::Failed(format!("failed to build http client: {e}")))
    })
}

pub fn http_get(url: &str, timeout: Duration) -> Result<String, GetError> {
    let resp = client()?
        .get(url)
        .timeout(timeout)
        .send()
        .map_err(classify)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(GetError::Failed(format!("HTTP error: {status} {url}")));
    }
    resp.text().map_err(classify)
}

fn classify(e: reqwest::Error) -> GetError {
    if e.is_timeout() { GetError::TimedOut } else { GetError::Failed(e.to_string()) }
}
