// src/core/net.rs

// Blocking HTTPS GET. One client per adapter, shared by all fetch workers.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::options::SourceOptions;
use crate::error::SourceError;

pub fn build_client(opts: &SourceOptions) -> Result<Client, SourceError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(opts.timeout_secs))
        .user_agent(opts.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// GET `url` with `query` appended and return the body. Non-2xx is an error.
pub fn http_get(client: &Client, url: &str, query: &[(&str, &str)]) -> Result<String, SourceError> {
    let resp = client.get(url).query(query).send()?;
    let status = resp.status();
    debug!(url = %resp.url(), status = status.as_u16(), "portal response");

    if !status.is_success() {
        return Err(SourceError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(resp.text()?)
}
