// src/source/raceview.rs
use reqwest::blocking::Client;
use tracing::debug;

use super::{ResultSource, SourcePage};
use crate::config::options::SourceOptions;
use crate::core::net;
use crate::error::SourceError;
use crate::specs::raceview::parse_results_page;

/// Live adapter: runs the portal's name search over HTTPS and reads the
/// results table from the returned page.
pub struct RaceviewSource {
    client: Client,
    url: String,
    query_param: String,
}

impl RaceviewSource {
    pub fn new(opts: &SourceOptions) -> Result<Self, SourceError> {
        Ok(Self {
            client: net::build_client(opts)?,
            url: opts.search_url(),
            query_param: opts.query_param.clone(),
        })
    }
}

impl ResultSource for RaceviewSource {
    fn fetch(&self, name: &str) -> Result<SourcePage, SourceError> {
        debug!(runner = name, url = %self.url, "searching portal");
        let doc = net::http_get(&self.client, &self.url, &[(self.query_param.as_str(), name)])?;
        parse_results_page(&doc)
    }
}
