use std::time::Duration;

use super::client::HttpClient;
use async_trait::async_trait;

/// Total budget for one request, connect through body.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self(client))
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn get(&self, url: &str) -> reqwest::Result<reqwest::Response> {
        self.0.get(url).send().await
    }
}
