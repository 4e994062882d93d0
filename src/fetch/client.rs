use async_trait::async_trait;
use reqwest::Response;

#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str) -> reqwest::Result<Response>;
}
