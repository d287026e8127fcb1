use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Request, Response};

/// Per-request timeout of the default transport.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

/// Sends a prepared request and hands back the raw response.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, request: Request) -> reqwest::Result<Response>;
}

#[async_trait]
impl HttpClient for reqwest::Client {
    async fn execute(&self, request: Request) -> reqwest::Result<Response> {
        reqwest::Client::execute(self, request).await
    }
}

pub fn default_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()
}
