use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Request, Response, StatusCode, Url};

use super::client::{default_client, HttpClient};
use super::models::{decode_txt_records, TxtRecordCreate};
use crate::config::Config;
use crate::error::{Error, Operation, Result};

/// Client for the Active24 DNS REST API.
pub struct Active24Client<C = reqwest::Client> {
    config: Config,
    client: C,
}

impl Active24Client {
    /// Client backed by a `reqwest` transport with the fixed request timeout.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::with_client(config, default_client()?))
    }
}

impl<C: HttpClient> Active24Client<C> {
    pub fn with_client(config: Config, client: C) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying transport.
    pub fn http(&self) -> &C {
        &self.client
    }

    /// `POST /dns/{domain}/txt/v1`. Succeeds only on 204.
    pub async fn create_txt_record(
        &self,
        domain: &str,
        name: &str,
        text: &str,
        ttl: u32,
    ) -> Result<()> {
        let payload = serde_json::to_vec(&TxtRecordCreate { name, text, ttl })?;
        let request =
            self.build_request(Method::POST, &["dns", domain, "txt", "v1"], Some(payload))?;
        info!("Creating TXT record {} in {} via {}", name, domain, request.url());

        let (method, url) = (request.method().clone(), request.url().to_string());
        let response = self.client.execute(request).await?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(()),
            StatusCode::BAD_REQUEST => Err(Error::Validation),
            _ => Err(api_error(Operation::CreateRecord, method, url, response).await),
        }
    }

    /// Hash ids of the TXT records in `domain` named exactly `name`, in listing order.
    pub async fn get_domain_hash_ids(&self, domain: &str, name: &str) -> Result<Vec<String>> {
        let request = self.build_request(Method::GET, &["dns", domain, "records", "v1"], None)?;
        let (method, url) = (request.method().clone(), request.url().to_string());
        let response = self.client.execute(request).await?;

        if response.status() != StatusCode::OK {
            return Err(api_error(Operation::ListRecords, method, url, response).await);
        }

        let body = response.bytes().await?;
        let records = decode_txt_records(&body, name)?;
        debug!("Found {} TXT record(s) named {} in {}", records.len(), name, domain);

        Ok(records.into_iter().map(|record| record.hash_id).collect())
    }

    /// `DELETE /dns/{domain}/{hash_id}/v1`. Succeeds only on 204.
    pub async fn delete_txt_record(&self, domain: &str, hash_id: &str) -> Result<()> {
        let request = self.build_request(Method::DELETE, &["dns", domain, hash_id, "v1"], None)?;
        info!("Deleting record {} in {}", hash_id, domain);

        let (method, url) = (request.method().clone(), request.url().to_string());
        let response = self.client.execute(request).await?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(()),
            StatusCode::BAD_REQUEST => Err(Error::RecordNotFound(hash_id.to_string())),
            _ => Err(api_error(Operation::DeleteRecord, method, url, response).await),
        }
    }

    fn build_request(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<Vec<u8>>,
    ) -> Result<Request> {
        let mut request = Request::new(method, self.url(segments));
        *request.headers_mut() = self.build_headers()?;
        if let Some(body) = body {
            *request.body_mut() = Some(body.into());
        }
        Ok(request)
    }

    fn build_headers(&self) -> Result<HeaderMap> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.config.api_key()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    // Segments are percent-encoded, so a hash id can never escape its path slot.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.config.endpoint().clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

async fn api_error(operation: Operation, method: Method, url: String, response: Response) -> Error {
    match response.status() {
        StatusCode::UNAUTHORIZED => Error::Unauthorized(operation),
        StatusCode::FORBIDDEN => Error::Forbidden(operation),
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimited(operation),
        StatusCode::INTERNAL_SERVER_ERROR => Error::ServerError(operation),
        status => Error::UnexpectedResponse {
            method,
            url,
            status,
            body: response.text().await.unwrap_or_default(),
        },
    }
}
