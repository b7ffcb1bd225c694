use anyhow::Result;
use async_trait::async_trait;
use octocrab::Octocrab;
use std::time::Duration;
use tracing::debug;

use super::tags::TagsHandler;
use super::transport::{Method, RawResponse, RequestDescriptor, ResponseMeta, Transport, TransportError};
use crate::config::GithubConfig;

/// [`Transport`] backed by octocrab's raw request methods.
///
/// No retries and no pagination: one request in, one response out.
pub struct GitHubClient {
    client: Octocrab,
    timeout: Option<Duration>,
}

impl GitHubClient {
    pub fn new(config: &GithubConfig) -> Result<Self> {
        let mut builder = Octocrab::builder().base_uri(config.api_url.as_str())?;
        if let Some(token) = &config.token {
            builder = builder.personal_token(token.clone());
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            timeout: config.timeout_secs.map(Duration::from_secs),
        })
    }

    pub fn tags(&self, owner: impl Into<String>, repo: impl Into<String>) -> TagsHandler<'_, Self> {
        TagsHandler::new(self, owner, repo)
    }

    async fn send(&self, request: RequestDescriptor) -> Result<RawResponse, TransportError> {
        let uri = format!("/{}", request.path.trim_start_matches('/'));

        let response = match request.method {
            Method::Get => self.client._get(uri).await,
            Method::Post => self.client._post(uri, request.body.as_ref()).await,
        }
        .map_err(|e| TransportError::Connection(Box::new(e)))?;

        let mut meta = ResponseMeta::new(response.status().as_u16());
        for (name, value) in response.headers() {
            let value = match value.to_str() {
                Ok(value) => value.to_string(),
                Err(_) => {
                    debug!(header = %name, "header value is not valid UTF-8, storing lossily");
                    String::from_utf8_lossy(value.as_bytes()).into_owned()
                }
            };
            meta.headers.push((name.as_str().to_string(), value));
        }

        let body = self
            .client
            .body_to_string(response)
            .await
            .map_err(|e| TransportError::Connection(Box::new(e)))?;

        Ok(RawResponse { meta, body })
    }
}

#[async_trait]
impl Transport for GitHubClient {
    async fn execute(&self, request: RequestDescriptor) -> Result<RawResponse, TransportError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.send(request))
                .await
                .map_err(|_| TransportError::Timeout(limit))?,
            None => self.send(request).await,
        }
    }
}
