use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use super::error::{Operation, TagsError};
use super::transport::{ApiResponse, Method, RawResponse, Transport, TransportError};
use super::types::{AnnotatedTag, CreateTagRequest, TagSummary};

/// Tag endpoints of one repository.
///
/// Identifiers go into request paths as given; the service decides whether
/// they are valid.
pub struct TagsHandler<'t, T: Transport> {
    transport: &'t T,
    owner: String,
    repo: String,
}

impl<'t, T: Transport> TagsHandler<'t, T> {
    pub fn new(transport: &'t T, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            transport,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Lists the repository's tags in the order the service returns them.
    pub async fn list_tags(&self) -> Result<ApiResponse<Vec<TagSummary>>, TagsError> {
        let operation = Operation::ListTags {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
        };
        let path = format!("repos/{}/{}/tags", self.owner, self.repo);

        self.send(operation, Method::Get, &path, None).await
    }

    /// Fetches a git tag object by SHA.
    ///
    /// The service answers 404 when the SHA is not a tag object (or when the
    /// endpoint is gone); check [`TagsError::is_not_found`].
    pub async fn get_tag(&self, sha: &str) -> Result<ApiResponse<AnnotatedTag>, TagsError> {
        let operation = Operation::GetTag {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            sha: sha.to_string(),
        };
        let path = format!("repos/{}/{}/git/tags/{}", self.owner, self.repo, sha);

        self.send(operation, Method::Get, &path, None).await
    }

    /// Creates a tag object. This does not create a ref; point a
    /// `refs/tags/...` reference at the returned SHA to make it visible.
    pub async fn create_tag(
        &self,
        request: &CreateTagRequest,
    ) -> Result<ApiResponse<AnnotatedTag>, TagsError> {
        let operation = Operation::CreateTag {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
        };
        let body = match serde_json::to_value(request) {
            Ok(body) => body,
            Err(source) => return Err(TagsError::RequestConstruction { operation, source }),
        };
        let path = format!("repos/{}/{}/git/tags", self.owner, self.repo);

        self.send(operation, Method::Post, &path, Some(body)).await
    }

    async fn send<R: DeserializeOwned>(
        &self,
        operation: Operation,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse<R>, TagsError> {
        let request = self.transport.new_request(method, path, body);
        debug!(%method, path = %request.path, "sending request");

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(source) => {
                return Err(TagsError::Transport {
                    operation,
                    source,
                    response: None,
                })
            }
        };

        debug!(status = response.meta.status, "received response");
        decode(operation, response)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn decode<R: DeserializeOwned>(
    operation: Operation,
    response: RawResponse,
) -> Result<ApiResponse<R>, TagsError> {
    let RawResponse { meta, body } = response;

    if !meta.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|err| err.message);
        warn!(status = meta.status, message = ?message, "{} rejected", operation);

        return Err(TagsError::Transport {
            operation,
            source: TransportError::Status {
                status: meta.status,
                message,
            },
            response: Some(meta),
        });
    }

    match serde_json::from_str(&body) {
        Ok(value) => Ok(ApiResponse { value, meta }),
        Err(source) => Err(TagsError::Decode {
            operation,
            source,
            response: meta,
        }),
    }
}
