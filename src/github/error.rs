use std::fmt;

use super::transport::{ResponseMeta, TransportError};

/// Which call failed, with the identifiers it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ListTags { owner: String, repo: String },
    GetTag { owner: String, repo: String, sha: String },
    CreateTag { owner: String, repo: String },
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::ListTags { owner, repo } => write!(f, "list tags of {}/{}", owner, repo),
            Operation::GetTag { owner, repo, sha } => {
                write!(f, "get tag {} in {}/{}", sha, owner, repo)
            }
            Operation::CreateTag { owner, repo } => write!(f, "create tag in {}/{}", owner, repo),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TagsError {
    #[error("failed to build request to {operation}: {source}")]
    RequestConstruction {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to {operation}: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: TransportError,
        response: Option<ResponseMeta>,
    },

    #[error("failed to decode response to {operation}: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
        response: ResponseMeta,
    },
}

impl TagsError {
    pub fn operation(&self) -> &Operation {
        match self {
            TagsError::RequestConstruction { operation, .. }
            | TagsError::Transport { operation, .. }
            | TagsError::Decode { operation, .. } => operation,
        }
    }

    pub fn response(&self) -> Option<&ResponseMeta> {
        match self {
            TagsError::RequestConstruction { .. } => None,
            TagsError::Transport { response, .. } => response.as_ref(),
            TagsError::Decode { response, .. } => Some(response),
        }
    }

    /// HTTP status, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        self.response().map(|meta| meta.status)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TagsError::Transport {
                source: TransportError::Status { status: 404, .. },
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn get_tag_op() -> Operation {
        Operation::GetTag {
            owner: "octocat".to_string(),
            repo: "Hello-World".to_string(),
            sha: "deadbeef".to_string(),
        }
    }

    #[test]
    fn not_found_is_distinct_from_network_failure() {
        let not_found = TagsError::Transport {
            operation: get_tag_op(),
            source: TransportError::Status { status: 404, message: Some("Not Found".to_string()) },
            response: Some(ResponseMeta::new(404)),
        };
        let timeout = TagsError::Transport {
            operation: get_tag_op(),
            source: TransportError::Timeout(Duration::from_secs(5)),
            response: None,
        };

        assert!(not_found.is_not_found());
        assert_eq!(not_found.status(), Some(404));
        assert!(!timeout.is_not_found());
        assert_eq!(timeout.status(), None);
    }

    #[test]
    fn message_names_the_operation() {
        let err = TagsError::Transport {
            operation: get_tag_op(),
            source: TransportError::Status { status: 404, message: Some("Not Found".to_string()) },
            response: Some(ResponseMeta::new(404)),
        };

        assert_eq!(
            err.to_string(),
            "failed to get tag deadbeef in octocat/Hello-World: unexpected status 404: Not Found"
        );
    }
}
