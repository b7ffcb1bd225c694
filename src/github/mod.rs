pub mod client;
pub mod error;
pub mod tags;
pub mod transport;
pub mod types;

pub use client::GitHubClient;
pub use error::{Operation, TagsError};
pub use tags::TagsHandler;
pub use transport::{ApiResponse, Method, RawResponse, RequestDescriptor, ResponseMeta, Transport, TransportError};
pub use types::{AnnotatedTag, CommitRef, CreateTagRequest, TagSummary, TaggedObjectRef, Tagger, Timestamp};
