use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One entry of a repository's tag listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<CommitRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipball_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tarball_url: Option<String>,
}

/// The commit a tag points at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A git tag object, as returned by the get and create endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagger: Option<Tagger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<TaggedObjectRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tagger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
}

/// The object an annotated tag refers to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaggedObjectRef {
    /// Object type, usually `commit`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Payload for creating a tag object.
///
/// `tag` and `object` are required by the service; nothing here enforces that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTagRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// SHA of the object being tagged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagger: Option<Tagger>,
}

impl CreateTagRequest {
    pub fn new(tag: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            object: Some(object.into()),
            ..Default::default()
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn tagger(mut self, tagger: Tagger) -> Self {
        self.tagger = Some(tagger);
        self
    }
}

/// A point in time as the API reports it.
///
/// Accepts RFC 3339 strings and integer Unix seconds; always written back as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    pub fn into_inner(self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Timestamp(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Seconds(i64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => DateTime::parse_from_rfc3339(&text)
                .map(|dt| Timestamp(dt.with_timezone(&Utc)))
                .map_err(serde::de::Error::custom),
            Raw::Seconds(secs) => Utc
                .timestamp_opt(secs, 0)
                .single()
                .map(Timestamp)
                .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {}", secs))),
        }
    }
}

impl fmt::Display for AnnotatedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(tag) = &self.tag {
            parts.push(format!("tag: {:?}", tag));
        }
        if let Some(sha) = &self.sha {
            parts.push(format!("sha: {:?}", sha));
        }
        if let Some(url) = &self.url {
            parts.push(format!("url: {:?}", url));
        }
        if let Some(message) = &self.message {
            parts.push(format!("message: {:?}", message));
        }
        if let Some(tagger) = &self.tagger {
            let mut fields = Vec::new();
            if let Some(name) = &tagger.name {
                fields.push(format!("name: {:?}", name));
            }
            if let Some(email) = &tagger.email {
                fields.push(format!("email: {:?}", email));
            }
            if let Some(date) = &tagger.date {
                fields.push(format!("date: {}", date));
            }
            parts.push(format!("tagger: {{{}}}", fields.join(", ")));
        }
        if let Some(object) = &self.object {
            let mut fields = Vec::new();
            if let Some(kind) = &object.kind {
                fields.push(format!("type: {:?}", kind));
            }
            if let Some(sha) = &object.sha {
                fields.push(format!("sha: {:?}", sha));
            }
            if let Some(url) = &object.url {
                fields.push(format!("url: {:?}", url));
            }
            parts.push(format!("object: {{{}}}", fields.join(", ")));
        }
        write!(f, "AnnotatedTag {{{}}}", parts.join(", "))
    }
}
