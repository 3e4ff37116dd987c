//! Domain DTOs for the blog API.
//!
//! # Design
//! Field names follow the backend's camelCase JSON (`coverImage`). Dates live
//! in memory as `DateTime<Utc>` so newest-first ordering is a plain compare,
//! and go back on the wire in the millisecond `...000Z` form the backend
//! stores. Ids are accepted as numbers or digit strings because JSON-server
//! 1.x writes string ids; they are always sent as numbers.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A single blog post returned by the API or the in-memory store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: u64,
    pub title: String,
    pub category: Vec<String>,
    pub description: String,
    #[serde(serialize_with = "serialize_date")]
    pub date: DateTime<Utc>,
    pub cover_image: String,
    /// Paragraphs are separated by blank lines.
    pub content: String,
}

/// Caller-supplied fields for a new post. `id` and `date` are assigned at
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlog {
    pub title: String,
    pub category: Vec<String>,
    pub description: String,
    pub cover_image: String,
    pub content: String,
}

impl CreateBlog {
    pub fn into_post(self, id: u64, date: DateTime<Utc>) -> BlogPost {
        BlogPost {
            id,
            title: self.title,
            category: self.category,
            description: self.description,
            date,
            cover_image: self.cover_image,
            content: self.content,
        }
    }
}

/// POST body for creating a post remotely: the input plus its creation date.
#[derive(Debug, Serialize)]
pub struct NewBlog<'a> {
    #[serde(flatten)]
    pub input: &'a CreateBlog,
    #[serde(serialize_with = "serialize_date")]
    pub date: DateTime<Utc>,
}

fn serialize_date<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid blog id `{text}`"))),
    }
}
