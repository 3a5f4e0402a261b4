//! Content type - the kinds of content items that can be shared

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Kind of content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Piano,
    Event,
    BlogPost,
}

impl ContentType {
    /// Wire name of the content type
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Piano => "piano",
            Self::Event => "event",
            Self::BlogPost => "blog_post",
        }
    }

    /// Path segment of the public page for this content type
    pub const fn path_segment(&self) -> &'static str {
        match self {
            Self::Piano => "pianos",
            Self::Event => "events",
            Self::BlogPost => "blog",
        }
    }

    /// Public page URL of a content item
    pub fn permalink(&self, base_url: &str, content_id: &str) -> String {
        format!(
            "{}/{}/{}",
            base_url.trim_end_matches('/'),
            self.path_segment(),
            urlencoding::encode(content_id)
        )
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "piano" => Ok(Self::Piano),
            "event" => Ok(Self::Event),
            "blog_post" => Ok(Self::BlogPost),
            _ => Err(DomainError::InvalidContentType(s.to_string())),
        }
    }
}
