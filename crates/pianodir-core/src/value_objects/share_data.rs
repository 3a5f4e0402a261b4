//! Share payload and platform share links

use serde::{Deserialize, Serialize};
use urlencoding::encode;

use super::platform::SharePlatform;

/// What gets shared: the title, a short text and the page URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
}

impl ShareData {
    /// Create a new ShareData without image or hashtags
    pub fn new(title: impl Into<String>, text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            url: url.into(),
            image: None,
            hashtags: None,
        }
    }

    /// Attach a preview image
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Attach hashtags (with or without a leading `#`)
    pub fn with_hashtags<I, S>(mut self, hashtags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hashtags = Some(hashtags.into_iter().map(Into::into).collect());
        self
    }

    /// Text placed on the clipboard: title, text and url separated by blank lines.
    /// Empty parts are skipped.
    pub fn clipboard_text(&self) -> String {
        [self.title.as_str(), self.text.as_str(), self.url.as_str()]
            .into_iter()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Hashtags joined for a share link, `#` stripped, or `None` if there are none
    fn hashtag_param(&self) -> Option<String> {
        let tags: Vec<&str> = self
            .hashtags
            .as_deref()?
            .iter()
            .map(|tag| tag.trim().trim_start_matches('#'))
            .filter(|tag| !tag.is_empty())
            .collect();

        if tags.is_empty() {
            None
        } else {
            Some(tags.join(","))
        }
    }

    /// Build the platform share link for this payload.
    ///
    /// Returns `None` for [`SharePlatform::Copy`], which has no link and is
    /// handled through the clipboard instead.
    pub fn share_url(&self, platform: SharePlatform) -> Option<String> {
        let url = encode(&self.url);
        let title = encode(&self.title);

        let link = match platform {
            SharePlatform::Facebook => {
                format!("https://www.facebook.com/sharer/sharer.php?u={url}&quote={title}")
            }
            SharePlatform::Twitter => {
                let mut link = format!("https://twitter.com/intent/tweet?text={title}&url={url}");
                if let Some(tags) = self.hashtag_param() {
                    link.push_str("&hashtags=");
                    link.push_str(&encode(&tags));
                }
                link
            }
            SharePlatform::Linkedin => format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={url}&title={title}&summary={}",
                encode(&self.text)
            ),
            SharePlatform::Reddit => {
                format!("https://reddit.com/submit?url={url}&title={title}")
            }
            SharePlatform::Whatsapp => format!(
                "https://wa.me/?text={}",
                encode(&format!("{} {}", self.title, self.url))
            ),
            SharePlatform::Telegram => {
                format!("https://t.me/share/url?url={url}&text={title}")
            }
            SharePlatform::Email => format!(
                "mailto:?subject={title}&body={}",
                encode(&format!("{}\n\n{}", self.text, self.url))
            ),
            SharePlatform::Copy => return None,
        };

        Some(link)
    }
}
