//! Share platform - the outbound destinations a user can share content to

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Outbound share destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    Facebook,
    Twitter,
    Linkedin,
    Reddit,
    Whatsapp,
    Telegram,
    Email,
    /// Copy to the clipboard instead of opening a share intent
    Copy,
}

impl SharePlatform {
    /// Every platform, in display order
    pub const ALL: [SharePlatform; 8] = [
        Self::Facebook,
        Self::Twitter,
        Self::Linkedin,
        Self::Reddit,
        Self::Whatsapp,
        Self::Telegram,
        Self::Email,
        Self::Copy,
    ];

    /// Wire name of the platform
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Reddit => "reddit",
            Self::Whatsapp => "whatsapp",
            Self::Telegram => "telegram",
            Self::Email => "email",
            Self::Copy => "copy",
        }
    }

    /// Human readable label for share menus
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::Linkedin => "LinkedIn",
            Self::Reddit => "Reddit",
            Self::Whatsapp => "WhatsApp",
            Self::Telegram => "Telegram",
            Self::Email => "Email",
            Self::Copy => "Copy link",
        }
    }

    /// Whether the platform is reached through a share link
    #[inline]
    pub const fn has_share_link(&self) -> bool {
        !matches!(self, Self::Copy)
    }
}

impl fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SharePlatform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| DomainError::InvalidPlatform(s.to_string()))
    }
}
