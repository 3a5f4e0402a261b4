//! Popup window geometry for share links

use std::fmt;

/// Size of the popup a share link is opened in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupFeatures {
    pub width: u32,
    pub height: u32,
}

impl PopupFeatures {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for PopupFeatures {
    fn default() -> Self {
        Self::new(600, 400)
    }
}

/// Renders as a window-features string, e.g. `width=600,height=400`
impl fmt::Display for PopupFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "width={},height={}", self.width, self.height)
    }
}
