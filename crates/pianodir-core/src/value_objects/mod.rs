//! Value objects - immutable types that represent domain concepts

mod content_type;
mod platform;
mod popup;
mod share_data;

pub use content_type::ContentType;
pub use platform::SharePlatform;
pub use popup::PopupFeatures;
pub use share_data::ShareData;
