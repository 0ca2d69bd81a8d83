//! Item images

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Default asset shown when an item image is missing or fails to load.
pub const DEFAULT_PLACEHOLDER: &str = "/placeholder.jpg";

/// Where an item's image should be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Served by the storefront under `/images/`.
    Remote(String),

    /// The local placeholder asset.
    Placeholder(String),
}

impl ImageRef {
    /// Resolves an item's image file name against the storefront origin.
    ///
    /// Items without an image go straight to the placeholder.
    pub fn resolve(origin: &str, image: Option<&str>, placeholder: &str) -> Self {
        match image {
            Some(filename) if !filename.is_empty() => Self::Remote(image_url(origin, filename)),
            _ => Self::Placeholder(placeholder.to_string()),
        }
    }

    /// The image to show after a failed load. Never points back at the server.
    #[must_use]
    pub fn or_placeholder(self, placeholder: &str) -> Self {
        match self {
            Self::Remote(_) => Self::Placeholder(placeholder.to_string()),
            placeholder @ Self::Placeholder(_) => placeholder,
        }
    }

    /// The URL or path to load.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Remote(url) | Self::Placeholder(url) => url,
        }
    }

    /// Whether this is the placeholder asset.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

impl Display for ImageRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// `{origin}/images/{filename}` with the file name encoded as one path segment.
pub fn image_url(origin: &str, filename: &str) -> String {
    format!(
        "{}/images/{}",
        origin.trim_end_matches('/'),
        urlencoding::encode(filename)
    )
}
