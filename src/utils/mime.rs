//! MIME type detection utilities.

use std::path::Path;

/// Image MIME types used by head and logo assets.
pub mod types {
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const AVIF: &str = "image/avif";
    pub const SVG: &str = "image/svg+xml";
    pub const ICO: &str = "image/x-icon";
}

/// Get MIME type for a favicon based on its extension.
///
/// Unknown or missing extensions fall back to `image/x-icon`.
pub fn for_icon(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()).map(|s| s.to_lowercase()) {
        Some(ext) => match ext.as_str() {
            "png" => types::PNG,
            "svg" => types::SVG,
            "avif" => types::AVIF,
            "webp" => types::WEBP,
            "gif" => types::GIF,
            "jpg" | "jpeg" => types::JPEG,
            _ => types::ICO,
        },
        None => types::ICO,
    }
}

/// Same as [`for_icon`], for hrefs that may carry a query or fragment.
pub fn for_icon_href(href: &str) -> &'static str {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    for_icon(Path::new(path))
}
