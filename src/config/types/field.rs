//! Config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A dotted path into `theme.toml` (e.g. `banner.key`).
///
/// Each section exposes its paths through a `FIELDS` constant so diagnostics
/// never spell field names by hand:
///
/// ```ignore
/// diag.error(BannerConfig::FIELDS.key, "must not be empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Top-level table the field lives in, `root` for bare keys.
    pub fn section(&self) -> &'static str {
        self.0.split_once('.').map_or("root", |(section, _)| section)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
