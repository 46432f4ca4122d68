//! `[logo]` section configuration.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Navbar logo: a bold text label with an optional image in front of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Label rendered in `<strong>`.
    pub text: String,

    /// Image shown before the label.
    pub image: LogoImage,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            text: "Dismake".into(),
            image: LogoImage::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoImage {
    pub enable: bool,
    pub src: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
    /// Invert the image with a CSS filter so it stays visible on both themes.
    pub adapt_to_theme: bool,
}

impl Default for LogoImage {
    fn default() -> Self {
        Self {
            enable: true,
            src: "/logo.png".into(),
            width: 32,
            height: 32,
            alt: "Logo".into(),
            adapt_to_theme: true,
        }
    }
}

pub struct LogoFields {
    pub text: FieldPath,
    pub image_src: FieldPath,
    pub image_width: FieldPath,
    pub image_height: FieldPath,
}

impl LogoConfig {
    pub const FIELDS: LogoFields = LogoFields {
        text: FieldPath::new("logo.text"),
        image_src: FieldPath::new("logo.image.src"),
        image_width: FieldPath::new("logo.image.width"),
        image_height: FieldPath::new("logo.image.height"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() && !self.image.enable {
            diag.error_with_hint(
                Self::FIELDS.text,
                "logo has neither text nor image",
                "set `logo.text` or `logo.image.enable = true`",
            );
        }

        let image = &self.image;
        if !image.enable {
            return;
        }
        if image.src.trim().is_empty() {
            diag.error(Self::FIELDS.image_src, "image source must not be empty");
        }
        if image.width == 0 {
            diag.error(Self::FIELDS.image_width, "must be greater than 0");
        }
        if image.height == 0 {
            diag.error(Self::FIELDS.image_height, "must be greater than 0");
        }
    }
}
