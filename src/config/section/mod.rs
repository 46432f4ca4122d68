//! Configuration section definitions.

pub mod banner;
pub mod footer;
pub mod head;
pub mod links;
pub mod logo;
pub mod seo;

pub use banner::{BannerConfig, BannerText};
pub use footer::FooterConfig;
pub use head::HeadConfig;
pub use links::{ChatConfig, ProjectConfig};
pub use logo::{LogoConfig, LogoImage};
pub use seo::{SeoConfig, TITLE_PLACEHOLDER};
