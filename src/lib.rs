//! Theme configuration and render hooks for the Dismake documentation site.
//!
//! A documentation engine loads a [`config::ThemeConfig`] once, wraps it in a
//! [`theme::DocsTheme`], and calls the [`theme::ThemeRenderer`] hooks for
//! every page it builds.

pub mod cli;
pub mod config;
pub mod logger;
pub mod theme;
pub mod utils;
