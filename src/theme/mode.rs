//! Theme mode as reported by the page's theme provider.

use serde::Serialize;

/// Resolved color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Snapshot of the theme provider, passed to render hooks by the caller.
///
/// Before client hydration the provider is not mounted and has no resolved
/// mode; hooks must render their default state instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeSignal {
    pub mounted: bool,
    pub resolved: Option<ThemeMode>,
}

impl ThemeSignal {
    /// Provider not mounted yet (server render, first paint).
    pub const fn unmounted() -> Self {
        Self {
            mounted: false,
            resolved: None,
        }
    }

    pub const fn mounted(mode: ThemeMode) -> Self {
        Self {
            mounted: true,
            resolved: Some(mode),
        }
    }

    /// Mode to render with, `None` while the provider is not usable.
    pub const fn effective(&self) -> Option<ThemeMode> {
        if self.mounted { self.resolved } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmounted_ignores_resolved_mode() {
        let signal = ThemeSignal {
            mounted: false,
            resolved: Some(ThemeMode::Light),
        };
        assert_eq!(signal.effective(), None);
        assert_eq!(ThemeSignal::default(), ThemeSignal::unmounted());
    }

    #[test]
    fn test_mounted() {
        assert_eq!(
            ThemeSignal::mounted(ThemeMode::Dark).effective(),
            Some(ThemeMode::Dark)
        );
        let pending = ThemeSignal {
            mounted: true,
            resolved: None,
        };
        assert_eq!(pending.effective(), None);
    }
}
