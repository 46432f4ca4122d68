//! Render command: call every theme hook for one page and print the result.

use anyhow::{Context, Result};
use std::io::{Write, stdout};

use super::{RenderArgs, RenderPart};
use crate::config::ThemeConfig;
use crate::debug;
use crate::theme::{DocsTheme, PageChrome, PageMeta, ThemeRenderer, ThemeSignal};

pub fn render_page(config: &ThemeConfig, args: &RenderArgs) -> Result<()> {
    let theme = DocsTheme::new(config);
    let output = render_output(&theme, args)?;

    let mut out = stdout().lock();
    writeln!(out, "{output}").context("Failed to write output")?;
    Ok(())
}

fn signal_for(args: &RenderArgs) -> ThemeSignal {
    if args.unmounted {
        ThemeSignal::unmounted()
    } else {
        ThemeSignal::mounted(args.theme)
    }
}

fn page_for(args: &RenderArgs) -> PageMeta {
    let page = PageMeta::new(args.title.as_str());
    match &args.path {
        Some(path) => page.with_path(path.as_str()),
        None => page,
    }
}

/// Build the text printed for `args`.
fn render_output(theme: &dyn ThemeRenderer, args: &RenderArgs) -> Result<String> {
    let page = page_for(args);
    let signal = signal_for(args);
    debug!("render"; "page {:?}, signal {:?}, part {:?}", page.title, signal, args.part);

    let chrome = PageChrome::render(theme, &page, signal);

    if args.json {
        let value = match args.part {
            RenderPart::All => serde_json::to_value(&chrome)?,
            RenderPart::Logo => serde_json::Value::from(chrome.logo),
            RenderPart::Head => serde_json::to_value(&chrome.head)?,
            RenderPart::Banner => serde_json::to_value(&chrome.banner)?,
            RenderPart::Footer => serde_json::Value::from(chrome.footer),
        };
        let text = if args.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        return Ok(text);
    }

    let text = match args.part {
        RenderPart::All => [
            chrome.title_html(),
            chrome.head_html,
            chrome.banner_html,
            chrome.logo,
            chrome.footer,
        ]
        .join("\n"),
        RenderPart::Logo => chrome.logo,
        RenderPart::Head => chrome.head_html,
        RenderPart::Banner => chrome.banner_html,
        RenderPart::Footer => chrome.footer,
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::theme::FixedClock;
    use clap::Parser;

    fn args(extra: &[&str]) -> RenderArgs {
        let argv = ["dismake-docs", "render"].iter().chain(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Render { args } => args,
            _ => unreachable!(),
        }
    }

    fn render(extra: &[&str]) -> String {
        let config = ThemeConfig::default();
        let theme = DocsTheme::new(&config).with_clock(FixedClock(2025));
        render_output(&theme, &args(extra)).unwrap()
    }

    #[test]
    fn test_render_all_html() {
        let out = render(&["-t", "Getting Started"]);
        assert!(out.contains("<title") && out.contains("Getting Started | Dismake Docs"));
        assert!(out.find("<title") < out.find("og:title"));
        assert!(out.contains(r#"content="Getting Started""#));
        assert!(out.contains("MIT 2025 ©"));
        assert!(out.contains("brightness(100)"));
    }

    #[test]
    fn test_render_unmounted_logo() {
        let out = render(&["-t", "x", "--unmounted", "--part", "logo"]);
        assert!(out.contains("brightness(0)"));
        assert!(out.contains("<strong"));
    }

    #[test]
    fn test_render_footer_json() {
        let out = render(&["-t", "x", "--part", "footer", "--json"]);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value.as_str().unwrap().contains("2025 ©"));
    }

    #[test]
    fn test_render_banner_json() {
        let out = render(&["-t", "x", "--part", "banner", "-j"]);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["key"], "dismake-dev");
        assert_eq!(value["dismissible"], true);
    }

    #[test]
    fn test_render_edit_link() {
        let out = render(&["-t", "Intro", "-p", "guide/intro.mdx", "--json", "--pretty"]);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["edit_link"].as_str().unwrap().ends_with("/docs/pages/guide/intro.mdx"));
    }
}
