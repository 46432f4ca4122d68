//! Footer copyright line.

use super::family::{RawElement, element, text_element};
use crate::config::FooterConfig;

/// `<span>MIT 2025 © <a href=.. target="_blank">Apptic Development</a>.</span>`
pub fn render_footer(config: &FooterConfig, year: i32) -> RawElement {
    let mut holder = text_element("a", &config.holder);
    holder.set_attr("href", &config.link);
    holder.set_attr("target", "_blank");

    let mut line = element("span");
    line.push_text(&format!("{} {year} © ", config.license));
    line.push_elem(holder);
    line.push_text(".");
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::family::to_html;

    #[test]
    fn test_footer_contains_year() {
        let footer = render_footer(&FooterConfig::default(), 2025);
        assert_eq!(footer.text_content(), "MIT 2025 © Apptic Development.");
    }

    #[test]
    fn test_footer_link() {
        let html = to_html([render_footer(&FooterConfig::default(), 2031)]);
        assert!(html.contains("MIT 2031 ©"));
        assert!(html.contains(r#"href="https://github.com/Apptic-Developement/dismake""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains("Apptic Development"));
    }
}
