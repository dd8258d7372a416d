//! Text normalization for API fields that arrive as HTML fragments.
//!
//! Search snippets and several opinion text fields come back from
//! CourtListener with embedded markup and character entities. Everything
//! user-facing goes through [`strip_html`] first.

use std::sync::OnceLock;

use quick_xml::escape::unescape_with;
use regex::Regex;

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid tag regex"))
}

/// Resolve the named entities that show up in CourtListener text.
///
/// `unescape_with` replaces the predefined XML set when a custom resolver is
/// supplied, so the five XML entities are listed here alongside the HTML
/// typography CourtListener actually emits. Numeric references are handled
/// by the decoder itself.
fn html_entity(entity: &str) -> Option<&'static str> {
    match entity {
        "lt" => Some("<"),
        "gt" => Some(">"),
        "amp" => Some("&"),
        "quot" => Some("\""),
        "apos" => Some("'"),
        "nbsp" => Some("\u{a0}"),
        "lsquo" => Some("\u{2018}"),
        "rsquo" => Some("\u{2019}"),
        "ldquo" => Some("\u{201c}"),
        "rdquo" => Some("\u{201d}"),
        "ndash" => Some("\u{2013}"),
        "mdash" => Some("\u{2014}"),
        "sect" => Some("\u{a7}"),
        "para" => Some("\u{b6}"),
        "hellip" => Some("\u{2026}"),
        _ => None,
    }
}

/// Strip markup from an HTML fragment and normalize its whitespace.
///
/// Tags are removed, character entities are decoded, and all runs of
/// whitespace collapse to a single space with the ends trimmed. Input that
/// cannot be entity-decoded (stray ampersands are common in case names) is
/// kept as-is rather than dropped.
pub fn strip_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let without_tags = tag_regex().replace_all(text, "");
    let decoded = unescape_with(without_tags.as_ref(), html_entity)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| without_tags.into_owned());

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_removes_tags() {
        assert_eq!(
            strip_html("<p>The <em>judgment</em> is affirmed.</p>"),
            "The judgment is affirmed."
        );
    }

    #[test]
    fn test_strip_html_decodes_entities() {
        assert_eq!(strip_html("Johnson &amp; Johnson"), "Johnson & Johnson");
        assert_eq!(strip_html("&ldquo;due&nbsp;process&rdquo;"), "\u{201c}due process\u{201d}");
        assert_eq!(strip_html("&sect;&nbsp;1983"), "\u{a7} 1983");
    }

    #[test]
    fn test_strip_html_decodes_numeric_references() {
        assert_eq!(strip_html("&#167; 230"), "\u{a7} 230");
        assert_eq!(strip_html("&#x2019;s motion"), "\u{2019}s motion");
    }

    #[test]
    fn test_strip_html_collapses_whitespace() {
        assert_eq!(
            strip_html("  roe \n\t v.   wade  "),
            "roe v. wade"
        );
    }

    #[test]
    fn test_strip_html_keeps_undecodable_input() {
        // A bare ampersand is not a valid entity; the text survives untouched.
        assert_eq!(strip_html("Smith & Sons v. Jones"), "Smith & Sons v. Jones");
    }

    #[test]
    fn test_strip_html_empty_input() {
        assert_eq!(strip_html(""), "");
        assert_eq!(strip_html("   \n  "), "");
    }

    #[test]
    fn test_strip_html_is_idempotent_on_plain_output() {
        let inputs = [
            "<p>Certiorari  granted.</p>",
            "Miranda v. Arizona, 384 U.S. 436",
            "A &amp; B <span>Corp.</span>",
            "  spaced \t out  ",
        ];
        for input in inputs {
            let once = strip_html(input);
            assert_eq!(strip_html(&once), once, "not stable for {input:?}");
        }
    }
}
