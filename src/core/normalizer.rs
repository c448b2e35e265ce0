//! Text normalizer: canonical form of raw email text before matching
//!
//! Steps, in order: decode HTML entities, replace tags with a space,
//! collapse whitespace, trim, lower-case. Total: never fails.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Permissive tag boundary; malformed markup degrades to best effort
    static ref RE_TAG: Regex = Regex::new(r"<[^>]+>").unwrap();

    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalize raw text for matching
pub fn normalize(raw: &str) -> String {
    // HTML5 rules: legacy entities like `&nbsp` decode without a semicolon
    let decoded = htmlize::unescape(raw);
    // Tags become a space so `</p>text` cannot fuse into `ptext`
    let stripped = RE_TAG.replace_all(&decoded, " ");
    let collapsed = RE_WHITESPACE.replace_all(&stripped, " ");
    collapsed.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn test_lowercase_and_collapse() {
        assert_eq!(normalize("  Pay  The\n\nInvoice\t NOW "), "pay the invoice now");
    }

    #[test]
    fn test_tags_replaced_with_space() {
        assert_eq!(normalize("<p>Hello</p>world"), "hello world");
        assert_eq!(normalize("<div class=\"x\">Click <b>here</b></div>"), "click here");
    }

    #[test]
    fn test_entities_decoded() {
        assert_eq!(normalize("Terms &amp; Conditions"), "terms & conditions");
        assert_eq!(normalize("don&#39;t tell"), "don't tell");
    }

    #[test]
    fn test_legacy_entities_without_semicolon() {
        assert_eq!(normalize("Amount&nbspdue &amp x &#39 y"), "amount due & x ' y");
        assert_eq!(normalize("Pay&nbspthe&nbspinvoice"), "pay the invoice");
    }

    #[test]
    fn test_escaped_markup_is_stripped_after_decoding() {
        // Entities decode first, so encoded tags are stripped too
        assert_eq!(normalize("&lt;b&gt;urgent&lt;/b&gt; request"), "urgent request");
    }

    #[test]
    fn test_unclosed_tag_left_as_text() {
        assert_eq!(normalize("a < b and c"), "a < b and c");
    }
}
