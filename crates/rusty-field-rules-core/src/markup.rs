//! Rich-text (HTML) content checks

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

// A tag only opens on '<' followed by a letter, '/', '!' or '?'
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[A-Za-z/!?][^>]*>").unwrap());

static ENTITY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").unwrap());

/// Text content of an HTML fragment
///
/// Comments and tags are removed, then character references are decoded.
/// Decoding runs after tag removal so an escaped `&lt;b&gt;` survives as text.
pub fn strip_markup(html: &str) -> String {
    let without_comments = COMMENT_REGEX.replace_all(html, "");
    let without_tags = TAG_REGEX.replace_all(&without_comments, "");
    ENTITY_REGEX
        .replace_all(&without_tags, |caps: &Captures| {
            decode_entity(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(entity: &str) -> Option<String> {
    if let Some(num) = entity.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }

    let decoded = match entity {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{a0}",
        _ => return None,
    };
    Some(decoded.to_string())
}

/// True when the fragment has no visible text
pub fn is_rich_text_empty(html: &str) -> bool {
    strip_markup(html).trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(strip_markup("a &amp; b"), "a & b");
        assert_eq!(strip_markup("&lt;b&gt;kept&lt;/b&gt;"), "<b>kept</b>");
        assert_eq!(strip_markup("&#65;&#x42;"), "AB");
        assert_eq!(strip_markup("<!-- <p>hidden</p> -->shown"), "shown");
        assert_eq!(strip_markup("&unknown;"), "&unknown;");
    }

    #[test]
    fn test_bare_angle_brackets_are_text() {
        assert_eq!(strip_markup("1 < 2 > 0"), "1 < 2 > 0");
        assert_eq!(strip_markup("<>"), "<>");
        assert_eq!(strip_markup("a <b>bold</b> <?xml?>"), "a bold ");
        assert!(!is_rich_text_empty("<>"));
        assert!(!is_rich_text_empty("<p> < </p>"));
    }

    #[test]
    fn test_rich_text_empty() {
        assert!(is_rich_text_empty(""));
        assert!(is_rich_text_empty("<p></p>"));
        assert!(is_rich_text_empty("<p>&nbsp;</p>"));
        assert!(is_rich_text_empty("<p><br></p>\n<div>   </div>"));
        assert!(!is_rich_text_empty("<p>Text</p>"));
        assert!(!is_rich_text_empty("<ul><li>item</li></ul>"));
    }
}
