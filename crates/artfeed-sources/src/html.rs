use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Removes every `<...>` span from `html` and trims surrounding whitespace.
///
/// Entities are left as-is and no spacing is inserted where block tags
/// were removed.
#[must_use]
pub fn strip_html(html: &str) -> String {
    TAG_RE.replace_all(html, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::strip_html;

    #[test]
    fn strips_nested_tags() {
        assert_eq!(strip_html("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn trims_whitespace_left_by_tags() {
        assert_eq!(strip_html("\n<p>  Signed print </p>\n"), "Signed print");
    }

    #[test]
    fn tags_with_attributes_are_removed() {
        assert_eq!(
            strip_html(r#"<a href="https://example.com" class="x">link</a>"#),
            "link"
        );
    }

    #[test]
    fn tag_only_input_becomes_empty() {
        assert_eq!(strip_html("<p></p><br/>"), "");
    }

    #[test]
    fn unclosed_angle_bracket_is_kept() {
        assert_eq!(strip_html("3 < 4"), "3 < 4");
    }
}
