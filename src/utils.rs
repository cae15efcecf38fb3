/// Utility helpers shared across the RVR app.

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn compact_whitespace(value: &str) -> String {
    value
        .split_whitespace()
        .filter(|segment| !segment.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove markup tags, keeping only text content. Feed summaries often
/// arrive as HTML fragments.
pub fn strip_html_tags(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_tag = false;

    for character in input.chars() {
        match character {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => output.push(character),
            _ => {}
        }
    }

    output
}

/// Decode the entities that actually show up in station feeds.
pub fn decode_html_entities(input: &str) -> String {
    input
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
}

/// Trim a summary to `max_chars` characters on a char boundary, appending
/// an ellipsis when something was cut.
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }

    let mut out: String = value.chars().take(max_chars).collect();
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\u{2026}');
    out
}

/// True when the value is an absolute http(s) URL. Anything else is not
/// safe to hand to an `img` or audio source.
pub fn is_absolute_http_url(value: &str) -> bool {
    let trimmed = value.trim();
    (trimmed.starts_with("http://") || trimmed.starts_with("https://"))
        && trimmed.len() > "https://".len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compacts_whitespace_runs() {
        assert_eq!(compact_whitespace("  a \t b\n\nc  "), "a b c");
        assert_eq!(compact_whitespace(""), "");
    }

    #[test]
    fn strips_tags_and_keeps_text() {
        assert_eq!(strip_html_tags("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(strip_html_tags("no tags"), "no tags");
    }

    #[test]
    fn decodes_common_entities() {
        assert_eq!(decode_html_entities("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(decode_html_entities("&quot;ciao&quot;"), "\"ciao\"");
        assert_eq!(decode_html_entities("rock&#39;n&#39;roll"), "rock'n'roll");
    }

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("abcdefghij", 4), "abcd\u{2026}");
        // Multibyte characters must not be split.
        assert_eq!(truncate_chars("àèìòù", 3), "àèì\u{2026}");
    }

    #[test]
    fn detects_absolute_http_urls() {
        assert!(is_absolute_http_url("https://x/a.png"));
        assert!(is_absolute_http_url("http://example.com/art.jpg"));
        assert!(!is_absolute_http_url("not-a-url"));
        assert!(!is_absolute_http_url("/relative/path.png"));
        assert!(!is_absolute_http_url("ftp://example.com/a.png"));
        assert!(!is_absolute_http_url("https://"));
    }
}
