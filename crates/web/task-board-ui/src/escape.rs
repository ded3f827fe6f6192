//! HTML escaping for user-supplied text

/// Escape `& < > " '` so the text can be spliced into markup verbatim
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_characters() {
        assert_eq!(escape_html(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#039;");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("Buy milk ✨"), "Buy milk ✨");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_no_double_unescape() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_script_injection_neutralised() {
        let malicious_inputs = [
            r#"<script>alert('XSS')</script>"#,
            r#""><script>alert('XSS')</script>"#,
            r#"'/><img src=x onerror=alert(1)>"#,
        ];

        for input in malicious_inputs {
            let escaped = escape_html(input);
            assert!(!escaped.contains('<'));
            assert!(!escaped.contains('>'));
            assert!(!escaped.contains('"'));
            assert!(!escaped.contains('\''));
        }
    }
}
