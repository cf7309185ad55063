//! Input sanitization and validation for the contact pages

use regex::Regex;
use std::sync::OnceLock;

/// Replace HTML metacharacters with entities
///
/// Applied to submitted fields before storage and to every value the
/// templates emit, so markup in input never reaches the page as markup.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
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

/// Trim and escape a submitted field; `None` when nothing remains
pub fn sanitize_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(escape_html(trimmed))
    }
}

/// Validate the permissive phone format: digits with an optional
/// leading '+', spaces, hyphens, and parentheses
pub fn validate_phone(phone: &str) -> Result<(), String> {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = PHONE_REGEX
        .get_or_init(|| Regex::new(r"^\+?[0-9\s\-()]+$").expect("Failed to compile phone regex"));

    if !regex.is_match(phone) {
        return Err("Invalid phone number format".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("O'Brien & Sons"), "O&#039;Brien &amp; Sons");
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_sanitize_field() {
        assert_eq!(sanitize_field("  Ada  "), Some("Ada".to_string()));
        assert_eq!(sanitize_field("<b>Ada</b>"), Some("&lt;b&gt;Ada&lt;/b&gt;".to_string()));
        assert_eq!(sanitize_field(""), None);
        assert_eq!(sanitize_field("   "), None);
    }

    #[test]
    fn test_validate_phone_accepts_permissive_formats() {
        assert!(validate_phone("+44 (0)20-1234").is_ok());
        assert!(validate_phone("+1 555-1212").is_ok());
        assert!(validate_phone("0151 123456").is_ok());
    }

    #[test]
    fn test_validate_phone_rejects_garbage() {
        assert!(validate_phone("abc").is_err());
        assert!(validate_phone("555-CALL").is_err());
        assert!(validate_phone("").is_err());
    }
}
