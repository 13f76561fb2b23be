use jiff::Zoned;
use uuid::Uuid;

/// Generate a UUID v4
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Get current ISO date string (without milliseconds)
pub fn iso_date() -> String {
    let now = Zoned::now();
    // Format as ISO 8601 without fractional seconds
    now.strftime("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Truncate a string to a maximum length, handling multi-byte characters properly.
/// Appends "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_uuid_is_unique() {
        let a = generate_uuid();
        let b = generate_uuid();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn test_iso_date_format() {
        let date = iso_date();
        // Should look like 2026-08-30T12:34:56Z
        assert_eq!(date.len(), 20);
        assert!(date.ends_with('Z'));
        assert_eq!(&date[4..5], "-");
        assert_eq!(&date[10..11], "T");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a longer string", 10), "a longe...");
        assert_eq!(truncate_string("abcdef", 3), "abc");
    }
}
