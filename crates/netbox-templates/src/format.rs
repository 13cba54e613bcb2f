//! String and payload formatting helpers shared by all templates

use serde_json::{Map, Value};

/// JSON object submitted as a NetBox API request body
pub type Payload = Map<String, Value>;

/// Maximum length NetBox accepts for slugs
pub const SLUG_MAX_LEN: usize = 50;

/// Remove keys whose value is `null`
///
/// Only top-level keys are inspected; nested objects such as
/// `local_context_data` are passed through untouched.
pub fn remove_empty_fields(mut obj: Payload) -> Payload {
    obj.retain(|_, value| !value.is_null());
    obj
}

/// Limit `text` to `max_len` characters
///
/// Text shorter than `max_len` is returned as is.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() < max_len {
        text.to_string()
    } else {
        text.chars().take(max_len).collect()
    }
}

/// Format text into a slug NetBox accepts
///
/// Spaces, commas and periods become dashes, everything outside
/// `[-a-zA-Z0-9_]` is dropped, and the result is cut to 50 characters and
/// lowercased.
pub fn format_slug(text: &str) -> String {
    let slug: String = text
        .chars()
        .map(|c| if matches!(c, ' ' | ',' | '.') { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
        .collect();
    truncate(&slug, SLUG_MAX_LEN).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_remove_empty_fields() {
        let Value::Object(obj) = json!({
            "name": "r1",
            "site": null,
            "enabled": false,
            "mtu": 0,
            "tags": [],
            "local_context_data": {"nested": null},
        }) else {
            unreachable!()
        };

        let cleaned = remove_empty_fields(obj);
        assert_eq!(
            Value::Object(cleaned),
            json!({
                "name": "r1",
                "enabled": false,
                "mtu": 0,
                "tags": [],
                "local_context_data": {"nested": null},
            }),
            "only top-level nulls are removed"
        );
    }

    #[test]
    fn test_remove_empty_fields_keeps_order() {
        let Value::Object(obj) = json!({"b": 1, "a": null, "c": 2}) else {
            unreachable!()
        };
        let keys: Vec<_> = remove_empty_fields(obj).keys().cloned().collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn test_truncate_shorter_is_unchanged() {
        assert_eq!(truncate("edge01", 50), "edge01");
        assert_eq!(truncate("", 50), "");
    }

    #[test]
    fn test_truncate_at_boundary() {
        // len == max_len takes the slicing branch, which yields the same text
        let exact = "a".repeat(50);
        assert_eq!(truncate(&exact, 50), exact);
        assert_eq!(truncate("abcdef", 3), "abc");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("zürich-dc", 3), "zür");
    }

    #[test]
    fn test_format_slug() {
        assert_eq!(format_slug("My Site, Inc."), "my-site--inc-");
        assert_eq!(format_slug("Lab Cluster"), "lab-cluster");
        assert_eq!(format_slug("Dell Inc. (EMC)"), "dell-inc--emc");
        assert_eq!(format_slug("under_score-OK"), "under_score-ok");
    }

    #[test]
    fn test_format_slug_drops_non_ascii() {
        assert_eq!(format_slug("Zürich DC"), "zrich-dc");
    }

    #[test]
    fn test_format_slug_max_len() {
        let slug = format_slug(&"Abc ".repeat(30));
        assert_eq!(slug.len(), SLUG_MAX_LEN);
        assert_eq!(slug, slug.to_lowercase());
    }
}
