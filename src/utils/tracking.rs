//! UTM tracking URL construction.
//!
//! Builds campaign-attributed URLs by appending `utm_*` query parameters to a
//! base URL. Parameter order is fixed so identical inputs always produce
//! byte-identical output.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Query-component encode set: RFC 3986 unreserved characters pass through.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// The recognized UTM attribution parameters.
///
/// Absent or empty values are omitted from the generated query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingParams {
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
    pub content: Option<String>,
}

impl TrackingParams {
    /// Returns the recognized keys in their fixed output order, paired with
    /// their current values.
    fn pairs(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("utm_source", self.source.as_deref()),
            ("utm_medium", self.medium.as_deref()),
            ("utm_campaign", self.campaign.as_deref()),
            ("utm_content", self.content.as_deref()),
        ]
    }

    /// Returns true if no parameter carries a non-empty value.
    pub fn is_empty(&self) -> bool {
        self.pairs().iter().all(|(_, v)| v.is_none_or(str::is_empty))
    }
}

/// Appends UTM parameters to a base URL.
///
/// Each recognized key with a non-empty value contributes a
/// `utm_<key>=<encoded-value>` pair. Pairs are joined with `&` and attached
/// via `?` only when at least one pair was produced; if the base URL already
/// contains a query string, pairs are appended with `&` instead.
///
/// The base URL is not validated: malformed input passes through unchanged
/// apart from the appended parameters.
pub fn build_tracked_url(base_url: &str, params: &TrackingParams) -> String {
    let query: Vec<String> = params
        .pairs()
        .iter()
        .filter_map(|(key, value)| match value {
            Some(v) if !v.is_empty() => {
                Some(format!("{}={}", key, utf8_percent_encode(v, QUERY_VALUE)))
            }
            _ => None,
        })
        .collect();

    if query.is_empty() {
        return base_url.to_string();
    }

    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base_url, separator, query.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        source: Option<&str>,
        medium: Option<&str>,
        campaign: Option<&str>,
        content: Option<&str>,
    ) -> TrackingParams {
        TrackingParams {
            source: source.map(String::from),
            medium: medium.map(String::from),
            campaign: campaign.map(String::from),
            content: content.map(String::from),
        }
    }

    #[test]
    fn test_no_params_returns_base_unchanged() {
        let url = build_tracked_url("https://shop.example.com/p/1", &TrackingParams::default());
        assert_eq!(url, "https://shop.example.com/p/1");
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let p = params(Some(""), Some(""), Some(""), Some(""));
        assert_eq!(build_tracked_url("https://example.com", &p), "https://example.com");
    }

    #[test]
    fn test_single_param() {
        let p = params(Some("newsletter"), None, None, None);
        assert_eq!(
            build_tracked_url("https://example.com", &p),
            "https://example.com?utm_source=newsletter"
        );
    }

    #[test]
    fn test_fixed_key_order() {
        // Populated "backwards", output order stays source, medium, campaign, content.
        let p = params(Some("ig"), Some("social"), Some("spring"), Some("story"));
        assert_eq!(
            build_tracked_url("https://example.com", &p),
            "https://example.com?utm_source=ig&utm_medium=social&utm_campaign=spring&utm_content=story"
        );
    }

    #[test]
    fn test_skips_middle_keys() {
        let p = params(Some("ig"), None, Some("spring"), None);
        assert_eq!(
            build_tracked_url("https://example.com", &p),
            "https://example.com?utm_source=ig&utm_campaign=spring"
        );
    }

    #[test]
    fn test_appends_to_existing_query_string() {
        let p = params(Some("newsletter"), None, None, None);
        assert_eq!(
            build_tracked_url("https://example.com/p?ref=home", &p),
            "https://example.com/p?ref=home&utm_source=newsletter"
        );
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let p = params(Some("e mail"), None, Some("q2&launch"), None);
        assert_eq!(
            build_tracked_url("https://example.com", &p),
            "https://example.com?utm_source=e%20mail&utm_campaign=q2%26launch"
        );
    }

    #[test]
    fn test_unreserved_characters_pass_through() {
        let p = params(Some("mail-chimp_v2.1~x"), None, None, None);
        assert_eq!(
            build_tracked_url("https://example.com", &p),
            "https://example.com?utm_source=mail-chimp_v2.1~x"
        );
    }

    #[test]
    fn test_malformed_base_url_passes_through() {
        let p = params(Some("x"), None, None, None);
        assert_eq!(build_tracked_url("not a url", &p), "not a url?utm_source=x");
        assert_eq!(build_tracked_url("not a url", &TrackingParams::default()), "not a url");
    }

    #[test]
    fn test_deterministic_output() {
        let p = params(Some("ig"), Some("social"), None, Some("story"));
        let a = build_tracked_url("https://example.com/collections/summer", &p);
        let b = build_tracked_url("https://example.com/collections/summer", &p);
        assert_eq!(a, b);
    }

    #[test]
    fn test_is_empty() {
        assert!(TrackingParams::default().is_empty());
        assert!(params(Some(""), None, None, None).is_empty());
        assert!(!params(None, Some("social"), None, None).is_empty());
    }
}
