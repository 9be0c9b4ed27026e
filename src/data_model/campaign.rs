use serde::Serialize;
use std::fmt;

/// The tracking fields entered per submission. `source`, `medium` and
/// `campaign` are required by the form layer; `term` and `content` may be
/// absent. Empty strings never reach the output query string.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CampaignParams {
    #[serde(rename = "utm_source")]
    pub source: String,
    #[serde(rename = "utm_medium")]
    pub medium: String,
    #[serde(rename = "utm_campaign")]
    pub campaign: String,
    #[serde(rename = "utm_term", skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(rename = "utm_content", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl CampaignParams {
    /// Key/value pairs in the fixed output order, skipping empty fields.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("utm_source", Some(self.source.as_str())),
            ("utm_medium", Some(self.medium.as_str())),
            ("utm_campaign", Some(self.campaign.as_str())),
            ("utm_term", self.term.as_deref()),
            ("utm_content", self.content.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| match value {
            Some(value) if !value.is_empty() => Some((key, value)),
            _ => None,
        })
    }
}

/// A fully composed absolute URL. Immutable once produced; only displayed,
/// copied or printed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ComposedUrl(String);

impl ComposedUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ComposedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One-shot output record for `--json`.
#[derive(Debug, Serialize)]
pub struct ComposeReport<'a> {
    pub url: &'a ComposedUrl,
    pub params: &'a CampaignParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_follow_fixed_order() {
        let params = CampaignParams {
            source: "google".to_string(),
            medium: "cpc".to_string(),
            campaign: "summer_sale".to_string(),
            term: Some("keyword".to_string()),
            content: Some("banner_ad".to_string()),
        };

        let keys: Vec<_> = params.pairs().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec![
                "utm_source",
                "utm_medium",
                "utm_campaign",
                "utm_term",
                "utm_content"
            ]
        );
    }

    #[test]
    fn pairs_skip_absent_and_empty_fields() {
        let params = CampaignParams {
            source: "google".to_string(),
            medium: String::new(),
            campaign: "summer_sale".to_string(),
            term: None,
            content: Some(String::new()),
        };

        let pairs: Vec<_> = params.pairs().collect();
        assert_eq!(
            pairs,
            vec![("utm_source", "google"), ("utm_campaign", "summer_sale")]
        );
    }

    #[test]
    fn params_serialize_with_utm_key_names() {
        let params = CampaignParams {
            source: "google".to_string(),
            medium: "cpc".to_string(),
            campaign: "summer_sale".to_string(),
            term: None,
            content: None,
        };

        let json = serde_json::to_value(&params).expect("serialize");
        assert_eq!(json["utm_source"], "google");
        assert_eq!(json["utm_medium"], "cpc");
        assert_eq!(json["utm_campaign"], "summer_sale");
        assert!(json.get("utm_term").is_none());
    }

    #[test]
    fn composed_url_serializes_as_plain_string() {
        let url = ComposedUrl::new("https://example.com/");
        let json = serde_json::to_string(&url).expect("serialize");
        assert_eq!(json, "\"https://example.com/\"");
    }
}
