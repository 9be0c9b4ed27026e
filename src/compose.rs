use crate::data_model::campaign::{CampaignParams, ComposedUrl};
use std::borrow::Cow;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
#[error("`{input}` is not a valid absolute URL")]
pub struct InvalidUrlError {
    pub input: String,
    #[source]
    pub source: url::ParseError,
}

/// Prefix `https://` when the input names no scheme. The check is a
/// case-sensitive prefix match; anything else is left untouched.
pub fn ensure_scheme(raw: &str) -> Cow<'_, str> {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(format!("https://{raw}"))
    }
}

/// Build the campaign URL: default the scheme, parse, then replace the
/// query component with the tracking pairs in fixed order. Any query on
/// the input is discarded, never merged; fragments survive.
pub fn compose(raw_url: &str, params: &CampaignParams) -> Result<ComposedUrl, InvalidUrlError> {
    let normalized = ensure_scheme(raw_url);
    let mut url = Url::parse(&normalized).map_err(|source| InvalidUrlError {
        input: raw_url.to_string(),
        source,
    })?;

    url.set_query(None);
    let mut pairs = params.pairs().peekable();
    if pairs.peek().is_some() {
        url.query_pairs_mut().extend_pairs(pairs);
    }

    Ok(ComposedUrl::new(url))
}
