use crate::compose;
use crate::data_model::campaign::CampaignParams;
use crate::data_model::settings::AppSettings;
use std::collections::BTreeMap;
use url::Url;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum FieldId {
    WebsiteUrl,
    Source,
    Medium,
    Campaign,
    Term,
    Content,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::WebsiteUrl,
        FieldId::Source,
        FieldId::Medium,
        FieldId::Campaign,
        FieldId::Term,
        FieldId::Content,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldId::WebsiteUrl => "Website URL",
            FieldId::Source => "UTM Source",
            FieldId::Medium => "UTM Medium",
            FieldId::Campaign => "UTM Campaign",
            FieldId::Term => "UTM Term (Optional)",
            FieldId::Content => "UTM Content (Optional)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldId::WebsiteUrl => "https://example.com",
            FieldId::Source => "google",
            FieldId::Medium => "cpc",
            FieldId::Campaign => "summer_sale",
            FieldId::Term => "keyword",
            FieldId::Content => "banner_ad",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FieldId::WebsiteUrl => FieldId::Source,
            FieldId::Source => FieldId::Medium,
            FieldId::Medium => FieldId::Campaign,
            FieldId::Campaign => FieldId::Term,
            FieldId::Term => FieldId::Content,
            FieldId::Content => FieldId::WebsiteUrl,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FieldId::WebsiteUrl => FieldId::Content,
            FieldId::Source => FieldId::WebsiteUrl,
            FieldId::Medium => FieldId::Source,
            FieldId::Campaign => FieldId::Medium,
            FieldId::Term => FieldId::Campaign,
            FieldId::Content => FieldId::Term,
        }
    }

    fn index(self) -> usize {
        match self {
            FieldId::WebsiteUrl => 0,
            FieldId::Source => 1,
            FieldId::Medium => 2,
            FieldId::Campaign => 3,
            FieldId::Term => 4,
            FieldId::Content => 5,
        }
    }
}

impl Default for FieldId {
    fn default() -> Self {
        FieldId::WebsiteUrl
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldError {
    Required,
    InvalidUrl,
}

impl FieldError {
    pub fn message(self, field: FieldId) -> String {
        match self {
            FieldError::Required => format!("{} is required.", field.label()),
            FieldError::InvalidUrl => "Please enter a valid URL.".to_string(),
        }
    }
}

pub type FieldErrors = BTreeMap<FieldId, FieldError>;

/// A validated submission: the raw destination plus the tracking fields.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Submission {
    pub website_url: String,
    pub params: CampaignParams,
}

/// The six field values, the focused field and any field-scoped errors.
/// Replaced wholesale on each edit; nothing here survives the session.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    values: [String; FieldId::ALL.len()],
    focus: FieldId,
    errors: FieldErrors,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the form from command-line flags.
    pub fn from_settings(settings: &AppSettings) -> Self {
        let mut form = Self::new();
        let seeds = [
            (FieldId::WebsiteUrl, &settings.url),
            (FieldId::Source, &settings.source),
            (FieldId::Medium, &settings.medium),
            (FieldId::Campaign, &settings.campaign),
            (FieldId::Term, &settings.term),
            (FieldId::Content, &settings.content),
        ];
        for (field, value) in seeds {
            if let Some(value) = value {
                form.set_value(field, value.clone());
            }
        }
        form
    }

    pub fn focus(&self) -> FieldId {
        self.focus
    }

    pub fn value(&self, field: FieldId) -> &str {
        &self.values[field.index()]
    }

    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        self.values[field.index()] = value.into();
        self.errors.remove(&field);
    }

    pub fn error(&self, field: FieldId) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Editing a field clears that field's error.
    pub fn push_char(&mut self, ch: char) {
        self.values[self.focus.index()].push(ch);
        self.errors.remove(&self.focus);
    }

    pub fn backspace(&mut self) {
        self.values[self.focus.index()].pop();
        self.errors.remove(&self.focus);
    }

    pub fn clear_focused(&mut self) {
        self.values[self.focus.index()].clear();
        self.errors.remove(&self.focus);
    }

    /// Clear every field and error and return focus to the first field.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Field-scoped validation: the destination must be non-empty and parse
    /// as an absolute URL once the default scheme is applied; source, medium
    /// and campaign must be non-empty. Term and content are unconstrained.
    pub fn validate(&self) -> Result<Submission, FieldErrors> {
        let mut errors = FieldErrors::new();

        let website_url = self.value(FieldId::WebsiteUrl);
        if website_url.is_empty() {
            errors.insert(FieldId::WebsiteUrl, FieldError::Required);
        } else if Url::parse(&compose::ensure_scheme(website_url)).is_err() {
            errors.insert(FieldId::WebsiteUrl, FieldError::InvalidUrl);
        }

        for field in [FieldId::Source, FieldId::Medium, FieldId::Campaign] {
            if self.value(field).is_empty() {
                errors.insert(field, FieldError::Required);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let optional = |field: FieldId| {
            let value = self.value(field);
            (!value.is_empty()).then(|| value.to_string())
        };

        Ok(Submission {
            website_url: website_url.to_string(),
            params: CampaignParams {
                source: self.value(FieldId::Source).to_string(),
                medium: self.value(FieldId::Medium).to_string(),
                campaign: self.value(FieldId::Campaign).to_string(),
                term: optional(FieldId::Term),
                content: optional(FieldId::Content),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormState {
        let mut form = FormState::new();
        form.set_value(FieldId::WebsiteUrl, "example.com");
        form.set_value(FieldId::Source, "google");
        form.set_value(FieldId::Medium, "cpc");
        form.set_value(FieldId::Campaign, "summer_sale");
        form
    }

    #[test]
    fn validate_accepts_a_filled_form() {
        let submission = filled_form().validate().expect("should validate");
        assert_eq!(submission.website_url, "example.com");
        assert_eq!(submission.params.source, "google");
        assert_eq!(submission.params.term, None);
    }

    #[test]
    fn validate_turns_empty_optionals_into_none() {
        let mut form = filled_form();
        form.set_value(FieldId::Term, "keyword");

        let submission = form.validate().expect("should validate");
        assert_eq!(submission.params.term, Some("keyword".to_string()));
        assert_eq!(submission.params.content, None);
    }

    #[test]
    fn validate_flags_every_empty_required_field() {
        let errors = FormState::new().validate().expect_err("should fail");
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(&FieldId::WebsiteUrl), Some(&FieldError::Required));
        assert_eq!(errors.get(&FieldId::Source), Some(&FieldError::Required));
        assert_eq!(errors.get(&FieldId::Medium), Some(&FieldError::Required));
        assert_eq!(errors.get(&FieldId::Campaign), Some(&FieldError::Required));
    }

    #[test]
    fn validate_rejects_an_unparseable_url() {
        let mut form = filled_form();
        form.set_value(FieldId::WebsiteUrl, "not a url");

        let errors = form.validate().expect_err("should fail");
        assert_eq!(
            errors.get(&FieldId::WebsiteUrl),
            Some(&FieldError::InvalidUrl)
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = FormState::new();
        let errors = form.validate().expect_err("should fail");
        form.set_errors(errors);
        assert!(form.error(FieldId::WebsiteUrl).is_some());

        form.push_char('e');
        assert!(form.error(FieldId::WebsiteUrl).is_none());
        assert!(form.error(FieldId::Source).is_some());
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut form = FormState::new();
        assert_eq!(form.focus(), FieldId::WebsiteUrl);

        form.focus_prev();
        assert_eq!(form.focus(), FieldId::Content);
        form.focus_next();
        assert_eq!(form.focus(), FieldId::WebsiteUrl);

        for _ in 0..FieldId::ALL.len() {
            form.focus_next();
        }
        assert_eq!(form.focus(), FieldId::WebsiteUrl);
    }

    #[test]
    fn reset_clears_values_errors_and_focus() {
        let mut form = filled_form();
        form.focus_next();
        form.set_errors(FieldErrors::from([(FieldId::Source, FieldError::Required)]));

        form.reset();
        assert_eq!(form.focus(), FieldId::WebsiteUrl);
        assert!(form.errors().is_empty());
        for field in FieldId::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn from_settings_seeds_the_fields() {
        let settings = AppSettings {
            url: Some("example.com".to_string()),
            source: Some("newsletter".to_string()),
            ..AppSettings::default()
        };

        let form = FormState::from_settings(&settings);
        assert_eq!(form.value(FieldId::WebsiteUrl), "example.com");
        assert_eq!(form.value(FieldId::Source), "newsletter");
        assert_eq!(form.value(FieldId::Medium), "");
    }
}
