use crate::clipboard::{ClipboardHandle, ControlMessage, CopyOutcome};
use crate::compose;
use crate::data_model::campaign::ComposedUrl;
use crate::form::{FieldError, FieldErrors, FieldId, FormState};
use std::time::{Duration, Instant};

const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient message shown after a copy attempt. Never persisted.
#[derive(Clone, Debug)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    expires_at: Instant,
}

impl Notice {
    fn new(text: impl Into<String>, level: NoticeLevel) -> Self {
        Self {
            text: text.into(),
            level,
            expires_at: Instant::now() + NOTICE_TTL,
        }
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// The single screen's state: the form, the last composed URL and a
/// transient notice. Everything is replaced wholesale on each change.
pub struct AppState {
    pub form: FormState,
    pub composed: Option<ComposedUrl>,
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new(form: FormState) -> Self {
        Self {
            form,
            composed: None,
            notice: None,
        }
    }

    /// Validate and compose. Validation failures block submission and leave
    /// any previously composed URL in place.
    pub fn submit(&mut self) {
        match self.form.validate() {
            Ok(submission) => {
                match compose::compose(&submission.website_url, &submission.params) {
                    Ok(url) => {
                        tracing::debug!(url = %url, "composed campaign url");
                        self.composed = Some(url);
                    }
                    Err(err) => {
                        tracing::debug!(error = %err, "composer rejected url");
                        self.form.set_errors(FieldErrors::from([(
                            FieldId::WebsiteUrl,
                            FieldError::InvalidUrl,
                        )]));
                    }
                }
            }
            Err(errors) => {
                tracing::debug!(fields = errors.len(), "submission blocked by validation");
                self.form.set_errors(errors);
            }
        }
    }

    /// Clear the form, the composed URL and any notice.
    pub fn reset(&mut self) {
        self.form.reset();
        self.composed = None;
        self.notice = None;
    }

    /// Hand the composed URL to the clipboard worker. The outcome arrives
    /// later via `apply_copy_outcome`.
    pub fn request_copy(&self, clipboard: &ClipboardHandle) {
        if let Some(url) = &self.composed {
            let _ = clipboard
                .sender
                .send(ControlMessage::Copy(url.as_str().to_string()));
        }
    }

    pub fn apply_copy_outcome(&mut self, outcome: CopyOutcome) {
        self.notice = Some(match outcome {
            CopyOutcome::Copied => Notice::new("Copied to clipboard!", NoticeLevel::Success),
            CopyOutcome::Failed(reason) => {
                Notice::new(format!("Copy failed: {reason}"), NoticeLevel::Error)
            }
        });
    }

    /// Drop the notice once its time is up.
    pub fn tick(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::expired) {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_app() -> AppState {
        let mut app = AppState::new(FormState::new());
        app.form.set_value(FieldId::WebsiteUrl, "example.com");
        app.form.set_value(FieldId::Source, "google");
        app.form.set_value(FieldId::Medium, "cpc");
        app.form.set_value(FieldId::Campaign, "summer_sale");
        app
    }

    #[test]
    fn submit_stores_the_composed_url() {
        let mut app = filled_app();
        app.submit();

        let url = app.composed.expect("should compose");
        assert_eq!(
            url.as_str(),
            "https://example.com/?utm_source=google&utm_medium=cpc&utm_campaign=summer_sale"
        );
        assert!(app.form.errors().is_empty());
    }

    #[test]
    fn failed_submit_keeps_the_previous_url() {
        let mut app = filled_app();
        app.submit();
        let before = app.composed.clone();

        app.form.set_value(FieldId::Source, "");
        app.submit();

        assert_eq!(app.composed, before);
        assert_eq!(app.form.error(FieldId::Source), Some(FieldError::Required));
    }

    #[test]
    fn reset_clears_url_and_notice() {
        let mut app = filled_app();
        app.submit();
        app.apply_copy_outcome(CopyOutcome::Copied);

        app.reset();
        assert!(app.composed.is_none());
        assert!(app.notice.is_none());
        assert_eq!(app.form.value(FieldId::Source), "");
    }

    #[test]
    fn copy_outcomes_become_notices() {
        let mut app = filled_app();

        app.apply_copy_outcome(CopyOutcome::Copied);
        let notice = app.notice.as_ref().expect("notice");
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.text, "Copied to clipboard!");

        app.apply_copy_outcome(CopyOutcome::Failed("denied".to_string()));
        let notice = app.notice.as_ref().expect("notice");
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.text.contains("denied"));
    }

    #[test]
    fn request_copy_without_a_url_sends_nothing() {
        let (outcome_tx, outcome_rx) = crossbeam_channel::unbounded();
        let mut clipboard = crate::clipboard::spawn_clipboard_worker(outcome_tx);

        let app = AppState::new(FormState::new());
        app.request_copy(&clipboard);
        clipboard.shutdown();

        assert!(app.composed.is_none());
        assert!(outcome_rx.try_recv().is_err());
    }
}
