use std::sync::Arc;

use tokio::sync::watch;
use uuid::Uuid;

use crate::{
    error::{EMPTY_URL_MESSAGE, PanelError, Result},
    payload::{coerce_summary, is_truthy},
    session::AuthSession,
    view::PanelView,
    webhook::SummaryWebhook,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    /// Current input. Survives submissions.
    pub url: String,
    pub is_processing: bool,
    pub summary: String,
    pub error: String,
}

/// The summarizer panel: owns the submission state and runs submissions
/// against the injected webhook.
///
/// State changes are published on a watch channel, see [`Panel::subscribe`].
/// Only one submission runs at a time; a second `submit` while one is in
/// flight fails with [`PanelError::Busy`] and leaves the state untouched.
pub struct Panel {
    webhook: Arc<dyn SummaryWebhook>,
    auth: Arc<dyn AuthSession>,
    state: watch::Sender<SubmissionState>,
}

impl Panel {
    pub fn new(webhook: Arc<dyn SummaryWebhook>, auth: Arc<dyn AuthSession>) -> Self {
        let (state, _) = watch::channel(SubmissionState::default());
        Self {
            webhook,
            auth,
            state,
        }
    }

    pub fn auth(&self) -> &Arc<dyn AuthSession> {
        &self.auth
    }

    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    pub fn view(&self) -> PanelView {
        PanelView::derive(self.auth.status(), &self.state.borrow())
    }

    pub fn set_url(&self, url: impl Into<String>) {
        let url = url.into();
        self.state.send_if_modified(|s| {
            if s.url == url {
                return false;
            }
            s.url = url;
            true
        });
    }

    /// Replace the input and submit it.
    pub async fn submit_url(&self, url: impl Into<String>) -> Result<String> {
        self.set_url(url);
        self.submit().await
    }

    /// Submit the current input to the webhook.
    ///
    /// Returns the displayed summary on success. On failure the error slot
    /// holds [`PanelError::display_message`] and the error is returned too.
    pub async fn submit(&self) -> Result<String> {
        let mut busy = false;
        let mut url = String::new();

        self.state.send_if_modified(|s| {
            if s.is_processing {
                busy = true;
                return false;
            }
            url = s.url.clone();
            s.summary.clear();
            if url.is_empty() {
                s.error = EMPTY_URL_MESSAGE.to_string();
                s.is_processing = false;
            } else {
                s.error.clear();
                s.is_processing = true;
            }
            true
        });

        if busy {
            tracing::debug!("submission rejected, request already in flight");
            return Err(PanelError::Busy);
        }
        if url.is_empty() {
            return Err(PanelError::Validation);
        }

        let submission_id = Uuid::new_v4();
        tracing::info!(%submission_id, %url, "requesting summary");

        let guard = ProcessingGuard::new(&self.state);
        let result = self.fetch_summary(&url).await;
        guard.settle(&result);

        match &result {
            Ok(summary) => {
                tracing::info!(%submission_id, chars = summary.chars().count(), "summary received");
            }
            Err(e) => tracing::error!(%submission_id, error = %e, "summary request failed"),
        }
        result
    }

    async fn fetch_summary(&self, url: &str) -> Result<String> {
        let payload = self.webhook.summarize(url).await?;
        if !is_truthy(&payload) {
            return Err(PanelError::EmptyResponse);
        }
        Ok(coerce_summary(&payload))
    }
}

/// Clears `is_processing` when a submission settles, including when the
/// submitting future is dropped before the webhook answers.
struct ProcessingGuard<'a> {
    state: &'a watch::Sender<SubmissionState>,
    armed: bool,
}

impl<'a> ProcessingGuard<'a> {
    fn new(state: &'a watch::Sender<SubmissionState>) -> Self {
        Self { state, armed: true }
    }

    fn settle(mut self, result: &Result<String>) {
        self.state.send_modify(|s| {
            s.is_processing = false;
            match result {
                Ok(summary) => s.summary = summary.clone(),
                Err(e) => s.error = e.display_message(),
            }
        });
        self.armed = false;
    }
}

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.state.send_modify(|s| s.is_processing = false);
        }
    }
}

#[cfg(test)]
#[path = "panel_test.rs"]
mod tests;
