use crate::{panel::SubmissionState, session::AuthStatus};

/// Everything a presentation layer needs to draw the panel.
///
/// Derived from the auth status and the submission state, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    AuthLoading,
    Unauthenticated,
    Idle,
    Processing,
    Error(String),
    Success(String),
}

impl PanelView {
    pub fn derive(auth: AuthStatus, state: &SubmissionState) -> Self {
        if auth.is_loading {
            return PanelView::AuthLoading;
        }
        if !auth.is_authenticated {
            return PanelView::Unauthenticated;
        }
        if state.is_processing {
            PanelView::Processing
        } else if !state.error.is_empty() {
            PanelView::Error(state.error.clone())
        } else if !state.summary.is_empty() {
            PanelView::Success(state.summary.clone())
        } else {
            PanelView::Idle
        }
    }

    /// Whether the submit control accepts input in this state.
    pub fn can_submit(&self) -> bool {
        matches!(
            self,
            PanelView::Idle | PanelView::Error(_) | PanelView::Success(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNED_IN: AuthStatus = AuthStatus {
        is_loading: false,
        is_authenticated: true,
    };

    fn state(is_processing: bool, summary: &str, error: &str) -> SubmissionState {
        SubmissionState {
            url: "https://youtu.be/abc".into(),
            is_processing,
            summary: summary.into(),
            error: error.into(),
        }
    }

    #[test]
    fn auth_loading_wins_over_everything() {
        let auth = AuthStatus {
            is_loading: true,
            is_authenticated: false,
        };
        assert_eq!(PanelView::derive(auth, &state(true, "s", "e")), PanelView::AuthLoading);
    }

    #[test]
    fn unauthenticated_hides_panel_state() {
        let view = PanelView::derive(AuthStatus::default(), &state(false, "s", ""));
        assert_eq!(view, PanelView::Unauthenticated);
        assert!(!view.can_submit());
    }

    #[test]
    fn processing_then_error_then_success_then_idle() {
        assert_eq!(PanelView::derive(SIGNED_IN, &state(true, "", "")), PanelView::Processing);
        assert_eq!(
            PanelView::derive(SIGNED_IN, &state(false, "", "bad")),
            PanelView::Error("bad".into())
        );
        assert_eq!(
            PanelView::derive(SIGNED_IN, &state(false, "good", "")),
            PanelView::Success("good".into())
        );
        assert_eq!(PanelView::derive(SIGNED_IN, &state(false, "", "")), PanelView::Idle);
    }

    #[test]
    fn submit_disabled_only_while_processing() {
        assert!(PanelView::Idle.can_submit());
        assert!(PanelView::Error("x".into()).can_submit());
        assert!(PanelView::Success("x".into()).can_submit());
        assert!(!PanelView::Processing.can_submit());
        assert!(!PanelView::AuthLoading.can_submit());
    }
}
