use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{config::NhostConfig, error::AuthError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthStatus {
    pub is_loading: bool,
    pub is_authenticated: bool,
}

/// Read-only view of the signed-in user, plus the one mutation the panel
/// needs: signing out.
#[async_trait]
pub trait AuthSession: Send + Sync {
    fn status(&self) -> AuthStatus;
    fn user_email(&self) -> Option<String>;
    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// What the presentation layer should show for a given auth status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Auth still resolving. No form is rendered.
    Loading,
    /// Not signed in. The external sign-in surface is rendered instead of the form.
    SignIn,
    Panel,
}

pub fn gate(status: AuthStatus) -> Gate {
    if status.is_loading {
        Gate::Loading
    } else if !status.is_authenticated {
        Gate::SignIn
    } else {
        Gate::Panel
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignOutRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct SignInResponse {
    session: Option<NhostSessionData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NhostSessionData {
    access_token: String,
    refresh_token: String,
    user: Option<NhostUser>,
}

#[derive(Debug, Clone, Deserialize)]
struct NhostUser {
    email: Option<String>,
}

#[derive(Default)]
struct SessionState {
    loading: bool,
    session: Option<NhostSessionData>,
}

/// `AuthSession` backed by the Nhost auth service (email + password sign-in).
pub struct NhostSession {
    client: reqwest::Client,
    base_url: String,
    state: Mutex<SessionState>,
}

impl NhostSession {
    pub fn new(config: &NhostConfig) -> Result<Self, AuthError> {
        Ok(Self::with_base_url(config.auth_base_url()?))
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            state: Mutex::new(SessionState::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn state(&self) -> std::sync::MutexGuard<'_, SessionState> {
        self.state.lock().expect("NhostSession poisoned")
    }

    /// Sign in with email and password. `status().is_loading` is true while
    /// the request is in flight.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.state().loading = true;
        let result = self.request_session(email, password).await;

        let mut state = self.state();
        state.loading = false;
        match result {
            Ok(session) => {
                tracing::info!(email = ?session.user.as_ref().and_then(|u| u.email.as_deref()), "signed in");
                state.session = Some(session);
                Ok(())
            }
            Err(e) => {
                state.session = None;
                Err(e)
            }
        }
    }

    async fn request_session(
        &self,
        email: &str,
        password: &str,
    ) -> Result<NhostSessionData, AuthError> {
        let response = self
            .client
            .post(format!("{}/signin/email-password", self.base_url))
            .json(&SignInRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(rejected(status.as_u16(), response.text().await.unwrap_or_default()));
        }

        let body = response.json::<SignInResponse>().await?;
        body.session.ok_or(AuthError::NoSession)
    }
}

fn rejected(status: u16, body: String) -> AuthError {
    let reason = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v["message"].as_str().map(str::to_string))
        .unwrap_or(body);
    AuthError::Rejected { status, reason }
}

#[async_trait]
impl AuthSession for NhostSession {
    fn status(&self) -> AuthStatus {
        let state = self.state();
        AuthStatus {
            is_loading: state.loading,
            is_authenticated: state.session.is_some(),
        }
    }

    fn user_email(&self) -> Option<String> {
        self.state()
            .session
            .as_ref()
            .and_then(|s| s.user.as_ref())
            .and_then(|u| u.email.clone())
    }

    /// Clears the local session first, then tells the service. A failed
    /// remote call is reported but the user stays signed out.
    async fn sign_out(&self) -> Result<(), AuthError> {
        let taken = self.state().session.take();
        let Some(session) = taken else {
            return Ok(());
        };

        let result: Result<(), AuthError> = async {
            let response = self
                .client
                .post(format!("{}/signout", self.base_url))
                .bearer_auth(&session.access_token)
                .json(&SignOutRequest {
                    refresh_token: &session.refresh_token,
                })
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(rejected(status.as_u16(), response.text().await.unwrap_or_default()));
            }
            Ok(())
        }
        .await;

        if let Err(e) = &result {
            tracing::warn!(error = %e, "remote sign-out failed, local session cleared");
        }
        result
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
