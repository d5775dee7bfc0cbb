//! # Session Manager
//!
//! Source of truth for "who, if anyone, is signed in".
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────┐   probe ok    ┌──────────────────────┐                 │
//! │  │  RESOLVING  │ ────────────► │ AUTHENTICATED(user)  │◄──┐             │
//! │  └──────┬──────┘               └──────────┬───────────┘   │ login /     │
//! │         │ probe failed                    │ logout        │ register /  │
//! │         │ (any error)                     ▼               │ refresh ok  │
//! │         │                      ┌──────────────────────┐   │             │
//! │         └────────────────────► │      ANONYMOUS       │───┘             │
//! │                                └──────────────────────┘                 │
//! │                                                                         │
//! │  Each transition is stamp-checked and sent in one `send_if_modified`.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Probes are stamped with a [`Generation`]; a probe that resolves after a
//! login, logout, or newer probe is discarded.

use std::sync::Arc;

use coursely_client::{ApiClient, ApiError, ApiResult};
use coursely_core::{Credentials, Registration, User, UserId};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::generation::Generation;

// =============================================================================
// Session State
// =============================================================================

/// What the storefront currently believes about the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "user", rename_all = "snake_case")]
pub enum SessionState {
    /// The initial probe has not finished.
    #[default]
    Resolving,
    /// Signed in as this user.
    Authenticated(User),
    /// Definitely signed out, or the probe failed.
    Anonymous,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user().map(|u| u.id)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// False only while the initial probe is in flight.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, SessionState::Resolving)
    }
}

// =============================================================================
// Session Manager
// =============================================================================

struct SessionInner {
    api: ApiClient,
    state_tx: watch::Sender<SessionState>,
    probe_error_tx: watch::Sender<Option<ApiError>>,
    generation: Generation,
}

/// Owns the session state. Clones share it.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<SessionInner>,
}

impl SessionManager {
    /// Creates a manager in the `Resolving` state. Call [`start`](Self::start)
    /// to run the initial probe.
    pub fn new(api: ApiClient) -> Self {
        let (state_tx, _) = watch::channel(SessionState::Resolving);
        let (probe_error_tx, _) = watch::channel(None);

        SessionManager {
            inner: Arc::new(SessionInner {
                api,
                state_tx,
                probe_error_tx,
                generation: Generation::new(),
            }),
        }
    }

    /// Runs the initial session probe.
    pub async fn start(&self) -> SessionState {
        self.inner.state_tx.send_if_modified(|state| {
            let changed = *state != SessionState::Resolving;
            *state = SessionState::Resolving;
            changed
        });
        self.probe().await
    }

    /// Re-runs the probe without passing through `Resolving`.
    ///
    /// Used after profile or avatar writes so the held user reflects what the
    /// backend confirmed.
    pub async fn refresh(&self) -> SessionState {
        self.probe().await
    }

    async fn probe(&self) -> SessionState {
        let stamp = self.inner.generation.next();
        let outcome = self.inner.api.current_user().await;

        let (next, probe_error) = match outcome {
            Ok(user) => (SessionState::Authenticated(user), None),
            Err(err) => (SessionState::Anonymous, Some(err)),
        };

        if let Some(err) = &probe_error {
            if err.requires_sign_in() {
                debug!("No active session");
            } else {
                warn!(kind = %err.kind(), error = %err, "Session probe failed");
            }
        }

        if !self.commit(stamp, next, probe_error) {
            debug!(stamp, "Discarding stale session probe");
        }
        self.state()
    }

    /// Signs in. On failure the state is left unchanged.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<User> {
        let user = self
            .inner
            .api
            .login(&Credentials::new(email, password))
            .await?;

        info!(user_id = user.id, "Signed in");
        self.supersede(SessionState::Authenticated(user.clone()));
        Ok(user)
    }

    /// Creates an account and signs in as it.
    pub async fn register(&self, registration: &Registration) -> ApiResult<User> {
        let user = self.inner.api.register(registration).await?;

        info!(user_id = user.id, role = %user.role, "Registered and signed in");
        self.supersede(SessionState::Authenticated(user.clone()));
        Ok(user)
    }

    /// Signs out. The backend call is attempted; the local transition to
    /// `Anonymous` happens whatever its outcome.
    pub async fn logout(&self) {
        if let Err(err) = self.inner.api.logout().await {
            warn!(error = %err, "Logout request failed; clearing session anyway");
        }
        self.supersede(SessionState::Anonymous);
    }

    /// Commits an explicit transition, discarding any probe still in flight.
    /// Also clears the last probe error.
    fn supersede(&self, next: SessionState) {
        let stamp = self.inner.generation.next();
        self.commit(stamp, next, None);
    }

    /// Replaces the state and the probe error if `stamp` is still the latest.
    ///
    /// The stamp is checked under the state channel's lock, so a newer
    /// transition is never overwritten by an older one.
    fn commit(&self, stamp: u64, next: SessionState, probe_error: Option<ApiError>) -> bool {
        let mut changed = None;
        let applied = self.inner.state_tx.send_if_modified(|state| {
            if !self.inner.generation.is_current(stamp) {
                return false;
            }
            if state.user_id() != next.user_id() || state.is_resolved() != next.is_resolved() {
                changed = Some((next.user_id(), next.is_resolved()));
            }
            *state = next;
            self.inner.probe_error_tx.send_replace(probe_error);
            true
        });

        if let Some((user_id, resolved)) = changed {
            info!(?user_id, resolved, "Session changed");
        }
        applied
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> SessionState {
        self.inner.state_tx.borrow().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.inner.state_tx.borrow().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state_tx.borrow().is_authenticated()
    }

    /// Receives every committed transition.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state_tx.subscribe()
    }

    /// Waits until the initial probe has finished.
    pub async fn resolved(&self) -> SessionState {
        let mut rx = self.subscribe();
        let state = match rx.wait_for(SessionState::is_resolved).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        state
    }

    /// The error of the most recent failed probe, cleared by a successful one.
    pub fn last_probe_error(&self) -> Option<ApiError> {
        self.inner.probe_error_tx.borrow().clone()
    }
}
