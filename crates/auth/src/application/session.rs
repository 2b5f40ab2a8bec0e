//! Session State Coordinator
//!
//! The single owner of the authoritative "who is signed in" value. State
//! is published over a watch channel; navigation subscribes and reacts to
//! transitions instead of consulting an ambient flag. Only successful
//! submissions change the state.

use account::model::Session;
use tokio::sync::watch;

/// Current authentication state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// No session established
    #[default]
    SignedOut,
    /// A session exists on the remote service
    SignedIn(Session),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::SignedIn(_))
    }

    /// The active session, if any
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::SignedIn(session) => Some(session),
            SessionState::SignedOut => None,
        }
    }
}

/// Owner and publisher of [`SessionState`]
#[derive(Clone)]
pub struct SessionCoordinator {
    tx: watch::Sender<SessionState>,
}

impl SessionCoordinator {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SessionState::SignedOut);
        Self { tx }
    }

    /// Watch state transitions (what navigation reads)
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    /// Snapshot of the current state
    pub fn current(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.tx.borrow().is_authenticated()
    }

    /// Record a newly established session
    pub(crate) fn signed_in(&self, session: Session) {
        tracing::debug!(session_id = %session.id, "Session state updated");
        self.tx.send_replace(SessionState::SignedIn(session));
    }
}

impl Default for SessionCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn session_fixture() -> Session {
        Session {
            id: "sess_9a2b".to_string(),
            user_id: "acc_64f1c2".to_string(),
            expires_at: Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_starts_signed_out() {
        let coordinator = SessionCoordinator::new();
        assert!(!coordinator.is_authenticated());
        assert_eq!(coordinator.current(), SessionState::SignedOut);
        assert!(coordinator.current().session().is_none());
    }

    #[test]
    fn test_signed_in_transition() {
        let coordinator = SessionCoordinator::new();
        coordinator.signed_in(session_fixture());

        assert!(coordinator.is_authenticated());
        assert_eq!(
            coordinator.current().session().map(|s| s.id.as_str()),
            Some("sess_9a2b")
        );
    }

    #[test]
    fn test_subscribers_observe_transitions() {
        let coordinator = SessionCoordinator::new();
        let mut rx = coordinator.subscribe();

        assert!(!rx.borrow().is_authenticated());

        coordinator.signed_in(session_fixture());

        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_authenticated());
    }

    #[test]
    fn test_clones_share_state() {
        let coordinator = SessionCoordinator::new();
        let clone = coordinator.clone();

        coordinator.signed_in(session_fixture());

        assert!(clone.is_authenticated());
    }
}
