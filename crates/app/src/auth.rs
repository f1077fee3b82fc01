use api::SessionRepository;
use dioxus::prelude::*;
use shared_types::{Role, Session};

/// Global authentication state.
///
/// `session` mirrors what the repository holds; every change goes through
/// [`AuthState::sign_in`] or [`AuthState::sign_out`] so the two never drift.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub session: Signal<Option<Session>>,
    repository: CopyValue<Box<dyn SessionRepository>>,
}

impl AuthState {
    /// Load whatever session the repository already holds.
    pub fn restore(repository: Box<dyn SessionRepository>) -> Self {
        let session = repository.read();
        match &session {
            Some(s) => tracing::info!(role = %s.role, "restored session"),
            None => tracing::debug!("no stored session"),
        }
        Self {
            session: Signal::new(session),
            repository: CopyValue::new(repository),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn current(&self) -> Option<Session> {
        self.session.read().clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.read().as_ref().map(|s| s.role)
    }

    pub fn sign_in(&mut self, session: Session) {
        self.repository.read().save(&session);
        self.session.set(Some(session));
    }

    pub fn sign_out(&mut self) {
        self.repository.read().clear();
        self.session.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
