//! Persisted session: the four storage keys and the order they are written.

use shared_types::Session;

use crate::storage::KeyValueStore;

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";
pub const USERNAME_KEY: &str = "username";
pub const ROLE_KEY: &str = "userRole";

/// Reads and writes the signed-in identity.
pub trait SessionRepository {
    /// Persist every field of `session`, replacing any previous one.
    fn save(&self, session: &Session);
    /// The stored session, or `None` when any field is missing or the role is
    /// not recognized.
    fn read(&self) -> Option<Session>;
    /// Remove all four keys.
    fn clear(&self);
}

/// [`SessionRepository`] over any [`KeyValueStore`].
///
/// The token is the field every guard checks first, so `save` writes it last
/// and `clear` removes it first. A crash between writes leaves no token and
/// therefore no session.
#[derive(Debug, Clone, Default)]
pub struct StoredSession<S> {
    store: S,
}

impl<S: KeyValueStore> StoredSession<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            tracing::warn!(key, error = %e, "failed to persist session field");
        }
    }

    fn delete(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            tracing::warn!(key, error = %e, "failed to remove session field");
        }
    }
}

impl<S: KeyValueStore> SessionRepository for StoredSession<S> {
    fn save(&self, session: &Session) {
        self.delete(TOKEN_KEY);
        self.write(USER_ID_KEY, &session.user_id);
        self.write(USERNAME_KEY, &session.username);
        self.write(ROLE_KEY, session.role.as_str());
        self.write(TOKEN_KEY, &session.token);
        tracing::debug!(role = %session.role, "session saved");
    }

    fn read(&self) -> Option<Session> {
        Session::from_parts(
            self.store.get(TOKEN_KEY),
            self.store.get(USER_ID_KEY),
            self.store.get(USERNAME_KEY),
            self.store.get(ROLE_KEY),
        )
    }

    fn clear(&self) {
        self.delete(TOKEN_KEY);
        self.delete(USER_ID_KEY);
        self.delete(USERNAME_KEY);
        self.delete(ROLE_KEY);
        tracing::debug!("session cleared");
    }
}

/// Browser builds keep the session in `localStorage`.
#[cfg(target_arch = "wasm32")]
pub fn platform_repository() -> Box<dyn SessionRepository> {
    Box::new(StoredSession::new(crate::storage::BrowserStore))
}

/// Native builds keep it in a JSON file under the user's data directory,
/// falling back to memory when there is none.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_repository() -> Box<dyn SessionRepository> {
    match crate::storage::FileStore::default_location() {
        Some(store) => {
            tracing::info!(path = %store.path().display(), "using file session store");
            Box::new(StoredSession::new(store))
        }
        None => {
            tracing::warn!("no local data directory, session will not survive restarts");
            Box::new(StoredSession::new(crate::storage::MemoryStore::new()))
        }
    }
}

impl SessionRepository for Box<dyn SessionRepository> {
    fn save(&self, session: &Session) {
        (**self).save(session)
    }

    fn read(&self) -> Option<Session> {
        (**self).read()
    }

    fn clear(&self) {
        (**self).clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError};
    use shared_types::Role;
    use std::cell::RefCell;

    /// Store that logs every write and removal in call order.
    #[derive(Default)]
    struct RecordingStore {
        inner: MemoryStore,
        log: RefCell<Vec<String>>,
    }

    impl KeyValueStore for RecordingStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.log.borrow_mut().push(format!("set {key}"));
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.log.borrow_mut().push(format!("remove {key}"));
            self.inner.remove(key)
        }
    }

    fn agent() -> Session {
        Session {
            token: "tok-1".into(),
            user_id: "7".into(),
            username: "Awa Diallo".into(),
            role: Role::Agent,
        }
    }

    #[test]
    fn save_then_read() {
        let repo = StoredSession::new(MemoryStore::new());
        repo.save(&agent());
        assert_eq!(repo.read(), Some(agent()));
        assert_eq!(repo.store().get(ROLE_KEY).as_deref(), Some("agent"));
    }

    #[test]
    fn token_is_written_last_and_cleared_first() {
        let repo = StoredSession::new(RecordingStore::default());
        repo.save(&agent());
        assert_eq!(
            repo.store().log.take(),
            vec!["remove token", "set userId", "set username", "set userRole", "set token"]
        );

        repo.clear();
        assert_eq!(
            repo.store().log.take(),
            vec!["remove token", "remove userId", "remove username", "remove userRole"]
        );
    }

    #[test]
    fn clear_removes_every_key() {
        let repo = StoredSession::new(MemoryStore::new());
        repo.save(&agent());
        repo.clear();
        assert_eq!(repo.read(), None);
        assert!(repo.store().is_empty());
    }

    #[test]
    fn missing_token_is_no_session() {
        let store = MemoryStore::new();
        store.set(USER_ID_KEY, "7").unwrap();
        store.set(USERNAME_KEY, "awa").unwrap();
        store.set(ROLE_KEY, "admin").unwrap();
        assert_eq!(StoredSession::new(store).read(), None);
    }

    #[test]
    fn unknown_role_is_no_session() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "t").unwrap();
        store.set(USER_ID_KEY, "7").unwrap();
        store.set(USERNAME_KEY, "awa").unwrap();
        store.set(ROLE_KEY, "superuser").unwrap();
        assert_eq!(StoredSession::new(store).read(), None);
    }

    #[test]
    fn save_replaces_previous_identity() {
        let repo = StoredSession::new(MemoryStore::new());
        repo.save(&agent());
        let admin = Session {
            token: "tok-2".into(),
            user_id: "1".into(),
            username: "root".into(),
            role: Role::Admin,
        };
        repo.save(&admin);
        assert_eq!(repo.read(), Some(admin));
    }

    #[test]
    fn boxed_repository_delegates() {
        let repo: Box<dyn SessionRepository> = Box::new(StoredSession::new(MemoryStore::new()));
        repo.save(&agent());
        assert_eq!(repo.read().map(|s| s.role), Some(Role::Agent));
        repo.clear();
        assert!(repo.read().is_none());
    }
}
