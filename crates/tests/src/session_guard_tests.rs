use api::session::{ROLE_KEY, TOKEN_KEY, USERNAME_KEY, USER_ID_KEY};
use api::{FileStore, KeyValueStore, MemoryStore, SessionRepository, StoredSession};
use pretty_assertions::assert_eq;
use shared_types::{authorize_path, landing_path, GuardOutcome, Role};

use crate::common;

#[test]
fn test_agent_is_turned_away_from_admin_pages() {
    let repo = StoredSession::new(MemoryStore::new());
    repo.save(&common::session(Role::Agent, "2"));

    let session = repo.read();
    assert_eq!(
        authorize_path(session.as_ref(), "/admin/dashboard"),
        GuardOutcome::RedirectToUnauthorized
    );
    assert_eq!(
        authorize_path(session.as_ref(), "/agent/tickets/untreated"),
        GuardOutcome::Allow
    );
}

#[test]
fn test_visitor_without_token_goes_to_login() {
    let store = MemoryStore::new();
    store.set(USER_ID_KEY, "2").unwrap();
    store.set(USERNAME_KEY, "Ada").unwrap();
    store.set(ROLE_KEY, "admin").unwrap();
    let repo = StoredSession::new(store);

    let session = repo.read();
    assert!(session.is_none());
    assert_eq!(
        authorize_path(session.as_ref(), "/admin/tickets").redirect_path(),
        Some("/login")
    );
}

#[test]
fn test_unknown_path_lands_on_role_home() {
    let repo = StoredSession::new(MemoryStore::new());
    repo.save(&common::session(Role::User, "5"));
    assert_eq!(landing_path(repo.read().as_ref()), "/client/tickets");

    repo.save(&common::session(Role::Admin, "1"));
    assert_eq!(landing_path(repo.read().as_ref()), "/admin/dashboard");
}

#[test]
fn test_sign_out_clears_every_key() {
    let repo = StoredSession::new(MemoryStore::new());
    repo.save(&common::session(Role::Admin, "1"));
    assert_eq!(repo.store().len(), 4);

    repo.clear();
    assert!(repo.store().is_empty());
    assert!(repo.read().is_none());
    assert_eq!(
        authorize_path(None, "/client/tickets"),
        GuardOutcome::RedirectToLogin
    );
}

#[test]
fn test_tampered_role_reads_as_signed_out() {
    let repo = StoredSession::new(MemoryStore::new());
    repo.save(&common::session(Role::User, "5"));
    repo.store().set(ROLE_KEY, "root").unwrap();

    assert!(repo.read().is_none());
    assert!(repo.store().get(TOKEN_KEY).is_some());
}

#[test]
fn test_file_store_survives_a_restart() {
    let path = std::env::temp_dir()
        .join(format!("support-desk-{}", uuid::Uuid::new_v4()))
        .join("session.json");
    let session = common::session(Role::Agent, "8");

    StoredSession::new(FileStore::new(&path)).save(&session);
    let restored = StoredSession::new(FileStore::new(&path)).read();
    assert_eq!(restored, Some(session));

    StoredSession::new(FileStore::new(&path)).clear();
    assert!(StoredSession::new(FileStore::new(&path)).read().is_none());
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}
