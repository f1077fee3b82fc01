//! Backend access and client-side persistence for the support desk.

pub mod client;
pub mod config;
pub mod session;
pub mod storage;

pub use client::TicketApi;
pub use config::{client_config, load_config};
pub use session::{platform_repository, SessionRepository, StoredSession};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStore;
