// src/play/mod.rs

// Game loop around the core: configuration, persisted settings and history,
// and the session that routes weighings to the right oracle.

pub mod config;
pub mod session;
pub mod store;

pub use config::{ConfigError, GameConfig, GameMode, UnknownMode};
pub use session::{Guess, Session, SessionError, Turn};
pub use store::{KeyValueStore, MemoryStore, StoreError};
