pub mod config;
pub mod error;
pub mod files;
pub mod state;
pub mod store;

pub use config::{load_config, AppConfig};
pub use files::{ensure_dir, init_local_dir, resolve_data_dir};
pub use state::{load_state, save_state, PersistedState};
pub use store::{FileStore, KeyValueStore};
#[cfg(test)]
pub use store::MemoryStore;
