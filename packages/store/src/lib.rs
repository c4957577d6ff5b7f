pub mod config;
pub mod dashboard;
pub mod history;
pub mod kv;
pub mod models;
pub mod onboarding;
pub mod session;
pub mod social;
pub mod summary;
pub mod validation;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::GoH2Config;
pub use kv::{KeyValueStore, StorageError};
pub use onboarding::{OnboardingDraft, OnboardingStep};
pub use session::{Session, SessionStore};
