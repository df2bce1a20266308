//! Path utilities for the pet clinic data directory.
//!
//! Each service keeps its own `SQLite` file under `<data root>/data/`.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Directory creation happens here, never in the adapters

mod database;
mod error;
mod platform;

pub use database::database_path;
pub use error::PathError;
pub use platform::data_root;
