//! Filesystem access
//!
//! Core stages work on parsed values only; everything that opens a file
//! lives here.

mod atomic;
mod backup;
mod json;
mod walk;

pub use atomic::atomic_write;
pub use backup::{backup_path, create_backup, discard_backup};
pub use json::{load_json, read_text, to_json_bytes, try_load_json, write_json};
pub use walk::json_files;
