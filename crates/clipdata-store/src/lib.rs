//! clipdata store - filesystem plumbing for the curation pipeline
//!
//! Provides:
//! - JSON document loading with located parse errors
//! - Complete-buffer atomic writes with configurable indentation
//! - Text source readers and directory walking
//! - `.json.bak` backups for in-place rewrites

pub mod errors;
pub mod fs;

// Re-export key types
pub use errors::Result;
pub use fs::{
    atomic_write, backup_path, create_backup, discard_backup, json_files, load_json, read_text,
    to_json_bytes, try_load_json, write_json,
};
