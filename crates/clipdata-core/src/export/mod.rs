//! Export envelope assembly.
//!
//! A finalized data file wraps the dataset with a version token, the
//! kind's attribution and optional extension identity:
//!
//! ```text
//! { "_metadata": { "data_version", "attribution", "extension_info" }, "data": [...] }
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same data → same content hash, whatever the key order of its objects
//! - Any change to a value or to array order → different hash

pub mod digest;
pub mod envelope;

pub use digest::{canonical_json, content_hash, data_version, emoji_version, UNKNOWN_VERSION};
pub use envelope::{assemble, Envelope, ExportMetadata, ExtensionInfo};
