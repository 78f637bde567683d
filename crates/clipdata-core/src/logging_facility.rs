//! Structured logging facility for clipdata
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Logs go to stderr. Stage reports are rendered separately and printed on
//! stdout by the CLI, so redirecting stdout yields a clean report.
//!
//! # Usage
//!
//! ```rust
//! use clipdata_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, init_with_level, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
