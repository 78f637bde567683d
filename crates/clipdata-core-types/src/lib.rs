//! Core types shared across clipdata facilities
//!
//! Holds the canonical field keys and event names used by the structured
//! logging facility and by anything that asserts on captured events.

pub mod schema;
