//! Core domain types
//!
//! This module contains the values shared between the HTTP client (which
//! decodes them) and the suite (which asserts on them).

pub mod operation;
pub mod state;
