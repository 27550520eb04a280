//! Data Transfer Objects for the operation service
//!
//! Request and response bodies exchanged with the remote API. Field names
//! match the service's JSON exactly.

pub mod operation;
