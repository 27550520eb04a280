//! opcheck Core
//!
//! Core types for the opcheck operation service test suite.
//!
//! This crate contains:
//! - Domain types: jurisdictions and operation status as the service reports them
//! - DTOs: request and response bodies for the operation endpoints
//! - Fakes: an injectable generator of randomized request payloads

pub mod domain;
pub mod dto;
pub mod fake;
