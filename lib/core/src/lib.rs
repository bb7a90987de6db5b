//! Core domain types and utilities for the waymark workflow platform.
//!
//! This crate provides the foundational types and error handling shared by
//! the workflow engine and the server that wraps it.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{GraphId, ParseIdError, RunId};
