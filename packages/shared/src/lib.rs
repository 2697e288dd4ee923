//! Shared utilities for the Kakehashi project collaboration server.
//!
//! This crate provides cross-cutting helpers used by the server crate and
//! its tests: a clock abstraction for timestamp assignment and the logging
//! bootstrap.

pub mod logger;
pub mod time;
