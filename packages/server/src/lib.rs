//! Project collaboration server library.
//!
//! This library provides the backend for a collaborative project tracker
//! with a real-time chat layer: persistent project/chat-room records guarded
//! by optimistic versioning, and per-room WebSocket message fan-out.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
