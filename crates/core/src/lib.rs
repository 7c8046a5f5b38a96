// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! wrm-core: web resource synchronization manager.
//!
//! This crate manages "web resource" records held in a remote CRM-like
//! platform: filtered retrieval, create/update with upsert-merge semantics,
//! batched publishing, solution membership, and pre-delete dependency checks.
//!
//! # Main Components
//!
//! - [`ResourceManager`] - the single public-facing orchestrator, generic
//!   over a [`wrm_remote::RemoteClient`]
//! - [`models`] - the [`WebResource`](models::WebResource) value type and its
//!   twelve file-type codes
//! - [`query`] - pure construction of the retrieval filter trees
//! - [`SyncOptions`] - excluded-prefix configuration, passed explicitly into
//!   retrieval (no process-wide singleton)
//! - [`Error`] - the closed error taxonomy; callers never see a raw
//!   transport fault
//!
//! All operations are synchronous and blocking. The manager holds no state
//! beyond the client handle and never retains caller records after a call
//! returns; callers serialize calls on one manager instance or use one
//! instance per connection.

pub mod content;
pub mod error;
pub mod manager;
pub mod models;
pub mod options;
pub mod platform;
pub mod query;

pub use content::{decode_content, encode_content};
pub use error::{Error, Result};
pub use manager::ResourceManager;
pub use models::{ResourceType, SyncState, WebResource};
pub use options::SyncOptions;
pub use query::{ResourceFilter, SolutionScope};
