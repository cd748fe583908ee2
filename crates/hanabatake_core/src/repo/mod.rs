//! Persistence boundary for durable state documents.
//!
//! # Responsibility
//! - Keep SQL details behind the blob repository contract.
//! - Let higher layers stay storage-agnostic.

pub mod blob_repo;
