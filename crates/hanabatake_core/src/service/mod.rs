//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, engine and persistence calls into use-case APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod garden_service;
