//! Platform content parsing service.
//!
//! `parser` splits agent markdown into per-platform content items, `content`
//! and `routes` expose it over HTTP, and `verify` checks a live deployment.

pub mod config;
pub mod content;
pub mod errors;
pub mod parser;
pub mod routes;
pub mod state;
pub mod verify;
