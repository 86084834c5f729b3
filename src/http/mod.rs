//! HTTP transport layer
//!
//! Handlers behind the dispatcher's fixed route table.

pub mod filter;
pub mod handlers;
