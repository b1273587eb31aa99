//! Command handlers for the kitforge CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod catalog;
pub mod check;
pub mod export;
pub mod verify;
