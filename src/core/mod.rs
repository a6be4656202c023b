//! Core library components.
//!
//! Backend capabilities, backend selection, and the sharing logic that
//! subcommands run on top of them.

pub mod config;
pub mod constants;
pub mod context;
pub mod directory;
pub mod registry;
pub mod share;
pub mod storage;
pub mod types;
pub mod validation;
