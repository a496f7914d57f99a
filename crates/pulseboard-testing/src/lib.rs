//! Testing infrastructure for pulseboard tests.
//!
//! This crate provides:
//! - `fixtures`: Sample users, sessions and post rows
//! - `fakes`: In-memory session provider and posts table
//! - `TestWorld`: Isolated data directory for driving the CLI binary

pub mod fakes;
pub mod fixtures;
pub mod world;

pub use fakes::{InMemoryPostsTable, InMemorySessionProvider, Scripted};
pub use world::{CliResult, TestWorld};
