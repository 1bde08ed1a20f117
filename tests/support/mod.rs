//! Test support utilities for fetch-secrets integration tests.
//!
//! Provides an isolated command environment and in-memory providers.

#![allow(dead_code)]

pub mod commands;
pub mod fakes;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fakes::*;

/// Test environment for running the binary.
///
/// Every `FS_*` and logging variable from the parent environment is removed,
/// and AWS lookups that could reach the network are disabled.
pub struct Test;

impl Test {
    pub fn new() -> Self {
        Self
    }
}
