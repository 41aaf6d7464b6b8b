//! Common test utilities for autoload-map
//!
//! Shared on-disk site fixtures and build helpers for the integration tests.

#![allow(dead_code)]

mod fixtures;

pub use fixtures::*;
