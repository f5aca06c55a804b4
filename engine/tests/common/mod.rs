//! Common test utilities and infrastructure
//!
//! This module provides shared test utilities, fixtures, and helpers
//! used across all engine test suites.

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
