//! Test suite for Z-Code
//!
//! This module organizes all tests

#[cfg(feature = "ssr")]
pub mod integration;
pub mod property;
