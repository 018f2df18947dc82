//! Integration tests
//!
//! HTTP endpoints through an in-process `TestServer`, and presence as seen
//! through the API.

pub mod realtime;
