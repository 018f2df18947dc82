//! Presence integration tests

mod presence_test;
