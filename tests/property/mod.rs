//! Property-based tests

#[cfg(feature = "ssr")]
mod moderation_proptest;
#[cfg(feature = "ssr")]
mod conversation_proptest;
