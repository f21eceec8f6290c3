//! Command implementations for the berks-lock CLI

pub mod check;
pub mod completions;
pub mod fingerprint;
pub mod helpers;
pub mod list;
pub mod show;
pub mod version;
