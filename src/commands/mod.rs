//! Command implementations

pub mod completions;
pub mod helpers;
pub mod list;
pub mod locate;
pub mod resolve;
pub mod show;
pub mod version;
