//! Command implementations for binshim CLI

pub mod completions;
pub mod install;
pub mod run;
pub mod version;
