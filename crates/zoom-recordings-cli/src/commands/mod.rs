//! CLI command implementations for `zoom-recordings`.
//!
//! Each subcommand lives in its own module and exports an `*Args` struct
//! implementing `clap::Args` plus a `run` function taking the shared
//! [`zoom_recordings::Client`].

pub mod delete;
pub mod download;
pub mod list;
