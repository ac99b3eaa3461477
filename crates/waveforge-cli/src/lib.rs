//! Waveforge CLI library.
//!
//! Command implementations live here so they can be unit-tested; the binary
//! in `main.rs` is a thin clap front end over [`commands`].

pub mod commands;
