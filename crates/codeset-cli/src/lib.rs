//! codeset CLI library.
//!
//! This crate provides the command implementations behind the `codeset`
//! binary, along with loaders for code universes, option files, code groups,
//! and CSV tables.

pub mod commands;
pub mod input;
