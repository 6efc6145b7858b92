//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (path, show, init)
//! - [`legend`] - Print the magnitude band table
//! - [`render`] - Fetch both feeds and write the map page

pub mod common;
pub mod config;
pub mod legend;
pub mod render;
