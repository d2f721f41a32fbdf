/// Command-line interface and run loop
pub mod cli;
/// Parsing of user controls and remove requests
pub mod command;
/// Seed data and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Diagnostic log setup
pub mod logging;
/// Text rendering for the terminal
pub mod render;
/// Caller-owned current list
pub mod session;
