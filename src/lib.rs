//! # Tasktrack - Single-User Task Tracker
//!
//! A command-line utility for tracking discrete task records backed by
//! a local SQLite database.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, complete, reopen and delete tasks
//! - **Filtering and Sorting**: Status filters and deterministic ordering
//!   by creation time, update time, title or status
//! - **Statistics**: Task counts grouped by completion status
//! - **JSON Output**: Machine-readable response envelopes for scripting
//! - **Sample Data**: Built-in database seeding for demos
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasktrack::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
