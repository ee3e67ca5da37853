//! # Pathport
//!
//! Pathport resolves an absolute file path into the string a user wants on
//! their clipboard: the file name, the path relative to a project root, the
//! absolute path unchanged, or the path translated through a user-supplied
//! mapping table describing how paths look on another machine.
//!
//! ## Features
//!
//! * Prefix matching - Pick the most specific project root or mapping key for a path
//! * Path resolution - Produce name/relative/absolute/mapped forms of a path
//! * Mapping table cache - Keep a per-window JSON mapping table fresh against its file

/// Command surface invoked by host UI bindings (sidebar, tabs, cursor, override)
pub mod commands;
/// Per-window mapping table loading, validation, and staleness tracking
pub mod mapfile;
/// Prefix matching by path-component specificity
pub mod prefix;
/// Resolution modes and the path resolver
pub mod resolve;
/// Telemetry and logging configuration
pub mod telemetry;
/// Host-facing window, view, and caret data model
pub mod window;
