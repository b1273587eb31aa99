//! Kit export encoders.
//!
//! Two stateless encoders consume a grid snapshot plus the catalog: the
//! nested named-tag container the game loads from disk, and the single-line
//! `/give` command used as the clipboard distribution channel. Both are pure
//! functions of their inputs; neither touches I/O or mutates the grid.

mod command;
mod nbt;

pub use command::{
    parse_command_string, to_command_string, CommandParseError, ParsedEntry,
};
pub use nbt::{to_container, Tag};

use thiserror::Error;

/// Errors raised by the exporters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Exporting a fully empty grid is reported, not silently written as a
    /// degenerate file.
    #[error("grid is empty, nothing to export")]
    EmptyGrid,
}
