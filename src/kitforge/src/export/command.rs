//! `/give` command-string encoding and parsing.
//!
//! The command line is the alternate distribution channel: one bracketed
//! record per occupied slot, comma-joined, ascending slot index. Unlike the
//! container encoding, an item without enchantments still emits an empty
//! `Enchantments:[]` list. Output is fully deterministic for a given grid
//! snapshot. The parser is the exact inverse and backs the round-trip
//! verification path.

use super::SerializationError;
use crate::catalog::Catalog;
use crate::grid::{AppliedEnchantment, Grid};
use thiserror::Error;

const COMMAND_PREFIX: &str = "/give @p minecraft:player_head{display:{Name:'[Kit]'},Items:[";

/// One slot entry recovered from a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub slot: usize,
    pub item_id: String,
    pub enchantments: Vec<AppliedEnchantment>,
}

/// Errors raised while parsing a command line back into entries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("not a kit give command")]
    BadPrefix,

    #[error("unbalanced brackets in item list")]
    Unbalanced,

    #[error("malformed entry: {0}")]
    BadEntry(String),

    #[error("invalid number in {field}: {value}")]
    BadNumber { field: &'static str, value: String },
}

/// Encode a grid snapshot as a single `/give` line.
///
/// The catalog parameter keeps signature parity with the container encoder;
/// the textual form carries identifiers only.
pub fn to_command_string(grid: &Grid, _catalog: &Catalog) -> Result<String, SerializationError> {
    if grid.is_vacant() {
        return Err(SerializationError::EmptyGrid);
    }

    let entries: Vec<String> = grid
        .occupied_slots()
        .map(|(index, occupant)| {
            let enchants: Vec<String> = occupant
                .enchantments
                .iter()
                .map(|e| format!("{{id:{},lvl:{}}}", e.id, e.level))
                .collect();
            format!(
                "{{Slot:{},id:{},Enchantments:[{}]}}",
                index,
                occupant.item_id,
                enchants.join(",")
            )
        })
        .collect();

    Ok(format!("{}{}]}}", COMMAND_PREFIX, entries.join(",")))
}

/// Parse a `/give` line produced by [`to_command_string`] back into its
/// slot entries.
pub fn parse_command_string(command: &str) -> Result<Vec<ParsedEntry>, CommandParseError> {
    let body = command
        .strip_prefix(COMMAND_PREFIX)
        .ok_or(CommandParseError::BadPrefix)?;
    let body = body
        .strip_suffix("]}")
        .ok_or(CommandParseError::Unbalanced)?;

    split_groups(body)?
        .into_iter()
        .map(parse_entry)
        .collect()
}

/// Split `body` into its top-level `{...}` groups, tolerating nested
/// brackets inside each group.
fn split_groups(body: &str) -> Result<Vec<&str>, CommandParseError> {
    let mut groups = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    for (i, c) in body.char_indices() {
        match c {
            '{' | '[' => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            '}' | ']' => {
                depth = depth.checked_sub(1).ok_or(CommandParseError::Unbalanced)?;
                if depth == 0 {
                    let s = start.take().ok_or(CommandParseError::Unbalanced)?;
                    groups.push(&body[s..=i]);
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(CommandParseError::Unbalanced);
    }
    Ok(groups)
}

fn parse_entry(record: &str) -> Result<ParsedEntry, CommandParseError> {
    let bad = || CommandParseError::BadEntry(record.to_string());

    let inner = record
        .strip_prefix('{')
        .and_then(|r| r.strip_suffix('}'))
        .ok_or_else(bad)?;
    let rest = inner.strip_prefix("Slot:").ok_or_else(bad)?;
    let (slot_str, rest) = rest.split_once(",id:").ok_or_else(bad)?;
    let (item_id, ench_body) = rest.split_once(",Enchantments:[").ok_or_else(bad)?;
    let ench_body = ench_body.strip_suffix(']').ok_or_else(bad)?;

    let slot = slot_str
        .parse()
        .map_err(|_| CommandParseError::BadNumber {
            field: "Slot",
            value: slot_str.to_string(),
        })?;

    let mut enchantments = Vec::new();
    for group in split_groups(ench_body)? {
        let inner = group
            .strip_prefix('{')
            .and_then(|r| r.strip_suffix('}'))
            .ok_or_else(bad)?;
        let (id_part, lvl_str) = inner.split_once(",lvl:").ok_or_else(bad)?;
        let id = id_part.strip_prefix("id:").ok_or_else(bad)?;
        let level = lvl_str
            .parse()
            .map_err(|_| CommandParseError::BadNumber {
                field: "lvl",
                value: lvl_str.to_string(),
            })?;
        enchantments.push(AppliedEnchantment {
            id: id.to_string(),
            level,
        });
    }

    Ok(ParsedEntry {
        slot,
        item_id: item_id.to_string(),
        enchantments,
    })
}
