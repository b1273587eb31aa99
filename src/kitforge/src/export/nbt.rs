//! Nested named-tag container encoding.
//!
//! [`Tag`] models the logical shape of the container; that shape is the
//! contract with the game. The binary form follows the standard big-endian
//! named-tag layout (compound 0x0a, int 0x03, string 0x08, list 0x09) and
//! on-disk files are gzip-wrapped, which is what the game expects to load.

use super::SerializationError;
use crate::catalog::Catalog;
use crate::grid::Grid;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, Write};

/// Logical named-tag value. Compound entries keep insertion order so the
/// encoded output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Int(i32),
    String(String),
    List(Vec<Tag>),
    Compound(Vec<(String, Tag)>),
}

impl Tag {
    fn type_id(&self) -> u8 {
        match self {
            Tag::Int(_) => 3,
            Tag::String(_) => 8,
            Tag::List(_) => 9,
            Tag::Compound(_) => 10,
        }
    }

    /// Fetch a compound entry by key. `None` for other tag kinds.
    pub fn get(&self, key: &str) -> Option<&Tag> {
        match self {
            Tag::Compound(entries) => entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Encode as a named root tag in the standard big-endian binary form.
    pub fn to_bytes(&self, root_name: &str) -> Vec<u8> {
        let mut out = Vec::new();
        out.push(self.type_id());
        write_string(&mut out, root_name);
        self.write_payload(&mut out);
        out
    }

    /// Write the gzip-compressed binary form, the on-disk container format.
    /// The root tag carries an empty name, as game saves do.
    pub fn write_gzip<W: Write>(&self, writer: W) -> io::Result<()> {
        let mut enc = GzEncoder::new(writer, Compression::default());
        enc.write_all(&self.to_bytes(""))?;
        enc.finish()?;
        Ok(())
    }

    fn write_payload(&self, out: &mut Vec<u8>) {
        match self {
            Tag::Int(v) => out.extend_from_slice(&v.to_be_bytes()),
            Tag::String(s) => write_string(out, s),
            Tag::List(items) => {
                // Element type 0 (TAG_End) marks an empty list.
                let elem_type = items.first().map_or(0, Tag::type_id);
                out.push(elem_type);
                out.extend_from_slice(&(items.len() as i32).to_be_bytes());
                for item in items {
                    item.write_payload(out);
                }
            }
            Tag::Compound(entries) => {
                for (name, tag) in entries {
                    out.push(tag.type_id());
                    write_string(out, name);
                    tag.write_payload(out);
                }
                out.push(0); // TAG_End
            }
        }
    }
}

fn write_string(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(&(s.len() as u16).to_be_bytes());
    out.extend_from_slice(s.as_bytes());
}

/// Encode a grid snapshot as the container tag tree.
///
/// The root compound holds one `Items` list; each occupied slot becomes a
/// compound of `Slot`, `id` and `Count`, plus an `Enchantments` list only
/// when enchantments are applied and a `tag.display.Name` compound only when
/// the catalog resolves the item. Empty slots are omitted entirely; the list
/// ascends by slot index.
pub fn to_container(grid: &Grid, catalog: &Catalog) -> Result<Tag, SerializationError> {
    if grid.is_vacant() {
        return Err(SerializationError::EmptyGrid);
    }

    let mut items = Vec::new();
    for (index, occupant) in grid.occupied_slots() {
        let mut entry = vec![
            ("Slot".to_string(), Tag::Int(index as i32)),
            ("id".to_string(), Tag::String(occupant.item_id.clone())),
            ("Count".to_string(), Tag::Int(occupant.count as i32)),
        ];
        if !occupant.enchantments.is_empty() {
            let list = occupant
                .enchantments
                .iter()
                .map(|e| {
                    Tag::Compound(vec![
                        ("id".to_string(), Tag::String(e.id.clone())),
                        ("lvl".to_string(), Tag::Int(e.level as i32)),
                    ])
                })
                .collect();
            entry.push(("Enchantments".to_string(), Tag::List(list)));
        }
        if let Some(item) = catalog.item(&occupant.item_id) {
            entry.push((
                "tag".to_string(),
                Tag::Compound(vec![(
                    "display".to_string(),
                    Tag::Compound(vec![(
                        "Name".to_string(),
                        Tag::String(item.name.clone()),
                    )]),
                )]),
            ));
        }
        items.push(Tag::Compound(entry));
    }

    Ok(Tag::Compound(vec![(
        "Items".to_string(),
        Tag::List(items),
    )]))
}
