//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Decoder for the UTF (Universal Tree Format) hierarchical container: magic `"UTF "`, a flat
//! node table, a name pool, and a data-block region, together describing a tree whose leaves
//! map `/`-delimited paths to byte blobs.
//!
//! A node is either interior (has a first child, reached via `peer_sibling` chains) or a leaf
//! (has a `data_offset`/`size` into the data block). Path resolution is built lazily: the first
//! [`UtfTree::find`] call walks the whole tree once and memoizes every path into a `HashMap`, so
//! later lookups are O(1). The walk itself visits every node once (tracked by index) precisely
//! so that a corrupt, cyclic `peer_sibling`/`child_first` chain can't loop forever.

use once_cell::sync::OnceCell;

use std::collections::HashMap;
use std::io::{Cursor, Seek, SeekFrom};

use crate::binary::reader::ReadBytes;
use crate::error::{Result, StarchartError};

const MAGIC: &[u8; 4] = b"UTF ";
const NODE_FLAG_INTERIOR: u32 = 0x10;

#[derive(Clone, Copy, Debug)]
struct RawNode {
    peer_sibling: u32,
    name_offset: u32,
    flags: u32,
    /// `child_first` for interior nodes, `data_offset` for leaves.
    child_or_data_offset: u32,
    size: u32,
}

/// A decoded, read-only UTF container.
///
/// Construction only parses the header and the node table; the path index is built on first
/// use via [`find`](Self::find), since most callers only ever look up a handful of paths out of
/// a tree that can hold thousands of entries (icons, models).
pub struct UtfTree {
    data: Vec<u8>,
    nodes: Vec<RawNode>,
    name_pool_offset: u64,
    data_block_offset: u64,
    index: OnceCell<HashMap<String, (u64, u32)>>,
}

/// Returns whether `data` begins with the `"UTF "` magic.
pub fn is_utf(data: &[u8]) -> bool {
    data.len() >= MAGIC.len() && &data[..MAGIC.len()] == MAGIC
}

impl UtfTree {
    /// Parses the header and node table of a UTF container. Name and data lookups are
    /// deferred; see [`find`](Self::find).
    pub fn decode(data: Vec<u8>) -> Result<Self> {
        let mut cursor = Cursor::new(&data);

        if cursor.read_slice(4, false)? != MAGIC {
            return Err(StarchartError::MalformedUtfContainer("missing UTF magic".to_owned()));
        }

        cursor.seek(SeekFrom::Start(16))?;
        let node_table_offset = cursor.read_u32()? as u64;
        let node_size = cursor.read_u32()? as u64;
        let node_count = cursor.read_u32()? as u64;
        let name_pool_offset = cursor.read_u32()? as u64;
        let _name_pool_size = cursor.read_u32()?;
        let data_block_offset = cursor.read_u32()? as u64;

        if node_size < 20 {
            return Err(StarchartError::MalformedUtfContainer(format!("node size {node_size} is too small")));
        }

        let mut nodes = Vec::with_capacity(node_count as usize);
        for index in 0..node_count {
            cursor.seek(SeekFrom::Start(node_table_offset + index * node_size))?;
            nodes.push(RawNode {
                peer_sibling: cursor.read_u32()?,
                name_offset: cursor.read_u32()?,
                flags: cursor.read_u32()?,
                child_or_data_offset: cursor.read_u32()?,
                size: cursor.read_u32()?,
            });
        }

        let tree = Self { data, nodes, name_pool_offset, data_block_offset, index: OnceCell::new() };
        tree.validate_no_cycles()?;
        Ok(tree)
    }

    /// Looks up `path` (case-insensitive, `/`-delimited, leading slash optional) and returns
    /// the byte blob stored at that leaf, if any.
    pub fn find(&self, path: &str) -> Option<&[u8]> {
        let index = self.index.get_or_init(|| self.build_index());
        let normalized = normalize_path(path);
        let (offset, size) = *index.get(&normalized)?;
        self.data.get(offset as usize..offset as usize + size as usize)
    }

    /// Walks the whole node table once up front, failing if any node is reachable twice. Doing
    /// this eagerly at decode time (rather than in [`build_index`](Self::build_index)) means a
    /// cycle is reported once, as a decode error, instead of resurfacing as silently-missing
    /// paths on every later lookup.
    fn validate_no_cycles(&self) -> Result<()> {
        let mut visited = vec![false; self.nodes.len()];
        let mut unused = HashMap::new();
        self.walk_from_root(&mut visited, &mut unused)
    }

    fn build_index(&self) -> HashMap<String, (u64, u32)> {
        let mut index = HashMap::new();
        let mut visited = vec![false; self.nodes.len()];
        // Already validated cycle-free in `decode`; this can't actually fail.
        let _ = self.walk_from_root(&mut visited, &mut index);
        index
    }

    fn walk_from_root(&self, visited: &mut [bool], index: &mut HashMap<String, (u64, u32)>) -> Result<()> {
        let Some(root) = self.nodes.first() else { return Ok(()) };
        if root.flags & NODE_FLAG_INTERIOR != 0 {
            self.walk_siblings(root.child_or_data_offset_as_index(), String::new(), visited, index)?;
        }
        Ok(())
    }

    /// Depth-first walk over one level of `peer_sibling`-linked nodes and their children,
    /// erroring out the first time a node index is revisited (a cycle) and otherwise recording
    /// each leaf's path in `index`.
    fn walk_siblings(&self, first_index: Option<usize>, prefix: String, visited: &mut [bool], index: &mut HashMap<String, (u64, u32)>) -> Result<()> {
        let mut current = first_index;
        while let Some(node_index) = current {
            let node = *self.nodes.get(node_index).ok_or_else(|| StarchartError::UtfCycleDetected(node_index as u32))?;
            if visited[node_index] {
                return Err(StarchartError::UtfCycleDetected(node_index as u32));
            }
            visited[node_index] = true;

            let name = self.read_name(node.name_offset).unwrap_or_default();
            let path = if prefix.is_empty() { name.to_ascii_lowercase() } else { format!("{prefix}/{}", name.to_ascii_lowercase()) };

            if node.flags & NODE_FLAG_INTERIOR != 0 {
                self.walk_siblings(node.child_or_data_offset_as_index(), path, visited, index)?;
            } else {
                let data_offset = self.data_block_offset + node.child_or_data_offset as u64;
                index.insert(path, (data_offset, node.size));
            }

            current = node.peer_sibling_as_index();
        }
        Ok(())
    }

    fn read_name(&self, name_offset: u32) -> Result<String> {
        let mut cursor = Cursor::new(&self.data);
        cursor.seek(SeekFrom::Start(self.name_pool_offset + name_offset as u64))?;
        cursor.read_string_u8_0terminated()
    }
}

impl RawNode {
    fn child_or_data_offset_as_index(&self) -> Option<usize> {
        // A node index of 0 is the root and can never be a child, so 0 doubles as "no child".
        if self.child_or_data_offset == 0 { None } else { Some(self.child_or_data_offset as usize) }
    }

    fn peer_sibling_as_index(&self) -> Option<usize> {
        if self.peer_sibling == 0 { None } else { Some(self.peer_sibling as usize) }
    }
}

fn normalize_path(path: &str) -> String {
    path.trim_start_matches('/').to_ascii_lowercase()
}
