//! Breadth-first layout of a value tree.
//!
//! The root record sits at offset 0. Records referenced from it follow in
//! field order, then their references, and so on. Each record starts where
//! the previous one ends.

use std::collections::{HashMap, HashSet};

use setpack_format::{StructDef, StructId};
use tracing::{debug, instrument, trace};

use crate::value::{NodeId, ValueTree};

/// Error while flattening a value tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("record {0} does not exist in this tree")]
    UnknownNode(NodeId),

    #[error("root struct `{struct_name}` does not start with `u32 version`")]
    InvalidFirstField { struct_name: String },

    #[error("record {node} is reachable more than once from the root")]
    CyclicReference { node: NodeId },
}

/// A record placed in the blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record {
    pub node: NodeId,
    pub def: StructId,
    pub offset: u64,
    pub size: u64,
}

/// Records reachable from one root, in blob order.
#[derive(Clone, Debug)]
pub struct Layout<'t, 's> {
    tree: &'t ValueTree<'s>,
    root: NodeId,
    records: Vec<Record>,
    offsets: HashMap<NodeId, u64>,
    total_size: u64,
}

impl<'t, 's> Layout<'t, 's> {
    pub fn tree(&self) -> &'t ValueTree<'s> {
        self.tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_def(&self) -> &'s StructDef {
        self.tree.schema().get(self.records[0].def)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Offset assigned to `node`, if it is part of this layout.
    pub fn offset_of(&self, node: NodeId) -> Option<u64> {
        self.offsets.get(&node).copied()
    }

    /// Sum of the sizes of all records.
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Assign an offset to every record reachable from `root`.
#[instrument(level = "debug", skip(tree), fields(root = %root))]
pub fn flatten<'t, 's>(tree: &'t ValueTree<'s>, root: NodeId) -> Result<Layout<'t, 's>, LayoutError> {
    let schema = tree.schema();
    let Some(root_val) = tree.try_get(root) else {
        return Err(LayoutError::UnknownNode(root));
    };
    let root_def = schema.get(root_val.def());
    if !root_def.starts_with_version() {
        return Err(LayoutError::InvalidFirstField {
            struct_name: root_def.name().to_string(),
        });
    }

    let mut queue = vec![root];
    let mut head = 0;
    let mut queued = HashSet::from([root]);
    let mut records = Vec::new();
    let mut offsets = HashMap::new();
    let mut offset = 0u64;

    while head < queue.len() {
        let node = queue[head];
        head += 1;

        let Some(val) = tree.try_get(node) else {
            return Err(LayoutError::UnknownNode(node));
        };
        let def = schema.get(val.def());
        for child in val.children() {
            if !queued.insert(child) {
                return Err(LayoutError::CyclicReference { node: child });
            }
            queue.push(child);
        }

        trace!(node = %node, struct_name = def.name(), offset, "placed record");
        records.push(Record {
            node,
            def: val.def(),
            offset,
            size: def.c_size(),
        });
        offsets.insert(node, offset);
        offset += def.c_size();
    }

    debug!(records = records.len(), total_size = offset, "flattened tree");
    Ok(Layout {
        tree,
        root,
        records,
        offsets,
        total_size: offset,
    })
}
