//! Setpack compiler: value trees, layout, byte emission, and C generation.
//!
//! This crate provides the pipeline from settings values to a byte blob:
//! - `value` - records bound to struct definitions
//! - `layout` - breadth-first offset assignment
//! - `emit` - little-endian byte emission with per-field provenance
//! - `dump` - annotated hex listing of a blob
//! - `typegen` - C struct declarations, metadata, and default data
//! - `document` - schemas and trees from declarative documents

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod document;
pub mod dump;
pub mod emit;
pub mod layout;
pub mod typegen;
pub mod value;

#[cfg(test)]
mod lib_tests;

use std::collections::HashMap;

use setpack_core::Document;
use setpack_format::{FormatError, Schema, StructId};
use tracing::{debug, instrument};

pub use document::LoadError;
pub use emit::{Blob, EmitError};
pub use layout::{Layout, LayoutError};
pub use value::{BindError, NodeId, StructVal, Value, ValueTree};

use typegen::c;

/// Errors that can occur anywhere in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Bind(#[from] BindError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A compiled root: its blob and the structs it needs declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Output {
    pub blob: Blob,
    /// Reachable struct definitions, dependencies first.
    pub structs: Vec<StructId>,
}

/// Flatten and emit the tree below `root`.
#[instrument(level = "debug", skip(tree), fields(root = %root))]
pub fn compile(tree: &ValueTree<'_>, root: NodeId) -> Result<Output> {
    let layout = layout::flatten(tree, root)?;
    let blob = emit::emit_annotated(&layout)?;
    let structs = tree.schema().reachable(&[layout.records()[0].def]);
    Ok(Output { blob, structs })
}

/// Generated C sources for a whole document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    /// Struct and metadata type declarations.
    pub header: String,
    /// Metadata tables and one default data array per root.
    pub source: String,
    /// Emitted blobs, in document root order.
    pub blobs: Vec<Blob>,
}

/// Build, emit, and render every root of a document.
#[instrument(level = "debug", skip_all, fields(roots = doc.roots.len()))]
pub fn compile_document(doc: &Document, config: &c::Config) -> Result<Generated> {
    let schema = document::build_schema(doc)?;
    let mut tree = ValueTree::new(&schema);

    let mut roots = Vec::with_capacity(doc.roots.len());
    let mut symbols: HashMap<String, String> = HashMap::new();
    for record in &doc.roots {
        let name = record.name.as_ref().unwrap_or(&record.struct_name);
        let symbol = config.data_symbol(name);
        if let Some(first) = symbols.insert(symbol.clone(), name.clone()) {
            return Err(LoadError::DuplicateRoot {
                first,
                second: name.clone(),
                symbol,
            }
            .into());
        }
        roots.push((document::build_tree(&mut tree, record)?, name));
    }

    let mut blobs = Vec::with_capacity(roots.len());
    let mut root_structs = Vec::with_capacity(roots.len());
    for (root, name) in roots {
        let mut output = compile(&tree, root)?;
        output.blob.name = name.clone();
        root_structs.push(tree.get(root).def());
        blobs.push(output.blob);
    }

    let generated = render(&schema, &root_structs, blobs, config);
    debug!(
        header = generated.header.len(),
        source = generated.source.len(),
        "generated sources"
    );
    Ok(generated)
}

fn render(schema: &Schema, roots: &[StructId], blobs: Vec<Blob>, config: &c::Config) -> Generated {
    let header = [
        c::emit_struct_defs(schema, roots, config),
        c::emit_metadata_types(config),
    ]
    .join("\n");

    let mut parts = vec![c::emit_metadata(schema, roots, config)];
    parts.extend(blobs.iter().map(|blob| c::emit_default_data(blob, config)));
    let source = parts.join("\n");

    Generated {
        header,
        source,
        blobs,
    }
}
