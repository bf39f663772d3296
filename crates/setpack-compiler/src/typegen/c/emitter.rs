//! Core emitter struct and main emit logic.

use setpack_core::Colors;
use setpack_format::{Schema, StructId};

use super::Config;

/// C emitter over one schema.
pub struct Emitter<'a> {
    pub(super) schema: &'a Schema,
    pub(super) config: Config,
    /// Output buffer
    pub(super) output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(schema: &'a Schema, config: Config) -> Self {
        Self {
            schema,
            config,
            output: String::new(),
        }
    }

    pub(super) fn c(&self) -> Colors {
        self.config.colors
    }

    /// Packed declarations for every struct reachable from `roots`,
    /// dependencies first.
    pub fn struct_defs(mut self, roots: &[StructId]) -> String {
        if self.config.pack_pragma {
            self.output.push_str("#pragma pack(push, 1)\n\n");
        }
        for id in self.schema.reachable(roots) {
            self.render_struct(id);
            self.output.push('\n');
        }
        if self.config.pack_pragma {
            self.output.push_str("#pragma pack(pop)\n");
        }
        self.finish()
    }

    /// Field tables and struct descriptors for every struct reachable from
    /// `roots`. A descriptor is always defined before a table that points
    /// to it.
    pub fn metadata(mut self, roots: &[StructId]) -> String {
        for id in self.schema.reachable(roots) {
            self.render_metadata(id);
            self.output.push('\n');
        }
        self.finish()
    }

    fn finish(mut self) -> String {
        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }
}
