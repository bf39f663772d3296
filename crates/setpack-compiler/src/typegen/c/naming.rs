//! Symbol names for generated globals.

use setpack_core::utils::to_pascal_case;

use super::Config;

impl Config {
    /// `g<Name>Default`: the default data array of a root.
    pub(crate) fn data_symbol(&self, struct_name: &str) -> String {
        format!(
            "{}{}{}",
            self.symbol_prefix,
            to_pascal_case(struct_name),
            self.symbol_suffix
        )
    }

    /// `g<Name>Metadata`: the struct descriptor.
    pub(super) fn metadata_symbol(&self, struct_name: &str) -> String {
        format!("{}{}Metadata", self.symbol_prefix, to_pascal_case(struct_name))
    }

    /// `g<Name>FieldsMetadata`: the per-field table.
    pub(super) fn fields_symbol(&self, struct_name: &str) -> String {
        format!(
            "{}{}FieldsMetadata",
            self.symbol_prefix,
            to_pascal_case(struct_name)
        )
    }
}
