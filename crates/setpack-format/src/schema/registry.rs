//! Schema registry: owns struct definitions and hands out [`StructId`]s.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::{Field, StructDef, StructId};
use crate::{FormatError, Result};

/// Ordered collection of struct definitions.
///
/// A struct may reference itself or structs defined before it. Mutual
/// recursion between two structs is not expressible.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    defs: Vec<StructDef>,
    by_name: HashMap<String, StructId>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a nested (non top-level) struct.
    pub fn define(&mut self, name: impl Into<String>, fields: Vec<Field>) -> Result<StructId> {
        self.insert(name.into(), fields, false)
    }

    /// Define a top-level struct. Its first field must be `u32 version`.
    pub fn define_top_level(
        &mut self,
        name: impl Into<String>,
        fields: Vec<Field>,
    ) -> Result<StructId> {
        let name = name.into();
        match fields.first() {
            Some(first) if first.is_version() => {}
            Some(first) => {
                return Err(FormatError::InvalidFirstField {
                    struct_name: name,
                    found: format!("`{} {}`", first.kind.name(), first.name),
                });
            }
            None => {
                return Err(FormatError::InvalidFirstField {
                    struct_name: name,
                    found: "no fields".to_string(),
                });
            }
        }
        self.insert(name, fields, true)
    }

    fn insert(&mut self, name: String, fields: Vec<Field>, top_level: bool) -> Result<StructId> {
        if self.by_name.contains_key(&name) {
            return Err(FormatError::DuplicateStruct(name));
        }
        if fields.is_empty() {
            return Err(FormatError::EmptyStruct(name));
        }
        if self.defs.len() >= u16::MAX as usize {
            return Err(FormatError::TooManyStructs(self.defs.len() + 1));
        }

        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(FormatError::DuplicateField {
                    struct_name: name,
                    field: field.name.clone(),
                });
            }
            if let Some(target) = field.kind.target()
                && target.index() > self.defs.len()
            {
                return Err(FormatError::UnknownStruct {
                    struct_name: name,
                    target: target.0,
                });
            }
        }

        let id = StructId(self.defs.len() as u16);
        let def = StructDef::new(name.clone(), fields, top_level);
        debug!(
            struct_name = %name,
            id = %id,
            c_size = def.c_size(),
            fields = def.fields().len(),
            "defined struct"
        );
        self.defs.push(def);
        self.by_name.insert(name, id);
        Ok(id)
    }

    /// # Panics
    /// Panics if `id` was not issued by this schema.
    pub fn get(&self, id: StructId) -> &StructDef {
        &self.defs[id.index()]
    }

    pub fn try_get(&self, id: StructId) -> Option<&StructDef> {
        self.defs.get(id.index())
    }

    pub fn by_name(&self, name: &str) -> Option<StructId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// All definitions in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (StructId, &StructDef)> {
        self.defs
            .iter()
            .enumerate()
            .map(|(i, def)| (StructId(i as u16), def))
    }

    /// Structs reachable from `roots`, dependencies before dependents.
    ///
    /// This is the order C declarations must appear in. Each struct is
    /// listed once even when several roots share it.
    pub fn reachable(&self, roots: &[StructId]) -> Vec<StructId> {
        let mut order = Vec::new();
        let mut visited = HashSet::new();
        // (id, children already pushed)
        let mut stack: Vec<(StructId, bool)> = roots.iter().rev().map(|&id| (id, false)).collect();

        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                order.push(id);
                continue;
            }
            if !visited.insert(id) {
                continue;
            }
            stack.push((id, true));
            let refs: Vec<_> = self.get(id).references().collect();
            for target in refs.into_iter().rev() {
                if !visited.contains(&target) {
                    stack.push((target, false));
                }
            }
        }

        order
    }

    /// Whether struct `new` in this schema extends struct `old` in `older`.
    ///
    /// Applies [`StructDef::is_superset_of`] to the pair and then to every
    /// pair of structs referenced from matching field positions.
    pub fn is_superset_of(&self, new: StructId, older: &Schema, old: StructId) -> bool {
        let mut visited = HashSet::new();
        let mut stack = vec![(new, old)];

        while let Some((new, old)) = stack.pop() {
            if !visited.insert((new, old)) {
                continue;
            }
            let (Some(new_def), Some(old_def)) = (self.try_get(new), older.try_get(old)) else {
                return false;
            };
            if !new_def.is_superset_of(old_def) {
                return false;
            }
            for (new_field, old_field) in new_def.fields().iter().zip(old_def.fields()) {
                if let (Some(a), Some(b)) = (new_field.kind.target(), old_field.kind.target()) {
                    stack.push((a, b));
                }
            }
        }

        true
    }
}
