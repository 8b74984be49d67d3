//! Workspace: an arena of field records sharing one handle namespace
//!
//! Provides typed get/set by field index, reference resolution between
//! records and reverse lookup of the fields pointing at a record. The same
//! type serves both dialects; which one is decided by the [`IddFile`] it was
//! created with.

pub mod object;
pub mod text;

pub use object::{format_handle, format_number, parse_handle, FieldValue, Handle, WorkspaceObject};
pub use text::{read_workspace, write_workspace, ParseError};

use crate::idd::{refs, Dialect, IddField, IddFieldKind, IddFile, IddObject, IddObjectType};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

static NUMBERED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<base>.*?) (?P<n>\d+)$").unwrap_or_else(|e| panic!("invalid name pattern: {e}"))
});

/// Collection of records of one dialect
#[derive(Debug, Clone)]
pub struct Workspace {
    idd: Arc<IddFile>,
    objects: HashMap<Handle, WorkspaceObject>,
    order: Vec<Handle>,
}

impl Workspace {
    /// Create an empty workspace bound to a schema file
    pub fn new(idd: Arc<IddFile>) -> Self {
        Self {
            idd,
            objects: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Empty internal-dialect workspace
    pub fn openstudio() -> Self {
        Self::new(IddFile::openstudio())
    }

    /// Empty external-dialect workspace
    pub fn energyplus() -> Self {
        Self::new(IddFile::energyplus())
    }

    pub fn idd(&self) -> &Arc<IddFile> {
        &self.idd
    }

    pub fn dialect(&self) -> Dialect {
        self.idd.dialect()
    }

    pub fn num_objects(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.objects.contains_key(&handle)
    }

    /// Add a blank record of `object_type`
    ///
    /// Returns `None` when the type is not part of this dialect or when a
    /// unique type already has an instance.
    pub fn add_object(&mut self, object_type: IddObjectType) -> Option<Handle> {
        self.add_object_with_handle(object_type, Uuid::new_v4())
    }

    /// Add a blank record with a caller-chosen handle
    pub fn add_object_with_handle(
        &mut self,
        object_type: IddObjectType,
        handle: Handle,
    ) -> Option<Handle> {
        if self.objects.contains_key(&handle) {
            return None;
        }
        let idd = self.idd.object(object_type)?;
        if idd.is_unique() && !self.objects_by_type(object_type).is_empty() {
            return None;
        }
        let record = WorkspaceObject::new(handle, idd);
        let prefix = idd.name_index().map(|_| idd.default_name_prefix());
        self.objects.insert(handle, record);
        self.order.push(handle);
        if let Some(prefix) = prefix {
            self.set_name(handle, &format!("{prefix} 1"));
        }
        debug!(object_type = %object_type, %handle, "added object");
        Some(handle)
    }

    pub fn object(&self, handle: Handle) -> Option<&WorkspaceObject> {
        self.objects.get(&handle)
    }

    pub fn object_type(&self, handle: Handle) -> Option<IddObjectType> {
        self.object(handle).map(|o| o.object_type())
    }

    /// Schema of the record behind `handle`
    pub fn idd_object(&self, handle: Handle) -> Option<&IddObject> {
        self.object_type(handle).and_then(|t| self.idd.object(t))
    }

    /// Records in insertion order
    pub fn objects(&self) -> impl Iterator<Item = &WorkspaceObject> {
        self.order.iter().filter_map(|h| self.objects.get(h))
    }

    pub fn handles(&self) -> &[Handle] {
        &self.order
    }

    pub fn objects_by_type(&self, object_type: IddObjectType) -> Vec<Handle> {
        self.objects()
            .filter(|o| o.object_type() == object_type)
            .map(|o| o.handle())
            .collect()
    }

    /// Record of `object_type` with the given name, ignoring case
    pub fn object_by_name(&self, object_type: IddObjectType, name: &str) -> Option<Handle> {
        self.objects_by_type(object_type)
            .into_iter()
            .find(|h| self.name_matches(*h, name))
    }

    /// First record named `name` that may be referenced from a field of `classes`
    pub fn object_by_reference(&self, classes: &[&str], name: &str) -> Option<Handle> {
        self.order.iter().copied().find(|h| {
            self.idd_object(*h)
                .is_some_and(|idd| idd.belongs_to_any(classes))
                && self.name_matches(*h, name)
        })
    }

    fn name_matches(&self, handle: Handle, name: &str) -> bool {
        self.name(handle)
            .is_some_and(|n| n.eq_ignore_ascii_case(name.trim()))
    }

    pub fn name(&self, handle: Handle) -> Option<String> {
        let index = self.idd_object(handle)?.name_index()?;
        match self.object(handle)?.value(index)? {
            FieldValue::String(name) => Some(name.clone()),
            _ => None,
        }
    }

    /// Set a record's name, made unique among records sharing its type or reference classes
    ///
    /// Returns the name actually stored.
    pub fn set_name(&mut self, handle: Handle, name: &str) -> Option<String> {
        let index = self.idd_object(handle)?.name_index()?;
        let name = name.trim();
        let unique = if name.is_empty() {
            String::new()
        } else {
            self.unique_name(handle, name)
        };
        let slot = self.objects.get_mut(&handle)?.slot_mut(index)?;
        *slot = if unique.is_empty() {
            FieldValue::Blank
        } else {
            FieldValue::String(unique.clone())
        };
        Some(unique)
    }

    fn unique_name(&self, handle: Handle, name: &str) -> String {
        if !self.name_in_use(handle, name) {
            return name.to_string();
        }
        let base = NUMBERED_NAME
            .captures(name)
            .and_then(|c| c.name("base").map(|m| m.as_str().to_string()))
            .unwrap_or_else(|| name.to_string());
        (1..)
            .map(|n| format!("{base} {n}"))
            .find(|candidate| !self.name_in_use(handle, candidate))
            .unwrap_or_else(|| name.to_string())
    }

    fn name_in_use(&self, handle: Handle, name: &str) -> bool {
        let Some(idd) = self.idd_object(handle) else {
            return false;
        };
        let object_type = idd.object_type();
        let classes: Vec<&str> = idd
            .references()
            .iter()
            .copied()
            .filter(|c| *c != refs::ALL_OBJECTS)
            .collect();
        self.objects().any(|other| {
            other.handle() != handle
                && (other.object_type() == object_type
                    || self
                        .idd
                        .object(other.object_type())
                        .is_some_and(|o| !classes.is_empty() && o.belongs_to_any(&classes)))
                && self.name_matches(other.handle(), name)
        })
    }

    fn field_schema(&self, handle: Handle, index: usize) -> Option<&IddField> {
        self.idd_object(handle)?.field(index)
    }

    /// Raw stored value, no defaults applied
    pub fn value(&self, handle: Handle, index: usize) -> Option<&FieldValue> {
        self.object(handle)?.value(index)
    }

    /// Store a value without validation
    pub(crate) fn set_value(&mut self, handle: Handle, index: usize, value: FieldValue) -> bool {
        match self.objects.get_mut(&handle).and_then(|o| o.slot_mut(index)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Whether the field is blank (and so reads back as its schema default)
    pub fn is_field_empty(&self, handle: Handle, index: usize) -> bool {
        self.value(handle, index).is_none_or(FieldValue::is_blank)
    }

    pub fn num_fields(&self, handle: Handle) -> usize {
        self.object(handle).map_or(0, WorkspaceObject::num_fields)
    }

    /// Text value of a field, falling back to the schema default for blanks
    ///
    /// Pointer fields read back as the target's name; the handle field reads
    /// back as the record's own handle.
    pub fn get_string(&self, handle: Handle, index: usize) -> Option<String> {
        let field = self.field_schema(handle, index)?;
        if field.kind == IddFieldKind::Handle {
            return Some(format_handle(&handle));
        }
        match self.value(handle, index) {
            None | Some(FieldValue::Blank) => field.default.map(str::to_string),
            Some(FieldValue::Pointer(target)) => self.name(*target),
            Some(other) => other.as_text(),
        }
    }

    /// Numeric value of a field, falling back to the schema default for blanks
    ///
    /// Sentinel strings such as `autosize` yield `None`.
    pub fn get_double(&self, handle: Handle, index: usize) -> Option<f64> {
        let field = self.field_schema(handle, index)?;
        match self.value(handle, index) {
            None | Some(FieldValue::Blank) => field.default.and_then(|d| d.trim().parse().ok()),
            Some(FieldValue::Double(v)) => Some(*v),
            Some(FieldValue::Integer(v)) => Some(*v as f64),
            Some(FieldValue::String(s)) => s.trim().parse().ok(),
            Some(FieldValue::Pointer(_)) => None,
        }
    }

    pub fn get_int(&self, handle: Handle, index: usize) -> Option<i64> {
        let field = self.field_schema(handle, index)?;
        match self.value(handle, index) {
            None | Some(FieldValue::Blank) => field.default.and_then(|d| d.trim().parse().ok()),
            Some(FieldValue::Integer(v)) => Some(*v),
            Some(FieldValue::Double(v)) if v.fract() == 0.0 => Some(*v as i64),
            Some(FieldValue::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Resolve a pointer field to its target
    pub fn get_target(&self, handle: Handle, index: usize) -> Option<Handle> {
        match self.value(handle, index)? {
            FieldValue::Pointer(target) if self.contains(*target) => Some(*target),
            _ => None,
        }
    }

    /// Set a field from text, validating against the schema
    pub fn set_string(&mut self, handle: Handle, index: usize, value: &str) -> bool {
        let Some(field) = self.field_schema(handle, index).cloned() else {
            return false;
        };
        let value = value.trim();
        if field.kind == IddFieldKind::Handle {
            return false;
        }
        if value.is_empty() {
            return self.set_value(handle, index, FieldValue::Blank);
        }
        if self.idd_object(handle).and_then(IddObject::name_index) == Some(index) {
            return self.set_name(handle, value).is_some();
        }
        let stored = match &field.kind {
            IddFieldKind::Handle => return false,
            IddFieldKind::Alpha => FieldValue::String(value.to_string()),
            IddFieldKind::Choice(keys) => {
                match keys.iter().find(|k| k.eq_ignore_ascii_case(value)) {
                    Some(key) => FieldValue::String((*key).to_string()),
                    None => return false,
                }
            }
            IddFieldKind::Real | IddFieldKind::Integer => {
                if field.accepts_sentinel(value) {
                    FieldValue::String(value.to_ascii_lowercase())
                } else {
                    return match value.parse::<f64>() {
                        Ok(number) => self.set_double(handle, index, number),
                        Err(_) => false,
                    };
                }
            }
            IddFieldKind::Object(classes) => match self.object_by_reference(classes, value) {
                Some(target) => FieldValue::Pointer(target),
                None => FieldValue::String(value.to_string()),
            },
        };
        self.set_value(handle, index, stored)
    }

    /// Set a numeric field, rejecting values outside the declared bounds
    pub fn set_double(&mut self, handle: Handle, index: usize, value: f64) -> bool {
        let Some(field) = self.field_schema(handle, index) else {
            return false;
        };
        if !value.is_finite() || !field.in_bounds(value) {
            return false;
        }
        let stored = match field.kind {
            IddFieldKind::Real => FieldValue::Double(value),
            IddFieldKind::Integer if value.fract() == 0.0 => FieldValue::Integer(value as i64),
            _ => return false,
        };
        self.set_value(handle, index, stored)
    }

    pub fn set_int(&mut self, handle: Handle, index: usize, value: i64) -> bool {
        let Some(field) = self.field_schema(handle, index) else {
            return false;
        };
        if !field.in_bounds(value as f64) {
            return false;
        }
        let stored = match field.kind {
            IddFieldKind::Integer => FieldValue::Integer(value),
            IddFieldKind::Real => FieldValue::Double(value as f64),
            _ => return false,
        };
        self.set_value(handle, index, stored)
    }

    /// Point a field at another record whose type belongs to the field's reference classes
    pub fn set_pointer(&mut self, handle: Handle, index: usize, target: Handle) -> bool {
        let Some(IddFieldKind::Object(classes)) = self.field_schema(handle, index).map(|f| f.kind.clone())
        else {
            return false;
        };
        let accepted = self
            .idd_object(target)
            .is_some_and(|idd| idd.belongs_to_any(classes));
        accepted && self.set_value(handle, index, FieldValue::Pointer(target))
    }

    /// Clear a field back to blank
    pub fn set_blank(&mut self, handle: Handle, index: usize) -> bool {
        if self
            .field_schema(handle, index)
            .is_none_or(|f| f.kind == IddFieldKind::Handle)
        {
            return false;
        }
        match self.objects.get_mut(&handle).and_then(|o| o.existing_slot_mut(index)) {
            Some(slot) => {
                *slot = FieldValue::Blank;
                true
            }
            None => false,
        }
    }

    pub fn num_extensible_groups(&self, handle: Handle) -> usize {
        self.object(handle).map_or(0, WorkspaceObject::num_extensible_groups)
    }

    /// Values of one extensible group
    pub fn extensible_group(&self, handle: Handle, group: usize) -> Option<&[FieldValue]> {
        self.object(handle)?
            .extensible_groups()
            .get(group)
            .map(Vec::as_slice)
    }

    /// Field index of the first slot of an extensible group
    pub fn group_start(&self, handle: Handle, group: usize) -> Option<usize> {
        self.object(handle).map(|o| o.group_start(group))
    }

    /// Append a blank extensible group, returning its group index
    pub fn push_extensible_group(&mut self, handle: Handle) -> Option<usize> {
        let object = self.objects.get_mut(&handle)?;
        let group = object.num_extensible_groups();
        object.insert_group(group).then_some(group)
    }

    /// Insert a blank extensible group before `group`, shifting later groups
    pub fn insert_extensible_group(&mut self, handle: Handle, group: usize) -> bool {
        self.objects
            .get_mut(&handle)
            .is_some_and(|o| o.insert_group(group))
    }

    /// Erase one extensible group, shifting later groups down
    pub fn erase_extensible_group(&mut self, handle: Handle, group: usize) -> bool {
        self.objects
            .get_mut(&handle)
            .and_then(|o| o.erase_group(group))
            .is_some()
    }

    pub fn clear_extensible_groups(&mut self, handle: Handle) {
        if let Some(object) = self.objects.get_mut(&handle) {
            object.clear_groups();
        }
    }

    /// Records with at least one field pointing at `target`
    pub fn sources(&self, target: Handle) -> Vec<Handle> {
        self.objects()
            .filter(|o| o.values().any(|v| *v == FieldValue::Pointer(target)))
            .map(|o| o.handle())
            .collect()
    }

    /// Indices of the fields of `source` that point at `target`
    pub fn source_indices(&self, source: Handle, target: Handle) -> Vec<usize> {
        self.object(source)
            .map(|o| {
                o.values()
                    .enumerate()
                    .filter(|(_, v)| **v == FieldValue::Pointer(target))
                    .map(|(i, _)| i)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Remove a record and blank every pointer that targeted it
    pub fn remove_object(&mut self, handle: Handle) -> Option<WorkspaceObject> {
        let removed = self.objects.remove(&handle)?;
        self.order.retain(|h| *h != handle);
        let mut cleared = 0;
        for object in self.objects.values_mut() {
            cleared += object.clear_pointers_to(handle);
        }
        debug!(object_type = %removed.object_type(), %handle, cleared, "removed object");
        Some(removed)
    }

    /// Convert name-valued object-list fields to pointers where a target now exists
    ///
    /// Returns the `(handle, index, name)` of every reference left unresolved.
    pub fn resolve_references(&mut self) -> Vec<(Handle, usize, String)> {
        let mut updates = Vec::new();
        let mut unresolved = Vec::new();
        for object in self.objects() {
            let Some(idd) = self.idd.object(object.object_type()) else {
                continue;
            };
            for (index, value) in object.values().enumerate() {
                let FieldValue::String(text) = value else {
                    continue;
                };
                let Some(IddFieldKind::Object(classes)) = idd.field(index).map(|f| &f.kind) else {
                    continue;
                };
                let target = parse_handle(text)
                    .filter(|h| self.contains(*h))
                    .or_else(|| self.object_by_reference(classes, text));
                match target {
                    Some(target) => updates.push((object.handle(), index, target)),
                    None => unresolved.push((object.handle(), index, text.clone())),
                }
            }
        }
        for (handle, index, target) in updates {
            self.set_value(handle, index, FieldValue::Pointer(target));
        }
        unresolved
    }

    /// Dump every record as JSON, in insertion order
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let objects: Vec<&WorkspaceObject> = self.objects().collect();
        serde_json::to_string_pretty(&objects)
    }
}
