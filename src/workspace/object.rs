//! Field records
//!
//! A [`WorkspaceObject`] is an ordered list of typed slots. The fixed part has
//! exactly as many slots as its schema declares; extensible groups live in
//! their own owned container so inserting or erasing a group never disturbs
//! the fixed fields.

use crate::idd::{IddObject, IddObjectType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a record, independent of its position anywhere
pub type Handle = Uuid;

/// Format a handle the way internal-dialect files write it
pub fn format_handle(handle: &Handle) -> String {
    format!("{{{}}}", handle)
}

/// Parse a `{uuid}` (braces optional) handle string
pub fn parse_handle(value: &str) -> Option<Handle> {
    let trimmed = value.trim().trim_start_matches('{').trim_end_matches('}');
    Uuid::parse_str(trimmed).ok()
}

/// Value held by one field slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    #[default]
    Blank,
    String(String),
    Double(f64),
    Integer(i64),
    Pointer(Handle),
}

impl FieldValue {
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Blank)
    }

    /// Text form, without resolving pointers
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Blank => None,
            FieldValue::String(s) => Some(s.clone()),
            FieldValue::Double(v) => Some(format_number(*v)),
            FieldValue::Integer(v) => Some(v.to_string()),
            FieldValue::Pointer(h) => Some(format_handle(h)),
        }
    }
}

/// Shortest representation that reads back to the same value
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// One record: handle, type and positional field values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceObject {
    handle: Handle,
    object_type: IddObjectType,
    fields: Vec<FieldValue>,
    groups: Vec<Vec<FieldValue>>,
    group_len: usize,
}

impl WorkspaceObject {
    /// Create a blank record shaped by `idd`
    pub fn new(handle: Handle, idd: &IddObject) -> Self {
        Self {
            handle,
            object_type: idd.object_type(),
            fields: vec![FieldValue::Blank; idd.num_fixed_fields()],
            groups: Vec::new(),
            group_len: idd.extensible_group_len(),
        }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn object_type(&self) -> IddObjectType {
        self.object_type
    }

    pub fn num_fixed_fields(&self) -> usize {
        self.fields.len()
    }

    pub fn num_fields(&self) -> usize {
        self.fields.len() + self.groups.len() * self.group_len
    }

    pub fn num_extensible_groups(&self) -> usize {
        self.groups.len()
    }

    pub fn extensible_group_len(&self) -> usize {
        self.group_len
    }

    pub fn extensible_groups(&self) -> &[Vec<FieldValue>] {
        &self.groups
    }

    /// Field index of the first slot of group `group`
    pub fn group_start(&self, group: usize) -> usize {
        self.fields.len() + group * self.group_len
    }

    /// Stored value at `index`; `None` past the end of the record
    pub fn value(&self, index: usize) -> Option<&FieldValue> {
        if index < self.fields.len() {
            return self.fields.get(index);
        }
        let (group, offset) = self.locate(index)?;
        self.groups.get(group).and_then(|g| g.get(offset))
    }

    /// Iterate every slot in field order
    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.iter().chain(self.groups.iter().flatten())
    }

    /// Mutable slot at `index`, growing extensible groups to reach it
    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<&mut FieldValue> {
        if index < self.fields.len() {
            return self.fields.get_mut(index);
        }
        let (group, offset) = self.locate(index)?;
        while self.groups.len() <= group {
            self.groups.push(vec![FieldValue::Blank; self.group_len]);
        }
        self.groups.get_mut(group).and_then(|g| g.get_mut(offset))
    }

    /// Mutable slot at `index` without growing the record
    pub(crate) fn existing_slot_mut(&mut self, index: usize) -> Option<&mut FieldValue> {
        if index < self.num_fields() {
            self.slot_mut(index)
        } else {
            None
        }
    }

    pub(crate) fn insert_group(&mut self, at: usize) -> bool {
        if self.group_len == 0 || at > self.groups.len() {
            return false;
        }
        self.groups.insert(at, vec![FieldValue::Blank; self.group_len]);
        true
    }

    pub(crate) fn erase_group(&mut self, group: usize) -> Option<Vec<FieldValue>> {
        (group < self.groups.len()).then(|| self.groups.remove(group))
    }

    pub(crate) fn clear_groups(&mut self) {
        self.groups.clear();
    }

    /// Blank every slot pointing at `target`; returns how many changed
    pub(crate) fn clear_pointers_to(&mut self, target: Handle) -> usize {
        let mut cleared = 0;
        for value in self.fields.iter_mut().chain(self.groups.iter_mut().flatten()) {
            if *value == FieldValue::Pointer(target) {
                *value = FieldValue::Blank;
                cleared += 1;
            }
        }
        cleared
    }

    fn locate(&self, index: usize) -> Option<(usize, usize)> {
        if self.group_len == 0 || index < self.fields.len() {
            return None;
        }
        let offset = index - self.fields.len();
        Some((offset / self.group_len, offset % self.group_len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idd::IddFile;

    #[test]
    fn test_handle_formatting() {
        let handle = Uuid::new_v4();
        let text = format_handle(&handle);
        assert!(text.starts_with('{') && text.ends_with('}'));
        assert_eq!(parse_handle(&text), Some(handle));
        assert_eq!(parse_handle("not a handle"), None);
    }

    #[test]
    fn test_extensible_slots_grow_groups() {
        let idd = IddFile::energyplus();
        let schema = idd.object(IddObjectType::ScheduleCompact).unwrap();
        let mut object = WorkspaceObject::new(Uuid::new_v4(), schema);
        assert_eq!(object.num_fields(), 2);

        *object.slot_mut(4).unwrap() = FieldValue::String("Until: 24:00".to_string());
        assert_eq!(object.num_extensible_groups(), 3);
        assert_eq!(object.num_fields(), 5);
        assert_eq!(object.value(3), Some(&FieldValue::Blank));
        assert!(object.value(5).is_none());
    }

    #[test]
    fn test_fixed_records_do_not_grow() {
        let idd = IddFile::energyplus();
        let schema = idd.object(IddObjectType::SiteWaterMainsTemperature).unwrap();
        let mut object = WorkspaceObject::new(Uuid::new_v4(), schema);
        assert!(object.slot_mut(4).is_none());
        assert_eq!(object.num_fields(), 4);
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(9.69), "9.69");
        assert_eq!(format_number(28.1), "28.1");
        assert_eq!(format_number(80.0), "80");
    }
}
