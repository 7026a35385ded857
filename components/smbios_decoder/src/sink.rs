//! Result sink abstraction and the per-structure decode context
//!
//! Decoders never format output themselves. They push `(group, name, value)` triples into a [`ResultSink`]
//! through a [`DecodeContext`], which owns the group of the structure being decoded.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

extern crate alloc;

#[cfg(any(test, feature = "mockall"))]
use mockall::automock;

use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};

use crate::{
    format::{format_enum, format_flags, format_flags64, format_hex, format_size, EnumTable, FlagTable, LabelList},
    strings::{resolve, INVALID_STRING_INDEX},
    walker::{Field, Structure},
};

/// Identifies one group of fields, one per decoded structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u32);

/// Consumer of decoded output.
#[cfg_attr(any(test, feature = "mockall"), automock)]
pub trait ResultSink {
    /// Opens a new group labelled `label`. Called once before the fields of each structure.
    fn begin_group(&mut self, label: &str) -> GroupId;

    /// Adds one field to `group`.
    fn add_field(&mut self, group: GroupId, name: &str, value: &str);
}

/// A group recorded by [`CollectingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedGroup {
    /// Id handed back by [`ResultSink::begin_group`].
    pub id: GroupId,
    /// Group label, e.g. "Processor".
    pub label: String,
}

/// A field recorded by [`CollectingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedField {
    /// Group the field was added to.
    pub group: GroupId,
    /// Field label.
    pub name: String,
    /// Rendered value.
    pub value: String,
}

/// A [`ResultSink`] that keeps everything in memory, in emission order.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    groups: Vec<DecodedGroup>,
    fields: Vec<DecodedField>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every group, in the order it was opened.
    pub fn groups(&self) -> &[DecodedGroup] {
        &self.groups
    }

    /// Every field, in emission order.
    pub fn fields(&self) -> &[DecodedField] {
        &self.fields
    }

    /// Labels of every group, in order.
    pub fn group_labels(&self) -> Vec<&str> {
        self.groups.iter().map(|group| group.label.as_str()).collect()
    }

    /// The fields of one group as `(name, value)` pairs, in emission order.
    pub fn fields_in(&self, group: GroupId) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .filter(|field| field.group == group)
            .map(|field| (field.name.as_str(), field.value.as_str()))
            .collect()
    }

    /// The value of the first field called `name` in `group`.
    pub fn value(&self, group: GroupId, name: &str) -> Option<&str> {
        self.fields.iter().find(|field| field.group == group && field.name == name).map(|field| field.value.as_str())
    }
}

impl ResultSink for CollectingSink {
    fn begin_group(&mut self, label: &str) -> GroupId {
        let id = GroupId(self.groups.len() as u32);
        self.groups.push(DecodedGroup { id, label: label.to_string() });
        id
    }

    fn add_field(&mut self, group: GroupId, name: &str, value: &str) {
        self.fields.push(DecodedField { group, name: name.to_string(), value: value.to_string() });
    }
}

/// Forwards to another sink while counting what passes through. Counters live for one decode pass.
pub(crate) struct CountingSink<'s> {
    inner: &'s mut dyn ResultSink,
    pub(crate) groups: usize,
    pub(crate) fields: usize,
}

impl<'s> CountingSink<'s> {
    pub(crate) fn new(inner: &'s mut dyn ResultSink) -> Self {
        Self { inner, groups: 0, fields: 0 }
    }
}

impl ResultSink for CountingSink<'_> {
    fn begin_group(&mut self, label: &str) -> GroupId {
        self.groups += 1;
        self.inner.begin_group(label)
    }

    fn add_field(&mut self, group: GroupId, name: &str, value: &str) {
        self.fields += 1;
        self.inner.add_field(group, name, value);
    }
}

/// Emission builder bound to one structure and the group opened for it.
pub struct DecodeContext<'s, 'a> {
    sink: &'s mut dyn ResultSink,
    structure: Structure<'a>,
    group: GroupId,
}

impl<'s, 'a> DecodeContext<'s, 'a> {
    /// Opens the group `label` for `structure`.
    pub fn begin(sink: &'s mut dyn ResultSink, structure: &Structure<'a>, label: &str) -> Self {
        let group = sink.begin_group(label);
        Self { sink, structure: *structure, group }
    }

    /// The group fields are emitted into.
    pub fn group(&self) -> GroupId {
        self.group
    }

    /// The structure being decoded.
    pub fn structure(&self) -> Structure<'a> {
        self.structure
    }

    /// Emits a preformatted value.
    pub fn text(&mut self, name: &str, value: &str) {
        self.sink.add_field(self.group, name, value);
    }

    /// Emits the structure handle. Every decoder leads with it.
    pub fn handle(&mut self) {
        let handle = self.structure.header().handle;
        self.hex("Handle", handle as u64);
    }

    /// Emits the string whose index is stored in the byte at `field`.
    ///
    /// Nothing is emitted when the field is absent or holds index 0.
    pub fn string(&mut self, name: &str, field: Field) {
        if let Some(index) = self.structure.byte(field) {
            self.string_index(name, index);
        }
    }

    /// Emits string `index` of the structure, or a placeholder if the index is out of range.
    pub fn string_index(&mut self, name: &str, index: u8) {
        match resolve(&self.structure, index) {
            Ok(Some(value)) => self.text(name, &value),
            Ok(None) => {}
            Err(error) => {
                log::trace!("SMBIOS handle {:#06x} field {}: {}", self.structure.header().handle, name, error);
                self.text(name, INVALID_STRING_INDEX);
            }
        }
    }

    pub fn enumeration(&mut self, name: &str, value: u32, table: &EnumTable) {
        self.text(name, format_enum(value, table));
    }

    pub fn flags(&mut self, name: &str, value: u32, table: &FlagTable) {
        let rendered = format_flags(value, table);
        self.text(name, &rendered);
    }

    pub fn flags64(&mut self, name: &str, value: u64, low: &FlagTable, high: &FlagTable) {
        let rendered = format_flags64(value, low, high);
        self.text(name, &rendered);
    }

    /// Emits a byte count in human readable units.
    pub fn size(&mut self, name: &str, bytes: u64) {
        let rendered = format_size(bytes);
        self.text(name, &rendered);
    }

    pub fn boolean(&mut self, name: &str, value: bool) {
        self.text(name, if value { "true" } else { "false" });
    }

    pub fn hex(&mut self, name: &str, value: u64) {
        let rendered = format_hex(value);
        self.text(name, &rendered);
    }

    pub fn number(&mut self, name: &str, value: u64) {
        let rendered = value.to_string();
        self.text(name, &rendered);
    }

    /// Emits `value` immediately followed by `unit`, e.g. `" MHz"` or `"U"`.
    pub fn number_with_unit(&mut self, name: &str, value: u64, unit: &str) {
        let rendered = format!("{value}{unit}");
        self.text(name, &rendered);
    }

    /// Emits a joined label list, or nothing if the list is empty.
    pub fn labels(&mut self, name: &str, list: LabelList) {
        if let Some(rendered) = list.finish() {
            self.text(name, &rendered);
        }
    }
}
