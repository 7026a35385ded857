//! Value formatting helpers shared by every structure decoder
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

extern crate alloc;

use alloc::{
    format,
    string::{String, ToString},
};
use core::fmt::Write;

/// Ordered (value, label) pairs. The first exact match wins.
pub type EnumTable = [(u32, &'static str)];

/// Ordered (mask, label) pairs. Every mask fully set in a value contributes its label.
pub type FlagTable = [(u32, &'static str)];

/// Rendered for enumeration values missing from their table.
pub const UNDEFINED: &str = "Undefined";

const LIST_SEPARATOR: &str = ", ";

const SIZE_UNITS: [&str; 7] = ["bytes", "kB", "MB", "GB", "TB", "PB", "EB"];

/// Looks `value` up in `table`, falling back to [`UNDEFINED`].
pub fn format_enum(value: u32, table: &EnumTable) -> &'static str {
    table.iter().find(|(key, _)| *key == value).map(|(_, label)| *label).unwrap_or(UNDEFINED)
}

/// Joins the labels of every mask of `table` set in `value`. Empty when nothing matches.
pub fn flag_labels(value: u32, table: &FlagTable) -> String {
    let mut list = LabelList::new();
    for (mask, label) in table {
        list.push_if(*mask != 0 && value & mask == *mask, label);
    }
    list.finish().unwrap_or_default()
}

/// Renders `value` as "labels (0x..)", or "(0x..)" alone when no label matches.
pub fn format_flags(value: u32, table: &FlagTable) -> String {
    format_flags64(value as u64, table, &[])
}

/// Renders a 64-bit flag field, matching the low and high halves against separate tables.
pub fn format_flags64(value: u64, low: &FlagTable, high: &FlagTable) -> String {
    let low = flag_labels(value as u32, low);
    let high = flag_labels((value >> 32) as u32, high);

    let labels = match (low.is_empty(), high.is_empty()) {
        (false, false) => format!("{low}{LIST_SEPARATOR}{high}"),
        (false, true) => low,
        _ => high,
    };

    if labels.is_empty() {
        format!("({})", format_hex(value))
    } else {
        format!("{labels} ({})", format_hex(value))
    }
}

/// Renders a byte count in the largest binary unit that keeps it at or above one, with at most two decimals.
///
/// ```
/// use smbios_decoder::format::format_size;
///
/// assert_eq!(format_size(512), "512 bytes");
/// assert_eq!(format_size(131072), "128 kB");
/// assert_eq!(format_size(1536 * 1024 * 1024), "1.5 GB");
/// ```
pub fn format_size(bytes: u64) -> String {
    let mut unit = 0;
    while unit + 1 < SIZE_UNITS.len() && bytes >> (10 * (unit + 1)) != 0 {
        unit += 1;
    }

    if unit == 0 {
        return format!("{bytes} {}", SIZE_UNITS[0]);
    }

    let mut hundredths = rounded_hundredths(bytes, unit);
    // Rounding can reach 1024 of the chosen unit.
    if hundredths >= 1024 * 100 && unit + 1 < SIZE_UNITS.len() {
        unit += 1;
        hundredths = rounded_hundredths(bytes, unit);
    }
    let whole = hundredths / 100;
    let fraction = hundredths % 100;

    let mut rendered = whole.to_string();
    if fraction != 0 {
        let digits = format!("{fraction:02}");
        rendered.push('.');
        rendered.push_str(digits.trim_end_matches('0'));
    }
    format!("{rendered} {}", SIZE_UNITS[unit])
}

fn rounded_hundredths(bytes: u64, unit: usize) -> u128 {
    let divisor = 1u128 << (10 * unit);
    (bytes as u128 * 100 + divisor / 2) / divisor
}

/// Renders `value` as lower case hex with a `0x` prefix.
pub fn format_hex(value: u64) -> String {
    format!("{value:#x}")
}

/// Renders handles as hex values joined with ", ".
pub fn format_handle_list<I>(handles: I) -> String
where
    I: IntoIterator<Item = u16>,
{
    let mut rendered = String::new();
    for (index, handle) in handles.into_iter().enumerate() {
        if index != 0 {
            rendered.push_str(LIST_SEPARATOR);
        }
        // Writing into a String cannot fail.
        let _ = write!(rendered, "{handle:#x}");
    }
    rendered
}

/// Accumulates labels into a ", " separated list.
///
/// Each label is pushed with its separator and exactly one trailing separator is removed by [`LabelList::finish`].
#[derive(Debug, Default, Clone)]
pub struct LabelList {
    buffer: String,
}

impl LabelList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `label`.
    pub fn push(&mut self, label: &str) {
        self.buffer.push_str(label);
        self.buffer.push_str(LIST_SEPARATOR);
    }

    /// Appends `label` when `condition` holds.
    pub fn push_if(&mut self, condition: bool, label: &str) {
        if condition {
            self.push(label);
        }
    }

    /// Returns the joined list, or `None` if nothing was pushed.
    pub fn finish(mut self) -> Option<String> {
        if self.buffer.ends_with(LIST_SEPARATOR) {
            self.buffer.truncate(self.buffer.len() - LIST_SEPARATOR.len());
        }
        (!self.buffer.is_empty()).then_some(self.buffer)
    }
}
