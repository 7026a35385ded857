//! Per-type structure decoders
//!
//! Each decoder opens one group per structure, emits the handle first and then every field the structure's
//! length and the table version allow, in a fixed order.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

extern crate alloc;

use alloc::{format, vec::Vec};

use crate::{
    config::DecoderConfig,
    dispatch::type_label,
    format::UNDEFINED,
    sink::{DecodeContext, ResultSink},
    walker::{Field, Structure},
};

pub mod baseboard;
pub mod cache;
pub mod chassis;
pub mod firmware;
pub mod memory;
pub mod oem;
pub mod onboard;
pub mod port;
pub mod processor;
pub mod slot;
pub mod system;

/// Decoder for assigned types whose fields are not decoded. Emits the group and the handle.
pub fn recognized(structure: &Structure<'_>, sink: &mut dyn ResultSink, _config: &DecoderConfig) {
    let label = type_label(structure.header().r#type).unwrap_or(UNDEFINED);
    DecodeContext::begin(sink, structure, label).handle();
}

/// Fallback for type codes missing from the registry.
pub fn undefined(structure: &Structure<'_>, sink: &mut dyn ResultSink, config: &DecoderConfig) {
    let header = structure.header();
    if !config.show_undefined_types {
        log::trace!("SMBIOS undefined type {} handle {:#06x} suppressed", header.r#type, header.handle);
        return;
    }

    let label = format!("Type {}", header.r#type);
    let mut context = DecodeContext::begin(sink, structure, &label);
    context.handle();
    context.number("Length", header.length as u64);
}

/// Reads up to `count` consecutive handles starting at `first`, stopping at the first one outside the fixed body.
pub(crate) fn handle_array(structure: &Structure<'_>, first: Field, count: usize) -> Vec<u16> {
    (0..count).map_while(|index| structure.word(first.shifted(index * 2))).collect()
}

/// Resolves a byte count field that uses 0xFF to redirect to a word wide field.
///
/// 0 means unknown and yields `None`, as does a redirect to an absent wide field.
pub(crate) fn widened_count(structure: &Structure<'_>, narrow: Field, wide: Field) -> Option<u16> {
    match structure.byte(narrow)? {
        0 => None,
        u8::MAX => structure.word(wide),
        count => Some(count as u16),
    }
}


#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec;

    use super::*;
    use crate::walker::{walk, SmbiosVersion};

    #[test]
    fn test_handle_array_stops_at_length() {
        let table = [
            2, 0x09, 0x00, 0x00, // Header, length 9
            0x01, 0x00, 0x02, 0x00, // Two handles
            0x03, // Half a handle
            0, 0,
        ];
        let structure = walk(&table, SmbiosVersion::new(3, 0)).next().unwrap();

        assert_eq!(handle_array(&structure, Field::new(0x04, 2, 0), 3), vec![1, 2]);
        assert!(handle_array(&structure, Field::new(0x04, 2, 0), 0).is_empty());
    }

    #[test]
    fn test_widened_count() {
        let table = [
            4, 0x08, 0x00, 0x00, // Header, length 8
            0xFF, 0x00, // Narrow sentinel, narrow zero
            200, 0, // Wide value
            0, 0,
        ];
        let structure = walk(&table, SmbiosVersion::new(3, 0)).next().unwrap();
        let wide = Field::new(0x06, 3, 0);

        assert_eq!(widened_count(&structure, Field::new(0x04, 2, 5), wide), Some(200));
        assert_eq!(widened_count(&structure, Field::new(0x05, 2, 5), wide), None);
        assert_eq!(widened_count(&structure, Field::new(0x04, 2, 5), Field::new(0x08, 3, 0)), None);
    }
}
