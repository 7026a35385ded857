//! Onboard devices (type 10) and onboard devices extended information (type 41)
//!
//! Type 10 packs a list of (type, description) pairs into one structure and type 41 describes a single device
//! with its PCI location. Both are rendered under the same group label.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

extern crate alloc;

use alloc::format;

use crate::{
    bitfields::{DeviceFunction, FlaggedType},
    config::DecoderConfig,
    sink::{DecodeContext, ResultSink},
    tables::ONBOARD_DEVICE_TYPES,
    walker::{Field, Structure},
};

const ONBOARD_DEVICES_EXTENDED: u8 = 41;

const DEVICE_ENTRIES: Field = Field::new(0x04, 2, 0);
const DEVICE_ENTRY_LENGTH: usize = 2;

const REFERENCE_DESIGNATION: Field = Field::new(0x04, 2, 6);
const DEVICE_TYPE: Field = Field::new(0x05, 2, 6);
const DEVICE_TYPE_INSTANCE: Field = Field::new(0x06, 2, 6);
const SEGMENT_GROUP: Field = Field::new(0x07, 2, 6);
const BUS_NUMBER: Field = Field::new(0x09, 2, 6);
const DEVICE_FUNCTION: Field = Field::new(0x0A, 2, 6);

pub fn decode(structure: &Structure<'_>, sink: &mut dyn ResultSink, _config: &DecoderConfig) {
    let mut context = DecodeContext::begin(sink, structure, "Onboard device");
    context.handle();

    if structure.header().r#type == ONBOARD_DEVICES_EXTENDED {
        decode_extended(&mut context);
    } else {
        decode_entries(&mut context);
    }
}

fn decode_entries(context: &mut DecodeContext<'_, '_>) {
    let structure = context.structure();
    let count = (structure.header().length as usize).saturating_sub(DEVICE_ENTRIES.offset) / DEVICE_ENTRY_LENGTH;

    for index in 0..count {
        let entry = DEVICE_ENTRIES.shifted(index * DEVICE_ENTRY_LENGTH);
        let (Some(kind), Some(description)) = (structure.byte(entry), structure.byte(entry.shifted(1))) else {
            break;
        };
        let kind = FlaggedType::from(kind);
        let number = index + 1;

        context.string_index(&format!("Device #{number} description"), description);
        context.enumeration(&format!("Device #{number} type"), kind.value() as u32, ONBOARD_DEVICE_TYPES);
        context.boolean(&format!("Device #{number} enabled"), kind.flag());
    }
}

fn decode_extended(context: &mut DecodeContext<'_, '_>) {
    let structure = context.structure();

    context.string("Reference designation", REFERENCE_DESIGNATION);

    if let Some(kind) = structure.byte(DEVICE_TYPE).map(FlaggedType::from) {
        context.enumeration("Type", kind.value() as u32, ONBOARD_DEVICE_TYPES);
        context.boolean("Enabled", kind.flag());
    }

    if let Some(instance) = structure.byte(DEVICE_TYPE_INSTANCE) {
        context.number("Type instance", instance as u64);
    }

    if let Some(segment) = structure.word(SEGMENT_GROUP) {
        context.number("Segment group", segment as u64);
    }

    if let Some(bus) = structure.byte(BUS_NUMBER) {
        context.number("Bus number", bus as u64);
    }

    if let Some(devfn) = structure.byte(DEVICE_FUNCTION).map(DeviceFunction::from) {
        context.number("Device number", devfn.device() as u64);
        context.number("Function number", devfn.function() as u64);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec;

    use super::*;
    use crate::{decoders::test_support::decode_one, walker::SmbiosVersion};

    #[test]
    fn test_decode_onboard_device_list() {
        let table = [
            10, 0x08, 0x0A, 0x00, // Type 10, Length 8, Handle 0xA
            0x83, 1, // Enabled video
            0x05, 2, // Disabled Ethernet
            b'V', b'G', b'A', 0, b'L', b'A', b'N', 0, 0,
        ];

        let sink = decode_one(&table, SmbiosVersion::new(2, 0), decode);

        assert_eq!(sink.group_labels(), vec!["Onboard device"]);
        assert_eq!(
            sink.fields_in(sink.groups()[0].id),
            vec![
                ("Handle", "0xa"),
                ("Device #1 description", "VGA"),
                ("Device #1 type", "Video"),
                ("Device #1 enabled", "true"),
                ("Device #2 description", "LAN"),
                ("Device #2 type", "Ethernet"),
                ("Device #2 enabled", "false"),
            ]
        );
    }

    #[test]
    fn test_odd_length_ignores_partial_entry() {
        let table = [10, 0x07, 0x0A, 0x00, 0x83, 1, 0x05, b'V', b'G', b'A', 0, 0];

        let sink = decode_one(&table, SmbiosVersion::new(2, 0), decode);
        let group = sink.groups()[0].id;

        assert_eq!(sink.value(group, "Device #1 type"), Some("Video"));
        assert_eq!(sink.value(group, "Device #2 type"), None);
    }

    #[test]
    fn test_decode_onboard_device_extended() {
        let table = [
            41, 0x0B, 0x29, 0x00, // Type 41, Length 0xB, Handle 0x29
            1,    // Reference designation
            0x85, // Enabled Ethernet
            1,    // Type instance
            0x00, 0x00, // Segment group
            0x03, // Bus number
            0x10, // Device 2, function 0
            b'O', b'n', b'b', b'o', b'a', b'r', b'd', b' ', b'L', b'A', b'N', 0, 0,
        ];

        let sink = decode_one(&table, SmbiosVersion::new(3, 0), decode);

        assert_eq!(
            sink.fields_in(sink.groups()[0].id),
            vec![
                ("Handle", "0x29"),
                ("Reference designation", "Onboard LAN"),
                ("Type", "Ethernet"),
                ("Enabled", "true"),
                ("Type instance", "1"),
                ("Segment group", "0"),
                ("Bus number", "3"),
                ("Device number", "2"),
                ("Function number", "0"),
            ]
        );

        // Type 41 fields need 2.6.
        let sink = decode_one(&table, SmbiosVersion::new(2, 5), decode);
        assert_eq!(sink.fields_in(sink.groups()[0].id), vec![("Handle", "0x29")]);
    }
}
