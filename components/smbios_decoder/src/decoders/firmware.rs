//! Firmware information (type 0)
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use crate::{
    bitfields::ExtendedRomSize,
    config::DecoderConfig,
    sink::{DecodeContext, ResultSink},
    tables::{FIRMWARE_CHARACTERISTICS, FIRMWARE_CHARACTERISTICS_EXTENDED},
    walker::{Field, Structure},
};

const VENDOR: Field = Field::new(0x04, 2, 0);
const VERSION: Field = Field::new(0x05, 2, 0);
const STARTING_ADDRESS_SEGMENT: Field = Field::new(0x06, 2, 0);
const RELEASE_DATE: Field = Field::new(0x08, 2, 0);
const ROM_SIZE: Field = Field::new(0x09, 2, 0);
const CHARACTERISTICS: Field = Field::new(0x0A, 2, 0);
const CHARACTERISTICS_EXTENDED: Field = Field::new(0x12, 2, 4);
const MAJOR_RELEASE: Field = Field::new(0x14, 2, 4);
const MINOR_RELEASE: Field = Field::new(0x15, 2, 4);
const CONTROLLER_MAJOR_RELEASE: Field = Field::new(0x16, 2, 4);
const CONTROLLER_MINOR_RELEASE: Field = Field::new(0x17, 2, 4);
const EXTENDED_ROM_SIZE: Field = Field::new(0x18, 3, 1);

/// Controller release bytes use 0xFF when the firmware has no embedded controller.
const NO_CONTROLLER: u8 = 0xFF;

pub fn decode(structure: &Structure<'_>, sink: &mut dyn ResultSink, _config: &DecoderConfig) {
    let mut context = DecodeContext::begin(sink, structure, "Firmware");
    context.handle();

    context.string("Vendor", VENDOR);
    context.string("Version", VERSION);

    if let Some(segment) = structure.word(STARTING_ADDRESS_SEGMENT).filter(|&segment| segment != 0) {
        context.hex("Starting address segment", segment as u64);
    }

    context.string("Release date", RELEASE_DATE);

    if let Some(bytes) = rom_size(structure) {
        context.size("ROM size", bytes);
    }

    if let Some(characteristics) = structure.qword(CHARACTERISTICS) {
        context.flags64("Characteristics", characteristics, FIRMWARE_CHARACTERISTICS, &[]);
    }

    if let Some(extended) = structure.word(CHARACTERISTICS_EXTENDED) {
        context.flags("Characteristics extended", extended as u32, FIRMWARE_CHARACTERISTICS_EXTENDED);
    }

    if let Some(major) = structure.byte(MAJOR_RELEASE) {
        context.number("Major release", major as u64);
    }

    if let Some(minor) = structure.byte(MINOR_RELEASE) {
        context.number("Minor release", minor as u64);
    }

    if let Some(major) = structure.byte(CONTROLLER_MAJOR_RELEASE).filter(|&major| major != NO_CONTROLLER) {
        context.number("Controller major release", major as u64);
    }

    if let Some(minor) = structure.byte(CONTROLLER_MINOR_RELEASE).filter(|&minor| minor != NO_CONTROLLER) {
        context.number("Controller minor release", minor as u64);
    }
}

/// The ROM size byte counts 64KiB blocks minus one. 0xFF moves the size to the extended field.
fn rom_size(structure: &Structure<'_>) -> Option<u64> {
    match structure.byte(ROM_SIZE)? {
        u8::MAX => ExtendedRomSize::from(structure.word(EXTENDED_ROM_SIZE)?).bytes(),
        blocks => Some((blocks as u64 + 1) * 0x10000),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec;

    use super::*;
    use crate::{decoders::test_support::decode_one, walker::SmbiosVersion};

    const FIRMWARE: [u8; 0x1A + 21] = [
        0, 0x1A, 0x00, 0x00, // Type 0, Length 0x1A, Handle 0
        1, 2, // Vendor, Version
        0x00, 0xE0, // Starting address segment
        3,    // Release date
        0xFF, // ROM size, see extended size
        0x80, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // Characteristics: PCI, Upgradeable
        0x01, 0x08, // Characteristics extended: ACPI, UEFI
        5, 17, // Major and minor release
        0xFF, 0xFF, // No embedded controller
        0x20, 0x00, // Extended ROM size: 32 MiB
        b'A', b'c', b'm', b'e', 0, b'1', b'.', b'0', 0, // Vendor, Version
        b'0', b'1', b'/', b'0', b'2', b'/', b'2', b'0', b'2', b'4', 0, 0, // Release date
    ];

    #[test]
    fn test_decode_firmware() {
        let sink = decode_one(&FIRMWARE, SmbiosVersion::new(3, 4), decode);
        let group = sink.groups()[0].id;

        assert_eq!(sink.group_labels(), vec!["Firmware"]);
        assert_eq!(
            sink.fields_in(group),
            vec![
                ("Handle", "0x0"),
                ("Vendor", "Acme"),
                ("Version", "1.0"),
                ("Starting address segment", "0xe000"),
                ("Release date", "01/02/2024"),
                ("ROM size", "32 MB"),
                ("Characteristics", "PCI, Upgradeable (0x880)"),
                ("Characteristics extended", "ACPI, UEFI (0x801)"),
                ("Major release", "5"),
                ("Minor release", "17"),
            ]
        );
    }

    #[test]
    fn test_decode_firmware_legacy_rom_size() {
        let mut table = FIRMWARE;
        table[0x09] = 0x0F;
        table[0x17] = 0x02;

        let sink = decode_one(&table, SmbiosVersion::new(3, 4), decode);
        let group = sink.groups()[0].id;

        assert_eq!(sink.value(group, "ROM size"), Some("1 MB"));
        assert_eq!(sink.value(group, "Controller minor release"), Some("2"));
        assert_eq!(sink.value(group, "Controller major release"), None);
    }

    #[test]
    fn test_decode_firmware_version_gates_fields() {
        let sink = decode_one(&FIRMWARE, SmbiosVersion::new(2, 3), decode);
        let group = sink.groups()[0].id;

        assert_eq!(sink.value(group, "Characteristics extended"), None);
        assert_eq!(sink.value(group, "Major release"), None);
        // The extended ROM size needs 3.1, so the 0xFF sentinel has nothing to redirect to.
        assert_eq!(sink.value(group, "ROM size"), None);
    }
}
