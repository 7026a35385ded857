//! System information (type 1)
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

extern crate alloc;

use alloc::{format, string::String};

use r_efi::efi;
use scroll::{Endian, Pread, BE, LE};

use crate::{
    config::DecoderConfig,
    sink::{DecodeContext, ResultSink},
    tables::WAKE_UP_TYPES,
    walker::{Field, SmbiosVersion, Structure},
};

const MANUFACTURER: Field = Field::new(0x04, 2, 0);
const PRODUCT_NAME: Field = Field::new(0x05, 2, 0);
const VERSION: Field = Field::new(0x06, 2, 0);
const SERIAL_NUMBER: Field = Field::new(0x07, 2, 0);
const UUID: Field = Field::new(0x08, 2, 1);
const WAKE_UP_TYPE: Field = Field::new(0x18, 2, 1);
const SKU_NUMBER: Field = Field::new(0x19, 2, 4);
const FAMILY: Field = Field::new(0x1A, 2, 4);

/// First version that stores the leading UUID fields little-endian.
const UUID_LITTLE_ENDIAN_SINCE: SmbiosVersion = SmbiosVersion::new(2, 6);

pub fn decode(structure: &Structure<'_>, sink: &mut dyn ResultSink, _config: &DecoderConfig) {
    let mut context = DecodeContext::begin(sink, structure, "System");
    context.handle();

    context.string("Manufacturer", MANUFACTURER);
    context.string("Product name", PRODUCT_NAME);
    context.string("Version", VERSION);
    context.string("Serial number", SERIAL_NUMBER);

    if let Some(uuid) = read_uuid(structure) {
        context.text("UUID", &format_guid(&uuid));
    }

    if let Some(wake_up) = structure.byte(WAKE_UP_TYPE) {
        context.enumeration("Wake-up type", wake_up as u32, WAKE_UP_TYPES);
    }

    context.string("SKU number", SKU_NUMBER);
    context.string("Family", FAMILY);
}

fn read_uuid(structure: &Structure<'_>) -> Option<efi::Guid> {
    let bytes = structure.bytes(UUID, 16)?;
    let endian: Endian = if structure.version().at_least(UUID_LITTLE_ENDIAN_SINCE) { LE } else { BE };

    let time_low = bytes.pread_with::<u32>(0, endian).ok()?;
    let time_mid = bytes.pread_with::<u16>(4, endian).ok()?;
    let time_hi_and_version = bytes.pread_with::<u16>(6, endian).ok()?;
    let node: &[u8; 6] = bytes.get(10..16)?.try_into().ok()?;

    Some(efi::Guid::from_fields(time_low, time_mid, time_hi_and_version, bytes[8], bytes[9], node))
}

/// Renders a GUID in registry form, e.g. `{4C4C4544-0042-3510-8052-B7C04F4E3332}`.
pub fn format_guid(guid: &efi::Guid) -> String {
    let (time_low, time_mid, time_hi, clk_seq_hi, clk_seq_low, node) = guid.as_fields();
    format!(
        "{{{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}}}",
        time_low, time_mid, time_hi, clk_seq_hi, clk_seq_low, node[0], node[1], node[2], node[3], node[4], node[5]
    )
}
