//! System enclosure or chassis (type 3)
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
    bitfields::FlaggedType,
    config::DecoderConfig,
    dispatch::type_label,
    format::{format_enum, LabelList, UNDEFINED},
    sink::{DecodeContext, ResultSink},
    tables::{BOARD_TYPES, CHASSIS_SECURITY_STATES, CHASSIS_STATES, CHASSIS_TYPES},
    walker::{Field, Structure},
};

const MANUFACTURER: Field = Field::new(0x04, 2, 0);
const TYPE: Field = Field::new(0x05, 2, 0);
const VERSION: Field = Field::new(0x06, 2, 0);
const SERIAL_NUMBER: Field = Field::new(0x07, 2, 0);
const ASSET_TAG: Field = Field::new(0x08, 2, 0);
const BOOT_UP_STATE: Field = Field::new(0x09, 2, 1);
const POWER_SUPPLY_STATE: Field = Field::new(0x0A, 2, 1);
const THERMAL_STATE: Field = Field::new(0x0B, 2, 1);
const SECURITY_STATE: Field = Field::new(0x0C, 2, 1);
const OEM_DEFINED: Field = Field::new(0x0D, 2, 3);
const HEIGHT: Field = Field::new(0x11, 2, 3);
const NUMBER_OF_POWER_CORDS: Field = Field::new(0x12, 2, 3);
const ELEMENT_COUNT: Field = Field::new(0x13, 2, 3);
const ELEMENT_LENGTH: Field = Field::new(0x14, 2, 3);
const ELEMENTS: Field = Field::new(0x15, 2, 3);
/// Follows the contained elements array.
const SKU_NUMBER: Field = Field::new(0x15, 2, 7);

/// Type selector, minimum and maximum count.
const ELEMENT_MIN_LENGTH: usize = 3;

pub fn decode(structure: &Structure<'_>, sink: &mut dyn ResultSink, _config: &DecoderConfig) {
    let mut context = DecodeContext::begin(sink, structure, "Chassis");
    context.handle();

    context.string("Manufacturer", MANUFACTURER);

    if let Some(chassis) = structure.byte(TYPE).map(FlaggedType::from) {
        context.enumeration("Type", chassis.value() as u32, CHASSIS_TYPES);
        context.boolean("Locked", chassis.flag());
    }

    context.string("Version", VERSION);
    context.string("Serial number", SERIAL_NUMBER);
    context.string("Asset tag", ASSET_TAG);

    if let Some(state) = structure.byte(BOOT_UP_STATE) {
        context.enumeration("Boot-up state", state as u32, CHASSIS_STATES);
    }

    if let Some(state) = structure.byte(POWER_SUPPLY_STATE) {
        context.enumeration("Power supply state", state as u32, CHASSIS_STATES);
    }

    if let Some(state) = structure.byte(THERMAL_STATE) {
        context.enumeration("Thermal state", state as u32, CHASSIS_STATES);
    }

    if let Some(state) = structure.byte(SECURITY_STATE) {
        context.enumeration("Security state", state as u32, CHASSIS_SECURITY_STATES);
    }

    if let Some(oem) = structure.dword(OEM_DEFINED).filter(|&oem| oem != 0) {
        context.hex("OEM defined", oem as u64);
    }

    if let Some(height) = structure.byte(HEIGHT).filter(|&height| height != 0) {
        context.number_with_unit("Height", height as u64, "U");
    }

    if let Some(cords) = structure.byte(NUMBER_OF_POWER_CORDS).filter(|&cords| cords != 0) {
        context.number("Number of power cords", cords as u64);
    }

    let (Some(count), Some(length)) = (structure.byte(ELEMENT_COUNT), structure.byte(ELEMENT_LENGTH)) else {
        return;
    };
    let (count, length) = (count as usize, length as usize);

    context.labels("Contained elements", contained_elements(structure, count, length));

    context.string("SKU number", SKU_NUMBER.shifted(count * length));
}

fn contained_elements(structure: &Structure<'_>, count: usize, length: usize) -> LabelList {
    let mut list = LabelList::new();
    if length < ELEMENT_MIN_LENGTH {
        return list;
    }

    for index in 0..count {
        let Some(element) = structure.bytes(ELEMENTS.shifted(index * length), ELEMENT_MIN_LENGTH) else {
            break;
        };

        let selector = FlaggedType::from(element[0]);
        let label = if selector.flag() {
            type_label(selector.value()).unwrap_or(UNDEFINED)
        } else {
            format_enum(selector.value() as u32, BOARD_TYPES)
        };
        list.push(&format!("{} ({}-{})", label, element[1], element[2]));
    }
    list
}
