//! Processor information (type 4)
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
    bitfields::{ProcessorStatus, ProcessorVoltage},
    config::DecoderConfig,
    decoders::widened_count,
    format::LabelList,
    sink::{DecodeContext, ResultSink},
    tables::{PROCESSOR_CHARACTERISTICS, PROCESSOR_FAMILIES, PROCESSOR_STATUSES, PROCESSOR_TYPES, PROCESSOR_UPGRADES},
    walker::{Field, Structure},
};

const SOCKET_DESIGNATION: Field = Field::new(0x04, 2, 0);
const TYPE: Field = Field::new(0x05, 2, 0);
const FAMILY: Field = Field::new(0x06, 2, 0);
const MANUFACTURER: Field = Field::new(0x07, 2, 0);
const IDENTIFIER: Field = Field::new(0x08, 2, 0);
const VERSION: Field = Field::new(0x10, 2, 0);
const VOLTAGE: Field = Field::new(0x11, 2, 0);
const EXTERNAL_CLOCK: Field = Field::new(0x12, 2, 0);
const MAX_SPEED: Field = Field::new(0x14, 2, 0);
const CURRENT_SPEED: Field = Field::new(0x16, 2, 0);
const STATUS: Field = Field::new(0x18, 2, 0);
const UPGRADE: Field = Field::new(0x19, 2, 0);
const L1_CACHE_HANDLE: Field = Field::new(0x1A, 2, 1);
const L2_CACHE_HANDLE: Field = Field::new(0x1C, 2, 1);
const L3_CACHE_HANDLE: Field = Field::new(0x1E, 2, 1);
const SERIAL_NUMBER: Field = Field::new(0x20, 2, 3);
const ASSET_TAG: Field = Field::new(0x21, 2, 3);
const PART_NUMBER: Field = Field::new(0x22, 2, 3);
const CORE_COUNT: Field = Field::new(0x23, 2, 5);
const CORES_ENABLED: Field = Field::new(0x24, 2, 5);
const THREAD_COUNT: Field = Field::new(0x25, 2, 5);
const CHARACTERISTICS: Field = Field::new(0x26, 2, 5);
const FAMILY_2: Field = Field::new(0x28, 2, 6);
const CORE_COUNT_2: Field = Field::new(0x2A, 3, 0);
const CORES_ENABLED_2: Field = Field::new(0x2C, 3, 0);
const THREAD_COUNT_2: Field = Field::new(0x2E, 3, 0);
const THREADS_ENABLED: Field = Field::new(0x30, 3, 6);
const SOCKET_TYPE: Field = Field::new(0x32, 3, 6);

/// Family byte value that moves the family to the 16-bit family 2 field.
const FAMILY_SEE_FAMILY_2: u8 = 0xFE;

pub fn decode(structure: &Structure<'_>, sink: &mut dyn ResultSink, _config: &DecoderConfig) {
    let mut context = DecodeContext::begin(sink, structure, "Processor");
    context.handle();

    context.string("Socket designation", SOCKET_DESIGNATION);

    if let Some(r#type) = structure.byte(TYPE) {
        context.enumeration("Type", r#type as u32, PROCESSOR_TYPES);
    }

    if let Some(family) = family(structure) {
        context.enumeration("Family", family as u32, PROCESSOR_FAMILIES);
    }

    context.string("Manufacturer", MANUFACTURER);

    if let Some(identifier) = structure.qword(IDENTIFIER) {
        context.hex("Identifier", identifier);
    }

    context.string("Version", VERSION);

    if let Some(voltage) = structure.byte(VOLTAGE).map(ProcessorVoltage::from) {
        voltage_field(&mut context, voltage);
    }

    let speeds = [("External clock", EXTERNAL_CLOCK), ("Max speed", MAX_SPEED), ("Current speed", CURRENT_SPEED)];
    for (name, field) in speeds {
        if let Some(mhz) = structure.word(field).filter(|&mhz| mhz != 0) {
            context.number_with_unit(name, mhz as u64, " MHz");
        }
    }

    if let Some(status) = structure.byte(STATUS).map(ProcessorStatus::from) {
        context.boolean("Populated", status.populated());
        context.enumeration("Status", status.status() as u32, PROCESSOR_STATUSES);
    }

    if let Some(upgrade) = structure.byte(UPGRADE) {
        context.enumeration("Upgrade", upgrade as u32, PROCESSOR_UPGRADES);
    }

    let caches = [
        ("L1 cache handle", L1_CACHE_HANDLE),
        ("L2 cache handle", L2_CACHE_HANDLE),
        ("L3 cache handle", L3_CACHE_HANDLE),
    ];
    for (name, field) in caches {
        if let Some(handle) = structure.word(field) {
            context.hex(name, handle as u64);
        }
    }

    context.string("Serial number", SERIAL_NUMBER);
    context.string("Asset tag", ASSET_TAG);
    context.string("Part number", PART_NUMBER);

    if let Some(characteristics) = structure.word(CHARACTERISTICS) {
        context.flags("Characteristics", characteristics as u32, PROCESSOR_CHARACTERISTICS);
    }

    context.string("Socket type", SOCKET_TYPE);

    if let Some(cores) = widened_count(structure, CORE_COUNT, CORE_COUNT_2) {
        context.number("Core count", cores as u64);
    }

    if let Some(cores) = widened_count(structure, CORES_ENABLED, CORES_ENABLED_2) {
        context.number("Cores enabled", cores as u64);
    }

    if let Some(threads) = widened_count(structure, THREAD_COUNT, THREAD_COUNT_2) {
        context.number("Thread count", threads as u64);
    }

    if let Some(threads) = structure.word(THREADS_ENABLED).filter(|&threads| threads != 0 && threads != u16::MAX) {
        context.number("Threads enabled", threads as u64);
    }
}

fn family(structure: &Structure<'_>) -> Option<u16> {
    match structure.byte(FAMILY)? {
        FAMILY_SEE_FAMILY_2 => structure.word(FAMILY_2),
        family => Some(family as u16),
    }
}

fn voltage_field(context: &mut DecodeContext<'_, '_>, voltage: ProcessorVoltage) {
    if voltage.current() {
        let tenths = voltage.tenths_of_volt();
        context.text("Voltage", &format!("{}.{} V", tenths / 10, tenths % 10));
        return;
    }

    let mut list = LabelList::new();
    list.push_if(voltage.capable_5000mv(), "5V");
    list.push_if(voltage.capable_3300mv(), "3.3V");
    list.push_if(voltage.capable_2900mv(), "2.9V");
    list.push("legacy");
    context.labels("Voltage", list);
}
