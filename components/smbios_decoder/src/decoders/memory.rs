//! Memory controller (type 5) and memory module (type 6)
//!
//! Both types are obsolete since SMBIOS 2.1 but still show up in tables built for legacy operating systems.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

extern crate alloc;

use alloc::string::String;

use crate::{
    bitfields::{MemoryModuleSize, MemoryModuleVoltage},
    config::DecoderConfig,
    decoders::handle_array,
    format::{flag_labels, format_handle_list, format_size, LabelList},
    sink::{DecodeContext, ResultSink},
    tables::{
        MEMORY_ERROR_CORRECTION_CAPABILITIES, MEMORY_ERROR_DETECTION_METHODS, MEMORY_INTERLEAVES,
        MEMORY_MODULE_ERROR_STATUS, MEMORY_MODULE_TYPES, MEMORY_SPEEDS,
    },
    walker::{Field, Structure},
};

const ERROR_DETECTION_METHOD: Field = Field::new(0x04, 2, 0);
const ERROR_CORRECTION_CAPABILITIES: Field = Field::new(0x05, 2, 0);
const SUPPORTED_INTERLEAVE: Field = Field::new(0x06, 2, 0);
const CURRENT_INTERLEAVE: Field = Field::new(0x07, 2, 0);
const MAXIMUM_MODULE_SIZE: Field = Field::new(0x08, 2, 0);
const SUPPORTED_SPEEDS: Field = Field::new(0x09, 2, 0);
const SUPPORTED_TYPES: Field = Field::new(0x0B, 2, 0);
const MODULE_VOLTAGE: Field = Field::new(0x0D, 2, 0);
const NUMBER_OF_SLOTS: Field = Field::new(0x0E, 2, 0);
const SLOT_HANDLES: Field = Field::new(0x0F, 2, 0);
/// Follows the slot handle array.
const ENABLED_ERROR_CORRECTION_CAPABILITIES: Field = Field::new(0x0F, 2, 1);

const SOCKET_DESIGNATION: Field = Field::new(0x04, 2, 0);
const BANK_CONNECTIONS: Field = Field::new(0x05, 2, 0);
const CURRENT_SPEED: Field = Field::new(0x06, 2, 0);
const MEMORY_TYPE: Field = Field::new(0x07, 2, 0);
const INSTALLED_SIZE: Field = Field::new(0x09, 2, 0);
const ENABLED_SIZE: Field = Field::new(0x0A, 2, 0);
const ERROR_STATUS: Field = Field::new(0x0B, 2, 0);

const SIZE_NOT_DETERMINABLE: u8 = 0x7D;
const SIZE_NOT_ENABLED: u8 = 0x7E;
const SIZE_NOT_INSTALLED: u8 = 0x7F;

/// Decodes a memory controller (type 5).
pub fn decode_controller(structure: &Structure<'_>, sink: &mut dyn ResultSink, _config: &DecoderConfig) {
    let mut context = DecodeContext::begin(sink, structure, "Memory controller");
    context.handle();

    if let Some(method) = structure.byte(ERROR_DETECTION_METHOD) {
        context.enumeration("Error detection method", method as u32, MEMORY_ERROR_DETECTION_METHODS);
    }

    if let Some(capabilities) = structure.byte(ERROR_CORRECTION_CAPABILITIES) {
        context.flags("Error correction capabilities", capabilities as u32, MEMORY_ERROR_CORRECTION_CAPABILITIES);
    }

    if let Some(interleave) = structure.byte(SUPPORTED_INTERLEAVE) {
        context.enumeration("Supported interleave", interleave as u32, MEMORY_INTERLEAVES);
    }

    if let Some(interleave) = structure.byte(CURRENT_INTERLEAVE) {
        context.enumeration("Current interleave", interleave as u32, MEMORY_INTERLEAVES);
    }

    if let Some(bytes) = structure.byte(MAXIMUM_MODULE_SIZE).and_then(power_of_two_mib) {
        context.size("Maximum module size", bytes);
    }

    if let Some(speeds) = structure.word(SUPPORTED_SPEEDS) {
        context.flags("Supported speeds", speeds as u32, MEMORY_SPEEDS);
    }

    if let Some(types) = structure.word(SUPPORTED_TYPES) {
        context.flags("Supported types", types as u32, MEMORY_MODULE_TYPES);
    }

    if let Some(voltage) = structure.byte(MODULE_VOLTAGE).map(MemoryModuleVoltage::from) {
        let mut list = LabelList::new();
        list.push_if(voltage.requires_5000mv(), "5V");
        list.push_if(voltage.requires_3300mv(), "3.3V");
        list.push_if(voltage.requires_2900mv(), "2.9V");
        context.labels("Module voltage", list);
    }

    let Some(slots) = structure.byte(NUMBER_OF_SLOTS).map(usize::from) else {
        return;
    };

    let handles = handle_array(structure, SLOT_HANDLES, slots);
    if !handles.is_empty() {
        context.text("Handles", &format_handle_list(handles));
    }

    if let Some(enabled) = structure.byte(ENABLED_ERROR_CORRECTION_CAPABILITIES.shifted(slots * 2)) {
        context.flags("Enabled error correction capabilities", enabled as u32, MEMORY_ERROR_CORRECTION_CAPABILITIES);
    }
}

/// Decodes a memory module (type 6).
pub fn decode_module(structure: &Structure<'_>, sink: &mut dyn ResultSink, _config: &DecoderConfig) {
    let mut context = DecodeContext::begin(sink, structure, "Memory module");
    context.handle();

    context.string("Socket designation", SOCKET_DESIGNATION);

    if let Some(banks) = structure.byte(BANK_CONNECTIONS) {
        context.hex("Bank connections", banks as u64);
    }

    if let Some(speed) = structure.byte(CURRENT_SPEED) {
        context.number_with_unit("Current speed", speed as u64, " ns");
    }

    if let Some(memory_type) = structure.word(MEMORY_TYPE) {
        context.flags("Memory type", memory_type as u32, MEMORY_MODULE_TYPES);
    }

    if let Some(size) = structure.byte(INSTALLED_SIZE).map(MemoryModuleSize::from) {
        context.text("Installed size", &module_size(size));
    }

    if let Some(size) = structure.byte(ENABLED_SIZE).map(MemoryModuleSize::from) {
        context.text("Enabled size", &module_size(size));
    }

    if let Some(status) = structure.byte(ERROR_STATUS).filter(|&status| status != 0) {
        let labels = flag_labels(status as u32, MEMORY_MODULE_ERROR_STATUS);
        if !labels.is_empty() {
            context.text("Error status", &labels);
        }
    }
}

/// Sizes stored as a power of two in MiB. `None` when the result does not fit in 64 bits.
fn power_of_two_mib(exponent: u8) -> Option<u64> {
    1u64.checked_shl(exponent as u32 + 20)
}

fn module_size(size: MemoryModuleSize) -> String {
    let mut rendered = match size.size() {
        SIZE_NOT_DETERMINABLE => String::from("Not determinable"),
        SIZE_NOT_ENABLED => String::from("Not enabled"),
        SIZE_NOT_INSTALLED => String::from("Not installed"),
        exponent => power_of_two_mib(exponent).map(format_size).unwrap_or_default(),
    };
    if size.double_bank() {
        rendered.push_str(", double-bank");
    }
    rendered
}
