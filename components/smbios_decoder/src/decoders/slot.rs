//! System slots (type 9)
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

extern crate alloc;

use alloc::format;

use scroll::{Pread, LE};

use crate::{
    bitfields::DeviceFunction,
    config::DecoderConfig,
    format::LabelList,
    sink::{DecodeContext, ResultSink},
    tables::{
        SLOT_BUS_WIDTHS, SLOT_CHARACTERISTICS, SLOT_CHARACTERISTICS_2, SLOT_HEIGHTS, SLOT_LENGTHS, SLOT_TYPES,
        SLOT_USAGES,
    },
    walker::{Field, Structure},
};

const SLOT_DESIGNATION: Field = Field::new(0x04, 2, 0);
const TYPE: Field = Field::new(0x05, 2, 0);
const BUS_WIDTH: Field = Field::new(0x06, 2, 0);
const CURRENT_USAGE: Field = Field::new(0x07, 2, 0);
const LENGTH: Field = Field::new(0x08, 2, 0);
const IDENTIFIER: Field = Field::new(0x09, 2, 0);
const CHARACTERISTICS: Field = Field::new(0x0B, 2, 0);
const CHARACTERISTICS_2: Field = Field::new(0x0C, 2, 1);
const SEGMENT_GROUP: Field = Field::new(0x0D, 2, 6);
const BUS_NUMBER: Field = Field::new(0x0F, 2, 6);
const DEVICE_FUNCTION: Field = Field::new(0x10, 2, 6);
const DATA_BUS_WIDTH: Field = Field::new(0x11, 3, 2);
const PEER_GROUPING_COUNT: Field = Field::new(0x12, 3, 2);
const PEER_GROUPS: Field = Field::new(0x13, 3, 2);

// Follow the peer group array.
const INFORMATION: Field = Field::new(0x13, 3, 4);
const PHYSICAL_WIDTH: Field = Field::new(0x14, 3, 4);
const PITCH: Field = Field::new(0x15, 3, 4);
const HEIGHT: Field = Field::new(0x17, 3, 5);

/// Segment group (word), bus, device/function and data bus width.
const PEER_GROUP_LENGTH: usize = 5;

pub fn decode(structure: &Structure<'_>, sink: &mut dyn ResultSink, _config: &DecoderConfig) {
    let mut context = DecodeContext::begin(sink, structure, "System slot");
    context.handle();

    context.string("Slot designation", SLOT_DESIGNATION);

    if let Some(slot_type) = structure.byte(TYPE) {
        context.enumeration("Type", slot_type as u32, SLOT_TYPES);
    }

    if let Some(width) = structure.byte(BUS_WIDTH) {
        context.enumeration("Bus width", width as u32, SLOT_BUS_WIDTHS);
    }

    if let Some(usage) = structure.byte(CURRENT_USAGE) {
        context.enumeration("Current usage", usage as u32, SLOT_USAGES);
    }

    if let Some(length) = structure.byte(LENGTH) {
        context.enumeration("Length", length as u32, SLOT_LENGTHS);
    }

    if let Some(identifier) = structure.word(IDENTIFIER) {
        context.hex("Identifier", identifier as u64);
    }

    if let Some(characteristics) = structure.byte(CHARACTERISTICS) {
        context.flags("Characteristics", characteristics as u32, SLOT_CHARACTERISTICS);
    }

    if let Some(characteristics) = structure.byte(CHARACTERISTICS_2) {
        context.flags("Characteristics 2", characteristics as u32, SLOT_CHARACTERISTICS_2);
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

    if let Some(width) = structure.byte(DATA_BUS_WIDTH) {
        context.number("Bus width base", width as u64);
    }

    let Some(peers) = structure.byte(PEER_GROUPING_COUNT).map(usize::from) else {
        return;
    };

    context.labels("Peer groups", peer_groups(structure, peers));

    let delta = peers * PEER_GROUP_LENGTH;

    if let Some(information) = structure.byte(INFORMATION.shifted(delta)) {
        context.number("Information", information as u64);
    }

    if let Some(width) = structure.byte(PHYSICAL_WIDTH.shifted(delta)) {
        context.enumeration("Physical width", width as u32, SLOT_BUS_WIDTHS);
    }

    if let Some(pitch) = structure.word(PITCH.shifted(delta)).filter(|&pitch| pitch != 0) {
        context.text("Pitch", &format!("{}.{:02} mm", pitch / 100, pitch % 100));
    }

    if let Some(height) = structure.byte(HEIGHT.shifted(delta)) {
        context.enumeration("Height", height as u32, SLOT_HEIGHTS);
    }
}

/// Renders each peer as `segment:bus:device.function (width N)`.
fn peer_groups(structure: &Structure<'_>, count: usize) -> LabelList {
    let mut list = LabelList::new();
    for index in 0..count {
        let Some(peer) = structure.bytes(PEER_GROUPS.shifted(index * PEER_GROUP_LENGTH), PEER_GROUP_LENGTH) else {
            break;
        };
        let Ok(segment) = peer.pread_with::<u16>(0, LE) else {
            break;
        };
        let devfn = DeviceFunction::from(peer[3]);
        list.push(&format!(
            "{:04x}:{:02x}:{:02x}.{:x} (width {})",
            segment,
            peer[2],
            devfn.device(),
            devfn.function(),
            peer[4]
        ));
    }
    list
}
