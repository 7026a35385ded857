//! Baseboard information (type 2)
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use crate::{
    config::DecoderConfig,
    decoders::handle_array,
    format::format_handle_list,
    sink::{DecodeContext, ResultSink},
    tables::{BASEBOARD_FEATURES, BOARD_TYPES},
    walker::{Field, Structure},
};

const MANUFACTURER: Field = Field::new(0x04, 2, 0);
const PRODUCT: Field = Field::new(0x05, 2, 0);
const VERSION: Field = Field::new(0x06, 2, 0);
const SERIAL_NUMBER: Field = Field::new(0x07, 2, 0);
const ASSET_TAG: Field = Field::new(0x08, 2, 0);
const FEATURES: Field = Field::new(0x09, 2, 0);
const LOCATION: Field = Field::new(0x0A, 2, 0);
const CHASSIS_HANDLE: Field = Field::new(0x0B, 2, 0);
const BOARD_TYPE: Field = Field::new(0x0D, 2, 0);
const NUMBER_OF_HANDLES: Field = Field::new(0x0E, 2, 0);
const HANDLES: Field = Field::new(0x0F, 2, 0);

pub fn decode(structure: &Structure<'_>, sink: &mut dyn ResultSink, _config: &DecoderConfig) {
    let mut context = DecodeContext::begin(sink, structure, "Baseboard");
    context.handle();

    context.string("Manufacturer", MANUFACTURER);
    context.string("Product", PRODUCT);
    context.string("Version", VERSION);
    context.string("Serial number", SERIAL_NUMBER);
    context.string("Asset tag", ASSET_TAG);

    if let Some(features) = structure.byte(FEATURES) {
        context.flags("Features", features as u32, BASEBOARD_FEATURES);
    }

    context.string("Location", LOCATION);

    if let Some(chassis) = structure.word(CHASSIS_HANDLE) {
        context.hex("Chassis handle", chassis as u64);
    }

    if let Some(board_type) = structure.byte(BOARD_TYPE) {
        context.enumeration("Board type", board_type as u32, BOARD_TYPES);
    }

    let count = structure.byte(NUMBER_OF_HANDLES).unwrap_or(0) as usize;
    let handles = handle_array(structure, HANDLES, count);
    if !handles.is_empty() {
        context.text("Handles", &format_handle_list(handles));
    }
}
