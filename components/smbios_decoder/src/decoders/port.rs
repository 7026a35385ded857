//! Port connector information (type 8)
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use crate::{
    config::DecoderConfig,
    sink::{DecodeContext, ResultSink},
    tables::{CONNECTOR_TYPES, PORT_TYPES},
    walker::{Field, Structure},
};

const INTERNAL_REFERENCE_DESIGNATOR: Field = Field::new(0x04, 2, 0);
const INTERNAL_CONNECTOR_TYPE: Field = Field::new(0x05, 2, 0);
const EXTERNAL_REFERENCE_DESIGNATOR: Field = Field::new(0x06, 2, 0);
const EXTERNAL_CONNECTOR_TYPE: Field = Field::new(0x07, 2, 0);
const PORT_TYPE: Field = Field::new(0x08, 2, 0);

pub fn decode(structure: &Structure<'_>, sink: &mut dyn ResultSink, _config: &DecoderConfig) {
    let mut context = DecodeContext::begin(sink, structure, "Port connector");
    context.handle();

    context.string("Internal reference designator", INTERNAL_REFERENCE_DESIGNATOR);

    if let Some(connector) = structure.byte(INTERNAL_CONNECTOR_TYPE) {
        context.enumeration("Internal connector type", connector as u32, CONNECTOR_TYPES);
    }

    context.string("External reference designator", EXTERNAL_REFERENCE_DESIGNATOR);

    if let Some(connector) = structure.byte(EXTERNAL_CONNECTOR_TYPE) {
        context.enumeration("External connector type", connector as u32, CONNECTOR_TYPES);
    }

    if let Some(port) = structure.byte(PORT_TYPE) {
        context.enumeration("Port type", port as u32, PORT_TYPES);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec;

    use super::*;
    use crate::{decoders::test_support::decode_one, walker::SmbiosVersion};

    #[test]
    fn test_decode_port_connector() {
        let table = [
            8, 0x09, 0x08, 0x00, // Type 8, Length 9, Handle 8
            1,    // Internal reference designator
            0x00, // Internal connector: None
            2,    // External reference designator
            0x0B, // External connector: RJ-45
            0x1F, // Port type: Network
            b'J', b'1', 0, b'L', b'A', b'N', 0, 0,
        ];

        let sink = decode_one(&table, SmbiosVersion::new(3, 0), decode);

        assert_eq!(
            sink.fields_in(sink.groups()[0].id),
            vec![
                ("Handle", "0x8"),
                ("Internal reference designator", "J1"),
                ("Internal connector type", "None"),
                ("External reference designator", "LAN"),
                ("External connector type", "RJ-45"),
                ("Port type", "Network"),
            ]
        );
    }

    #[test]
    fn test_unlisted_connector_type() {
        let table = [8, 0x09, 0x08, 0x00, 0, 0x60, 0, 0x00, 0xFE, 0, 0];

        let sink = decode_one(&table, SmbiosVersion::new(3, 0), decode);
        let group = sink.groups()[0].id;

        assert_eq!(sink.value(group, "Internal connector type"), Some("Undefined"));
        assert_eq!(sink.value(group, "Port type"), Some("Undefined"));
    }
}
