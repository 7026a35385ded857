//! Structure type registry and dispatch
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use hashbrown::HashMap;
use spin::Once;

use crate::{
    config::DecoderConfig,
    decoders,
    sink::ResultSink,
    walker::{Structure, SMBIOS_TYPE_END_OF_TABLE, SMBIOS_TYPE_INACTIVE},
};

/// Signature shared by every structure decoder.
pub type DecodeFn = fn(&Structure<'_>, &mut dyn ResultSink, &DecoderConfig);

/// How much of a structure type the decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSupport {
    /// Fields are decoded.
    Decoded,
    /// The type is assigned by SMBIOS. Only the group and handle are emitted.
    Recognized,
    /// The type code is not assigned. Output depends on [`DecoderConfig::show_undefined_types`].
    Unknown,
}

/// Registry entry for one structure type.
#[derive(Clone, Copy)]
pub struct TypeInfo {
    /// Group label used for structures of this type.
    pub label: &'static str,
    pub support: TypeSupport,
    pub decode: DecodeFn,
}

static REGISTRY: Once<HashMap<u8, TypeInfo>> = Once::new();

fn registry() -> &'static HashMap<u8, TypeInfo> {
    REGISTRY.call_once(build_registry)
}

fn build_registry() -> HashMap<u8, TypeInfo> {
    use TypeSupport::{Decoded, Recognized};

    let entries: [(u8, &'static str, TypeSupport, DecodeFn); 49] = [
        (0, "Firmware", Decoded, decoders::firmware::decode),
        (1, "System", Decoded, decoders::system::decode),
        (2, "Baseboard", Decoded, decoders::baseboard::decode),
        (3, "Chassis", Decoded, decoders::chassis::decode),
        (4, "Processor", Decoded, decoders::processor::decode),
        (5, "Memory controller", Decoded, decoders::memory::decode_controller),
        (6, "Memory module", Decoded, decoders::memory::decode_module),
        (7, "Cache", Decoded, decoders::cache::decode),
        (8, "Port connector", Decoded, decoders::port::decode),
        (9, "System slot", Decoded, decoders::slot::decode),
        (10, "Onboard device", Decoded, decoders::onboard::decode),
        (11, "OEM strings", Decoded, decoders::oem::decode_oem_strings),
        (12, "System configuration option", Decoded, decoders::oem::decode_configuration_options),
        (13, "Firmware language", Recognized, decoders::recognized),
        (14, "Group association", Recognized, decoders::recognized),
        (15, "System event log", Recognized, decoders::recognized),
        (16, "Physical memory array", Recognized, decoders::recognized),
        (17, "Memory device", Recognized, decoders::recognized),
        (18, "32-bit memory error", Recognized, decoders::recognized),
        (19, "Memory array mapped address", Recognized, decoders::recognized),
        (20, "Memory device mapped address", Recognized, decoders::recognized),
        (21, "Built-in pointing device", Recognized, decoders::recognized),
        (22, "Portable battery", Recognized, decoders::recognized),
        (23, "System reset", Recognized, decoders::recognized),
        (24, "Hardware security", Recognized, decoders::recognized),
        (25, "System power controls", Recognized, decoders::recognized),
        (26, "Voltage sensor", Recognized, decoders::recognized),
        (27, "Cooling device", Recognized, decoders::recognized),
        (28, "Temperature sensor", Recognized, decoders::recognized),
        (29, "Electrical current sensor", Recognized, decoders::recognized),
        (30, "Out-of-band remote access", Recognized, decoders::recognized),
        (31, "Boot integrity services", Recognized, decoders::recognized),
        (32, "System boot", Recognized, decoders::recognized),
        (33, "64-bit memory error", Recognized, decoders::recognized),
        (34, "Management device", Recognized, decoders::recognized),
        (35, "Management device component", Recognized, decoders::recognized),
        (36, "Management device threshold", Recognized, decoders::recognized),
        (37, "Memory channel", Recognized, decoders::recognized),
        (38, "IPMI device", Recognized, decoders::recognized),
        (39, "System power supply", Recognized, decoders::recognized),
        (40, "Additional information", Recognized, decoders::recognized),
        (41, "Onboard device", Decoded, decoders::onboard::decode),
        (42, "Management controller host interface", Recognized, decoders::recognized),
        (43, "TPM device", Recognized, decoders::recognized),
        (44, "Processor additional", Recognized, decoders::recognized),
        (45, "Firmware inventory", Recognized, decoders::recognized),
        (46, "String property", Recognized, decoders::recognized),
        (SMBIOS_TYPE_INACTIVE, "Inactive", Recognized, decoders::recognized),
        // Listed for its label and support level only; the walker ends the table before dispatching it.
        (SMBIOS_TYPE_END_OF_TABLE, "End of table", Recognized, decoders::recognized),
    ];

    let mut registry = HashMap::with_capacity(entries.len());
    for (r#type, label, support, decode) in entries {
        registry.insert(r#type, TypeInfo { label, support, decode });
    }
    registry
}

/// Classifies structure type `r#type`.
pub fn support_for(r#type: u8) -> TypeSupport {
    registry().get(&r#type).map_or(TypeSupport::Unknown, |info| info.support)
}

/// Group label of an assigned structure type.
pub fn type_label(r#type: u8) -> Option<&'static str> {
    registry().get(&r#type).map(|info| info.label)
}

/// Runs exactly one decoder for `structure`: the registered one, or the undefined type fallback.
pub fn dispatch(structure: &Structure<'_>, sink: &mut dyn ResultSink, config: &DecoderConfig) {
    let decode = registry().get(&structure.header().r#type).map_or(decoders::undefined as DecodeFn, |info| info.decode);
    decode(structure, sink, config);
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec;

    use super::*;
    use crate::{
        sink::CollectingSink,
        walker::{walk, SmbiosVersion},
    };

    #[test]
    fn test_support_for() {
        assert_eq!(support_for(0), TypeSupport::Decoded);
        assert_eq!(support_for(10), TypeSupport::Decoded);
        assert_eq!(support_for(41), TypeSupport::Decoded);
        assert_eq!(support_for(17), TypeSupport::Recognized);
        assert_eq!(support_for(126), TypeSupport::Recognized);
        assert_eq!(support_for(127), TypeSupport::Recognized);
        assert_eq!(type_label(127), Some("End of table"));
        assert_eq!(support_for(47), TypeSupport::Unknown);
        assert_eq!(support_for(200), TypeSupport::Unknown);
        assert!((0..=46).all(|t| support_for(t) != TypeSupport::Unknown));
    }

    #[test]
    fn test_onboard_types_share_a_decoder() {
        let ten = registry()[&10];
        let forty_one = registry()[&41];
        assert_eq!(ten.decode as usize, forty_one.decode as usize);
        assert_eq!(type_label(10), type_label(41));
    }

    #[test]
    fn test_dispatch_recognized_type() {
        let table = [17, 0x04, 0x22, 0x00, 0, 0];
        let structure = walk(&table, SmbiosVersion::new(3, 0)).next().unwrap();
        let mut sink = CollectingSink::new();

        dispatch(&structure, &mut sink, &DecoderConfig::default());

        assert_eq!(sink.group_labels(), vec!["Memory device"]);
        assert_eq!(sink.fields_in(sink.groups()[0].id), vec![("Handle", "0x22")]);
    }

    #[test]
    fn test_dispatch_unknown_type() {
        let table = [0xC8, 0x06, 0x01, 0x00, 0xAA, 0xBB, 0, 0];
        let structure = walk(&table, SmbiosVersion::new(3, 0)).next().unwrap();

        let mut hidden = CollectingSink::new();
        dispatch(&structure, &mut hidden, &DecoderConfig::default());
        assert!(hidden.groups().is_empty());

        let mut shown = CollectingSink::new();
        dispatch(&structure, &mut shown, &DecoderConfig::default().with_show_undefined_types(true));
        assert_eq!(shown.group_labels(), vec!["Type 200"]);
        assert_eq!(shown.fields_in(shown.groups()[0].id), vec![("Handle", "0x1"), ("Length", "6")]);
    }
}
