//! OEM strings (type 11) and system configuration options (type 12)
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
    config::DecoderConfig,
    sink::{DecodeContext, ResultSink},
    strings::resolve,
    walker::{Field, Structure},
};

const COUNT: Field = Field::new(0x04, 2, 0);

/// Decodes the free-form OEM strings (type 11).
pub fn decode_oem_strings(structure: &Structure<'_>, sink: &mut dyn ResultSink, _config: &DecoderConfig) {
    let mut context = DecodeContext::begin(sink, structure, "OEM strings");
    context.handle();
    enumerate_strings(&mut context, "Number of strings", "String");
}

/// Decodes the jumper and switch descriptions (type 12).
pub fn decode_configuration_options(structure: &Structure<'_>, sink: &mut dyn ResultSink, _config: &DecoderConfig) {
    let mut context = DecodeContext::begin(sink, structure, "System configuration option");
    context.handle();
    enumerate_strings(&mut context, "Number of options", "Option");
}

/// Emits the count byte and then `"<prefix> #n"` for each listed string, stopping at the first one the string
/// table does not hold.
fn enumerate_strings(context: &mut DecodeContext<'_, '_>, count_name: &str, prefix: &str) {
    let structure = context.structure();
    let Some(count) = structure.byte(COUNT) else {
        return;
    };
    context.number(count_name, count as u64);

    for index in 1..=count {
        let Ok(Some(value)) = resolve(&structure, index) else {
            log::trace!("SMBIOS handle {:#06x}: {} #{} unavailable", structure.header().handle, prefix, index);
            break;
        };
        context.text(&format!("{prefix} #{index}"), &value);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec;

    use super::*;
    use crate::{decoders::test_support::decode_one, walker::SmbiosVersion};

    #[test]
    fn test_decode_oem_strings() {
        let table = [
            11, 0x05, 0x0B, 0x00, // Type 11, Length 5, Handle 0xB
            2,    // Two strings
            b'A', b'B', b'S', b' ', b'7', b'0', 0, b'F', b'B', b'Y', b'T', b'E', 0, 0,
        ];

        let sink = decode_one(&table, SmbiosVersion::new(2, 4), decode_oem_strings);

        assert_eq!(sink.group_labels(), vec!["OEM strings"]);
        assert_eq!(
            sink.fields_in(sink.groups()[0].id),
            vec![("Handle", "0xb"), ("Number of strings", "2"), ("String #1", "ABS 70"), ("String #2", "FBYTE")]
        );
    }

    #[test]
    fn test_count_past_string_table_stops() {
        let table = [12, 0x05, 0x0C, 0x00, 3, b'J', b'P', b'1', 0, 0];

        let sink = decode_one(&table, SmbiosVersion::new(2, 4), decode_configuration_options);

        assert_eq!(sink.group_labels(), vec!["System configuration option"]);
        assert_eq!(
            sink.fields_in(sink.groups()[0].id),
            vec![("Handle", "0xc"), ("Number of options", "3"), ("Option #1", "JP1")]
        );
    }

    #[test]
    fn test_short_structure_still_opens_group() {
        let table = [11, 0x04, 0x0B, 0x00, 0, 0];

        let sink = decode_one(&table, SmbiosVersion::new(2, 4), decode_oem_strings);

        assert_eq!(sink.fields_in(sink.groups()[0].id), vec![("Handle", "0xb")]);
    }
}
