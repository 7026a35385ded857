//! Cache information (type 7)
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use crate::{
    bitfields::{CacheConfiguration, CacheSize, CacheSize2},
    config::DecoderConfig,
    sink::{DecodeContext, ResultSink},
    tables::{
        CACHE_ASSOCIATIVITIES, CACHE_ERROR_CORRECTION_TYPES, CACHE_LOCATIONS, CACHE_MODES, CACHE_SRAM_TYPES,
        SYSTEM_CACHE_TYPES,
    },
    walker::{Field, Structure},
};

const SOCKET_DESIGNATION: Field = Field::new(0x04, 2, 0);
const CONFIGURATION: Field = Field::new(0x05, 2, 0);
const MAXIMUM_SIZE: Field = Field::new(0x07, 2, 0);
const INSTALLED_SIZE: Field = Field::new(0x09, 2, 0);
const SUPPORTED_SRAM: Field = Field::new(0x0B, 2, 0);
const CURRENT_SRAM: Field = Field::new(0x0D, 2, 0);
const SPEED: Field = Field::new(0x0F, 2, 1);
const ERROR_CORRECTION_TYPE: Field = Field::new(0x10, 2, 1);
const SYSTEM_CACHE_TYPE: Field = Field::new(0x11, 2, 1);
const ASSOCIATIVITY: Field = Field::new(0x12, 2, 1);
const MAXIMUM_SIZE_2: Field = Field::new(0x13, 3, 1);
const INSTALLED_SIZE_2: Field = Field::new(0x17, 3, 1);

/// 16-bit size value that moves the size to the 32-bit field.
const SIZE_SEE_SIZE_2: u16 = 0xFFFF;

pub fn decode(structure: &Structure<'_>, sink: &mut dyn ResultSink, _config: &DecoderConfig) {
    let mut context = DecodeContext::begin(sink, structure, "Cache");
    context.handle();

    context.string("Socket designation", SOCKET_DESIGNATION);

    if let Some(configuration) = structure.word(CONFIGURATION).map(CacheConfiguration::from) {
        context.number("Level", configuration.level() as u64 + 1);
        context.boolean("Socketed", configuration.socketed());
        context.enumeration("Location", configuration.location() as u32, CACHE_LOCATIONS);
        context.boolean("Enabled", configuration.enabled());
        context.enumeration("Mode", configuration.mode() as u32, CACHE_MODES);
    }

    if let Some(bytes) = cache_size(structure, MAXIMUM_SIZE, MAXIMUM_SIZE_2) {
        context.size("Maximum size", bytes);
    }

    if let Some(bytes) = cache_size(structure, INSTALLED_SIZE, INSTALLED_SIZE_2) {
        context.size("Installed size", bytes);
    }

    if let Some(sram) = structure.word(SUPPORTED_SRAM) {
        context.flags("Supported SRAM", sram as u32, CACHE_SRAM_TYPES);
    }

    if let Some(sram) = structure.word(CURRENT_SRAM) {
        context.flags("Current SRAM", sram as u32, CACHE_SRAM_TYPES);
    }

    if let Some(speed) = structure.byte(SPEED).filter(|&speed| speed != 0) {
        context.number_with_unit("Speed", speed as u64, " ns");
    }

    if let Some(correction) = structure.byte(ERROR_CORRECTION_TYPE) {
        context.enumeration("Error correction type", correction as u32, CACHE_ERROR_CORRECTION_TYPES);
    }

    if let Some(cache_type) = structure.byte(SYSTEM_CACHE_TYPE) {
        context.enumeration("System cache type", cache_type as u32, SYSTEM_CACHE_TYPES);
    }

    if let Some(associativity) = structure.byte(ASSOCIATIVITY) {
        context.enumeration("Associativity", associativity as u32, CACHE_ASSOCIATIVITIES);
    }
}

/// Size in bytes from the 16-bit field, or from the 32-bit field when the 16-bit one is saturated.
fn cache_size(structure: &Structure<'_>, size: Field, size_2: Field) -> Option<u64> {
    let raw = structure.word(size)?;
    if raw == SIZE_SEE_SIZE_2 {
        if let Some(wide) = structure.dword(size_2) {
            return Some(CacheSize2::from(wide).bytes());
        }
    }
    Some(CacheSize::from(raw).bytes())
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::{vec, vec::Vec};

    use super::*;
    use crate::{decoders::test_support::decode_one, walker::SmbiosVersion};

    fn cache(maximum: u16, installed: u16, maximum_2: u32) -> Vec<u8> {
        let mut table = vec![
            7, 0x1B, 0x07, 0x00, // Type 7, Length 0x1B, Handle 7
            1,    // Socket designation
            0x81, 0x01, // Configuration: L2, internal, enabled, write back
        ];
        table.extend_from_slice(&maximum.to_le_bytes());
        table.extend_from_slice(&installed.to_le_bytes());
        table.extend_from_slice(&[
            0x20, 0x00, // Supported SRAM: Synchronous
            0x20, 0x00, // Current SRAM: Synchronous
            0,    // Speed unknown
            0x05, // Error correction: Single-bit ECC
            0x05, // System cache type: Unified
            0x07, // Associativity: 8-way
        ]);
        table.extend_from_slice(&maximum_2.to_le_bytes());
        table.extend_from_slice(&0u32.to_le_bytes());
        table.extend_from_slice(b"L2 Cache\0\0");
        table
    }

    #[test]
    fn test_decode_cache() {
        let table = cache(0x8002, 0x0800, 0);
        let sink = decode_one(&table, SmbiosVersion::new(3, 4), decode);
        let group = sink.groups()[0].id;

        assert_eq!(
            sink.fields_in(group),
            vec![
                ("Handle", "0x7"),
                ("Socket designation", "L2 Cache"),
                ("Level", "2"),
                ("Socketed", "false"),
                ("Location", "Internal"),
                ("Enabled", "true"),
                ("Mode", "Write back"),
                ("Maximum size", "128 kB"),
                ("Installed size", "2 MB"),
                ("Supported SRAM", "Synchronous (0x20)"),
                ("Current SRAM", "Synchronous (0x20)"),
                ("Error correction type", "Single-bit ECC"),
                ("System cache type", "Unified"),
                ("Associativity", "8-way"),
            ]
        );
    }

    #[test]
    fn test_saturated_size_uses_size_2() {
        let table = cache(0xFFFF, 0, 0x8000_0400);
        let sink = decode_one(&table, SmbiosVersion::new(3, 4), decode);
        assert_eq!(sink.value(sink.groups()[0].id, "Maximum size"), Some("64 MB"));

        // Without the 32-bit field the saturated value is scaled as is.
        let sink = decode_one(&table, SmbiosVersion::new(3, 0), decode);
        assert_eq!(sink.value(sink.groups()[0].id, "Maximum size"), Some("2 GB"));
    }

    #[test]
    fn test_disabled_cache() {
        let mut table = cache(0, 0, 0);
        table[5] = 0x01;
        let sink = decode_one(&table, SmbiosVersion::new(3, 4), decode);
        let group = sink.groups()[0].id;

        assert_eq!(sink.value(group, "Enabled"), Some("false"));
        assert_eq!(sink.value(group, "Maximum size"), Some("0 bytes"));
    }
}
