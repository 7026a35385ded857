//! Table builder shared by the integration tests
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

#![allow(dead_code)]

/// Assembles a structure table one structure at a time.
#[derive(Debug, Default)]
pub struct TableBuilder {
    bytes: Vec<u8>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a structure whose fixed body (after the 4 byte header) is `body`.
    pub fn structure(mut self, r#type: u8, handle: u16, body: &[u8], strings: &[&str]) -> Self {
        let length = u8::try_from(body.len() + 4).expect("structure body fits in a byte");
        self.bytes.extend_from_slice(&[r#type, length]);
        self.bytes.extend_from_slice(&handle.to_le_bytes());
        self.bytes.extend_from_slice(body);
        if strings.is_empty() {
            self.bytes.push(0);
        }
        for string in strings {
            self.bytes.extend_from_slice(string.as_bytes());
            self.bytes.push(0);
        }
        self.bytes.push(0);
        self
    }

    /// Appends raw bytes, for building damaged tables.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Appends the End-of-Table structure.
    pub fn end(self) -> Self {
        self.structure(127, 0xFFFF, &[], &[])
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// Fixed body of a 2.0 system information structure with Manufacturer, Product name, Version and Serial number
/// pointing at strings 1 to 4.
pub fn system_body() -> Vec<u8> {
    vec![1, 2, 3, 4]
}

/// Fixed body of a 2.1 cache information structure with the given maximum and installed size words.
pub fn cache_body(maximum: u16, installed: u16) -> Vec<u8> {
    let mut body = vec![0, 0x81, 0x01];
    body.extend_from_slice(&maximum.to_le_bytes());
    body.extend_from_slice(&installed.to_le_bytes());
    body.extend_from_slice(&[0x20, 0x00, 0x20, 0x00, 0, 0x05, 0x05, 0x07]);
    body
}

/// Fixed body of a 3.0 processor information structure with the given core count byte and core count 2 word.
pub fn processor_body(core_count: u8, core_count_2: u16) -> Vec<u8> {
    let mut body = vec![0u8; 0x30 - 4];
    body[0x23 - 4] = core_count;
    body[0x2A - 4..0x2C - 4].copy_from_slice(&core_count_2.to_le_bytes());
    body
}

/// Fixed body of a chassis with one contained element, cut to `length` bytes of structure.
pub fn chassis_body(length: usize) -> Vec<u8> {
    let mut body = vec![
        1,    // Manufacturer
        0x03, // Desktop
        0, 0, 0, // Version, Serial number, Asset tag
        0x03, 0x03, 0x03, 0x03, // States: Safe, Security: None
        0, 0, 0, 0, // OEM defined
        0, 0, // Height, power cords
        1, 3, // One element of three bytes
        0x0A, 1, 1, // Motherboard (1-1)
        2,    // SKU number
    ];
    body.truncate(length - 4);
    body
}
