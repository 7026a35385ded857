//! SMBIOS decoder error types
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use core::fmt;

/// Errors raised while walking or decoding an SMBIOS structure table.
///
/// None of these abort a decode pass with a failure. Walk level conditions end the pass early and are
/// reported through [`crate::DecodeSummary`]. String errors are rendered in place of the field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmbiosError {
    // Table layout errors
    /// A structure or its string table runs past the end of the buffer.
    TruncatedTable {
        /// Byte offset of the structure that could not be completed.
        offset: usize,
    },
    /// A structure header declares a length smaller than the header itself.
    CorruptHeader {
        /// Byte offset of the offending header.
        offset: usize,
        /// Declared length.
        length: u8,
    },

    // String errors
    /// A string index points past the strings present in the structure's string table.
    InvalidStringIndex {
        /// Requested 1-based index.
        index: u8,
        /// Number of strings actually present.
        available: usize,
    },

    // Pass errors
    /// The caller asked for the decode pass to stop.
    Cancelled,
    /// The table provider could not produce a table.
    TableUnavailable,
}

impl fmt::Display for SmbiosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmbiosError::TruncatedTable { offset } => {
                write!(f, "structure at offset {offset:#x} is truncated")
            }
            SmbiosError::CorruptHeader { offset, length } => {
                write!(f, "structure header at offset {offset:#x} declares invalid length {length}")
            }
            SmbiosError::InvalidStringIndex { index, available } => {
                write!(f, "string index {index} out of range ({available} strings present)")
            }
            SmbiosError::Cancelled => write!(f, "decode cancelled"),
            SmbiosError::TableUnavailable => write!(f, "SMBIOS table unavailable"),
        }
    }
}
