//! SMBIOS structure table walker
//!
//! Splits a raw structure table into [`Structure`] views. Every structure is a 4 byte header, a fixed body
//! of `length` bytes (header included) and a string table terminated by a double NUL.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use scroll::{ctx::TryFromCtx, Endian, Pread, LE};

use crate::{error::SmbiosError, strings::StringTable};

/// Type code of the End-of-Table structure.
pub const SMBIOS_TYPE_END_OF_TABLE: u8 = 0x7F;

/// Type code of the Inactive structure.
pub const SMBIOS_TYPE_INACTIVE: u8 = 0x7E;

/// Size of the common structure header.
pub const SMBIOS_HEADER_SIZE: usize = 4;

/// Declared SMBIOS implementation version of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SmbiosVersion {
    /// Major version.
    pub major: u8,
    /// Minor version.
    pub minor: u8,
}

impl SmbiosVersion {
    /// Creates a version from its major and minor parts.
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// Returns true if this version is `other` or later.
    pub fn at_least(self, other: SmbiosVersion) -> bool {
        self >= other
    }
}

/// Location of a fixed-body field and the SMBIOS version that introduced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Byte offset from the start of the structure header.
    pub offset: usize,
    /// First SMBIOS version that defines the field.
    pub since: SmbiosVersion,
}

impl Field {
    /// Describes a field at `offset` introduced in version `major.minor`.
    pub const fn new(offset: usize, major: u8, minor: u8) -> Self {
        Self { offset, since: SmbiosVersion::new(major, minor) }
    }

    /// Returns the same field moved `delta` bytes further into the structure.
    pub const fn shifted(self, delta: usize) -> Self {
        Self { offset: self.offset + delta, since: self.since }
    }
}

/// Common header present at the start of every structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureHeader {
    /// Structure type code.
    pub r#type: u8,
    /// Length of the fixed body, header included.
    pub length: u8,
    /// Table unique handle.
    pub handle: u16,
}

impl<'a> TryFromCtx<'a, Endian> for StructureHeader {
    type Error = scroll::Error;

    fn try_from_ctx(src: &'a [u8], ctx: Endian) -> Result<(Self, usize), Self::Error> {
        let mut offset = 0;
        let r#type = src.gread_with::<u8>(&mut offset, ctx)?;
        let length = src.gread_with::<u8>(&mut offset, ctx)?;
        let handle = src.gread_with::<u16>(&mut offset, ctx)?;
        Ok((Self { r#type, length, handle }, offset))
    }
}

/// A view of one structure inside the table buffer.
///
/// Reads are bounded by the declared fixed-body length: a field that does not fit inside `length` bytes
/// is absent, whatever the version says.
#[derive(Debug, Clone, Copy)]
pub struct Structure<'a> {
    header: StructureHeader,
    offset: usize,
    formatted: &'a [u8],
    strings: StringTable<'a>,
    version: SmbiosVersion,
}

impl<'a> Structure<'a> {
    /// Creates a structure view from its parts.
    pub fn new(
        header: StructureHeader,
        offset: usize,
        formatted: &'a [u8],
        strings: StringTable<'a>,
        version: SmbiosVersion,
    ) -> Self {
        Self { header, offset, formatted, strings, version }
    }

    /// The structure header.
    pub fn header(&self) -> StructureHeader {
        self.header
    }

    /// Byte offset of the structure in the table buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The version declared for the whole table.
    pub fn version(&self) -> SmbiosVersion {
        self.version
    }

    /// Raw fixed body, header included.
    pub fn formatted(&self) -> &'a [u8] {
        self.formatted
    }

    /// The string table trailing the fixed body.
    pub fn strings(&self) -> StringTable<'a> {
        self.strings
    }

    /// Returns true if the table version defines `field` and the fixed body holds `size` bytes at its offset.
    pub fn field_present(&self, field: Field, size: usize) -> bool {
        self.version.at_least(field.since)
            && field.offset.checked_add(size).is_some_and(|end| end <= self.formatted.len())
    }

    /// Reads a little-endian value at `field`, or `None` if the field is not present.
    pub fn read<T>(&self, field: Field) -> Option<T>
    where
        T: TryFromCtx<'a, Endian, Error = scroll::Error>,
    {
        if !self.version.at_least(field.since) {
            return None;
        }
        let formatted: &'a [u8] = self.formatted;
        formatted.pread_with::<T>(field.offset, LE).ok()
    }

    /// Reads a byte field.
    pub fn byte(&self, field: Field) -> Option<u8> {
        self.read::<u8>(field)
    }

    /// Reads a word field.
    pub fn word(&self, field: Field) -> Option<u16> {
        self.read::<u16>(field)
    }

    /// Reads a dword field.
    pub fn dword(&self, field: Field) -> Option<u32> {
        self.read::<u32>(field)
    }

    /// Reads a qword field.
    pub fn qword(&self, field: Field) -> Option<u64> {
        self.read::<u64>(field)
    }

    /// Borrows `len` raw bytes at `field`.
    pub fn bytes(&self, field: Field, len: usize) -> Option<&'a [u8]> {
        if !self.field_present(field, len) {
            return None;
        }
        self.formatted.get(field.offset..field.offset + len)
    }
}

/// Reason a walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The End-of-Table structure was reached.
    EndOfTable,
    /// The buffer ended exactly on a structure boundary without an End-of-Table structure.
    BufferExhausted,
    /// A structure or its string table ran past the end of the buffer.
    Truncated,
    /// A structure header was unusable.
    CorruptHeader,
    /// The caller cancelled the pass.
    Cancelled,
}

impl From<SmbiosError> for Termination {
    fn from(error: SmbiosError) -> Self {
        match error {
            SmbiosError::CorruptHeader { .. } => Termination::CorruptHeader,
            SmbiosError::Cancelled => Termination::Cancelled,
            _ => Termination::Truncated,
        }
    }
}

/// Lazy iterator over the structures of a table, in byte order.
#[derive(Debug, Clone)]
pub struct StructureIter<'a> {
    buffer: &'a [u8],
    version: SmbiosVersion,
    position: usize,
    termination: Option<Termination>,
    error: Option<SmbiosError>,
}

/// Walks `buffer` structure by structure.
pub fn walk(buffer: &[u8], version: SmbiosVersion) -> StructureIter<'_> {
    StructureIter { buffer, version, position: 0, termination: None, error: None }
}

impl<'a> StructureIter<'a> {
    /// Why the walk stopped, once it has.
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// The layout error that stopped the walk, if any.
    pub fn error(&self) -> Option<SmbiosError> {
        self.error
    }

    /// Offset of the next structure to be read.
    pub fn position(&self) -> usize {
        self.position
    }

    fn read_structure(&mut self) -> Result<Option<Structure<'a>>, SmbiosError> {
        let offset = self.position;
        if offset == self.buffer.len() {
            self.termination = Some(Termination::BufferExhausted);
            return Ok(None);
        }

        let header = self
            .buffer
            .pread_with::<StructureHeader>(offset, LE)
            .map_err(|_| SmbiosError::TruncatedTable { offset })?;

        if header.r#type == SMBIOS_TYPE_END_OF_TABLE {
            self.termination = Some(Termination::EndOfTable);
            return Ok(None);
        }

        if (header.length as usize) < SMBIOS_HEADER_SIZE {
            return Err(SmbiosError::CorruptHeader { offset, length: header.length });
        }

        let body_end = offset + header.length as usize;
        let formatted = self.buffer.get(offset..body_end).ok_or(SmbiosError::TruncatedTable { offset })?;

        let string_end = find_double_nul(self.buffer, body_end).ok_or(SmbiosError::TruncatedTable { offset })?;
        let strings = StringTable::new(&self.buffer[body_end..string_end]);

        self.position = string_end + 2;
        Ok(Some(Structure::new(header, offset, formatted, strings, self.version)))
    }
}

impl<'a> Iterator for StructureIter<'a> {
    type Item = Structure<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.termination.is_some() {
            return None;
        }

        match self.read_structure() {
            Ok(Some(structure)) => {
                log::trace!(
                    "SMBIOS structure type {} handle {:#06x} length {:#x} at offset {:#x}",
                    structure.header().r#type,
                    structure.header().handle,
                    structure.header().length,
                    structure.offset()
                );
                Some(structure)
            }
            Ok(None) => None,
            Err(error) => {
                log::warn!("SMBIOS walk stopped early: {}", error);
                self.termination = Some(Termination::from(error));
                self.error = Some(error);
                None
            }
        }
    }
}

/// Finds the first double NUL at or after `start` and returns its offset.
fn find_double_nul(buffer: &[u8], start: usize) -> Option<usize> {
    buffer.get(start..)?.windows(2).position(|pair| pair == [0, 0]).map(|index| start + index)
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec::Vec;

    use super::*;

    const VERSION: SmbiosVersion = SmbiosVersion::new(3, 4);

    #[test]
    fn test_walk_stops_at_end_of_table() {
        let table = [
            1, 0x08, 0x01, 0x00, // Type 1, Length, Handle 0x0001
            1, 2, 0, 0, // Manufacturer, Product, padding
            b'A', 0, b'B', 0, 0, // Strings
            0x7F, 0x04, 0x02, 0x00, // End-of-Table
            0, 0,
        ];

        let mut iter = walk(&table, VERSION);
        let structures: Vec<_> = iter.by_ref().collect();

        assert_eq!(structures.len(), 1);
        assert_eq!(structures[0].header(), StructureHeader { r#type: 1, length: 8, handle: 1 });
        assert_eq!(structures[0].strings().len(), 2);
        assert_eq!(iter.termination(), Some(Termination::EndOfTable));
        assert_eq!(iter.error(), None);
    }

    #[test]
    fn test_walk_empty_string_table() {
        let table = [
            2, 0x05, 0x10, 0x00, 0xAA, // Type 2, Length 5, Handle 0x0010, one body byte
            0, 0, // Empty string table
            3, 0x04, 0x11, 0x00, // Type 3, header only
            0, 0,
        ];

        let structures: Vec<_> = walk(&table, VERSION).collect();

        assert_eq!(structures.len(), 2);
        assert_eq!(structures[0].strings().len(), 0);
        assert_eq!(structures[1].offset(), 7);
    }

    #[test]
    fn test_walk_buffer_exhausted() {
        let table = [4, 0x04, 0x00, 0x00, 0, 0];

        let mut iter = walk(&table, VERSION);
        assert_eq!(iter.by_ref().count(), 1);
        assert_eq!(iter.termination(), Some(Termination::BufferExhausted));
    }

    #[test]
    fn test_walk_missing_string_terminator() {
        let table = [
            4, 0x04, 0x00, 0x00, 0, 0, // Complete structure
            5, 0x04, 0x01, 0x00, b'x', 0, // String table never closes
        ];

        let mut iter = walk(&table, VERSION);
        assert_eq!(iter.by_ref().count(), 1);
        assert_eq!(iter.termination(), Some(Termination::Truncated));
        assert_eq!(iter.error(), Some(SmbiosError::TruncatedTable { offset: 6 }));
    }

    #[test]
    fn test_walk_body_past_buffer() {
        let table = [7, 0x20, 0x00, 0x00, 0, 0];

        let mut iter = walk(&table, VERSION);
        assert_eq!(iter.next().map(|s| s.header().r#type), None);
        assert_eq!(iter.termination(), Some(Termination::Truncated));
    }

    #[test]
    fn test_walk_corrupt_header() {
        let table = [
            4, 0x04, 0x00, 0x00, 0, 0, // Complete structure
            9, 0x02, 0x01, 0x00, 0, 0, // Length smaller than the header
        ];

        let mut iter = walk(&table, VERSION);
        assert_eq!(iter.by_ref().count(), 1);
        assert_eq!(iter.termination(), Some(Termination::CorruptHeader));
        assert_eq!(iter.error(), Some(SmbiosError::CorruptHeader { offset: 6, length: 2 }));
    }

    #[test]
    fn test_walk_partial_header() {
        let table = [4, 0x04, 0x00, 0x00, 0, 0, 9, 0x04];

        let mut iter = walk(&table, VERSION);
        assert_eq!(iter.by_ref().count(), 1);
        assert_eq!(iter.termination(), Some(Termination::Truncated));
    }

    #[test]
    fn test_field_gating() {
        let table = [
            4, 0x06, 0x00, 0x00, // Type 4, Length 6
            0x34, 0x12, // Word at 0x04
            0x56, 0x78, // Bytes past the declared length
            0, 0,
        ];

        let structure = walk(&table, VERSION).next().unwrap();

        assert_eq!(structure.word(Field::new(0x04, 2, 0)), Some(0x1234));
        assert_eq!(structure.byte(Field::new(0x06, 2, 0)), None);
        assert_eq!(structure.word(Field::new(0x05, 2, 0)), None);
        assert_eq!(structure.word(Field::new(0x04, 3, 5)), None);
        assert!(structure.field_present(Field::new(0x05, 2, 0), 1));
        assert!(!structure.field_present(Field::new(0x05, 2, 0), 2));
    }

    #[test]
    fn test_version_ordering() {
        assert!(SmbiosVersion::new(3, 0).at_least(SmbiosVersion::new(2, 8)));
        assert!(SmbiosVersion::new(2, 8).at_least(SmbiosVersion::new(2, 8)));
        assert!(!SmbiosVersion::new(2, 7).at_least(SmbiosVersion::new(2, 8)));
    }
}
