//! SMBIOS string table resolution
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

extern crate alloc;

use alloc::{borrow::Cow, string::String};

use crate::{error::SmbiosError, walker::Structure};

/// Placeholder rendered in place of a string whose index is out of range.
pub const INVALID_STRING_INDEX: &str = "INVALID STRING INDEX";

/// The NUL separated strings trailing one structure, without the final double NUL.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringTable<'a> {
    data: &'a [u8],
}

impl<'a> StringTable<'a> {
    /// Wraps the string region of a structure.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Number of strings present.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns true if the structure carries no strings.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Raw bytes of the string at 1-based `index`. Index 0 and out of range indices yield `None`.
    pub fn get(&self, index: u8) -> Option<&'a [u8]> {
        if index == 0 {
            return None;
        }
        self.iter().nth(index as usize - 1)
    }

    /// Iterates the raw strings in order.
    pub fn iter(&self) -> StringTableIter<'a> {
        StringTableIter { remaining: self.data }
    }
}

/// Iterator over the raw strings of a [`StringTable`].
#[derive(Debug, Clone)]
pub struct StringTableIter<'a> {
    remaining: &'a [u8],
}

impl<'a> Iterator for StringTableIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        match self.remaining.iter().position(|&b| b == 0) {
            Some(end) => {
                let string = &self.remaining[..end];
                self.remaining = &self.remaining[end + 1..];
                Some(string)
            }
            None => {
                let string = self.remaining;
                self.remaining = &[];
                Some(string)
            }
        }
    }
}

/// Resolves string `index` of `structure`.
///
/// Returns `Ok(None)` for index 0, the "no string" sentinel. Strings are decoded lossily so a vendor string with
/// stray non UTF-8 bytes still renders.
pub fn resolve<'a>(structure: &Structure<'a>, index: u8) -> Result<Option<Cow<'a, str>>, SmbiosError> {
    if index == 0 {
        return Ok(None);
    }
    let strings = structure.strings();
    match strings.get(index) {
        Some(bytes) => Ok(Some(String::from_utf8_lossy(bytes))),
        None => Err(SmbiosError::InvalidStringIndex { index, available: strings.len() }),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec::Vec;

    use super::*;
    use crate::walker::{walk, SmbiosVersion};

    #[test]
    fn test_string_table() {
        let table = StringTable::new(b"Vendor\0Product\0Serial");

        assert_eq!(table.len(), 3);
        assert_eq!(table.get(0), None);
        assert_eq!(table.get(1), Some(&b"Vendor"[..]));
        assert_eq!(table.get(3), Some(&b"Serial"[..]));
        assert_eq!(table.get(4), None);
        assert_eq!(table.iter().collect::<Vec<_>>(), [&b"Vendor"[..], &b"Product"[..], &b"Serial"[..]]);
    }

    #[test]
    fn test_empty_string_table() {
        let table = StringTable::new(&[]);

        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.get(1), None);
    }

    #[test]
    fn test_is_empty_agrees_with_len() {
        let regions: [&[u8]; 4] = [b"", b"\0", b"OEM", b"OEM\0Box"];
        for region in regions {
            let table = StringTable::new(region);
            assert_eq!(table.is_empty(), table.len() == 0, "region {region:?}");
        }
    }

    #[test]
    fn test_resolve() {
        let buffer = [
            1, 0x06, 0x00, 0x00, // Type 1, Length 6
            1, 99, // String index 1, bogus index 99
            b'O', b'E', b'M', 0, 0xFF, b'x', 0, 0, // "OEM", then a non UTF-8 string
        ];
        let structure = walk(&buffer, SmbiosVersion::new(3, 0)).next().unwrap();

        assert_eq!(resolve(&structure, 0), Ok(None));
        assert_eq!(resolve(&structure, 1).unwrap().as_deref(), Some("OEM"));
        assert_eq!(resolve(&structure, 2).unwrap().as_deref(), Some("\u{FFFD}x"));
        assert_eq!(resolve(&structure, 99), Err(SmbiosError::InvalidStringIndex { index: 99, available: 2 }));
    }
}
