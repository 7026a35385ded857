//! Source of the raw SMBIOS structure table
//!
//! Firmware and operating systems expose the table in different ways (configuration table entry point, sysfs,
//! firmware table APIs). The decoder only needs the bytes and the declared version, so retrieval sits behind
//! [`TableProvider`].
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

extern crate alloc;

#[cfg(any(test, feature = "mockall"))]
use mockall::automock;

use alloc::vec::Vec;

use crate::{error::SmbiosError, walker::SmbiosVersion};

/// A structure table and the SMBIOS version its entry point declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmbiosTable {
    /// The structure table, starting at the first structure header.
    pub data: Vec<u8>,
    /// Declared implementation version.
    pub version: SmbiosVersion,
}

impl SmbiosTable {
    pub fn new(data: Vec<u8>, version: SmbiosVersion) -> Self {
        Self { data, version }
    }
}

/// API to retrieve the structure table to decode.
#[cfg_attr(any(test, feature = "mockall"), automock)]
pub trait TableProvider {
    /// Returns the table bytes and version, or [`SmbiosError::TableUnavailable`].
    fn get_table(&self) -> Result<SmbiosTable, SmbiosError>;
}

/// Provider over a table already held in memory, e.g. a dump read from disk.
#[derive(Debug, Clone)]
pub struct RawTableProvider {
    table: SmbiosTable,
}

impl RawTableProvider {
    pub fn new(data: Vec<u8>, version: SmbiosVersion) -> Self {
        Self { table: SmbiosTable::new(data, version) }
    }
}

impl TableProvider for RawTableProvider {
    fn get_table(&self) -> Result<SmbiosTable, SmbiosError> {
        if self.table.data.is_empty() {
            log::error!("SMBIOS raw table provider holds no data.");
            return Err(SmbiosError::TableUnavailable);
        }
        Ok(self.table.clone())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec;

    use super::*;

    #[test]
    fn test_raw_provider_returns_table() {
        let provider = RawTableProvider::new(vec![0x7F, 0x04, 0xFF, 0xFE, 0, 0], SmbiosVersion::new(3, 7));

        let table = provider.get_table().unwrap();

        assert_eq!(table.version, SmbiosVersion::new(3, 7));
        assert_eq!(table.data.len(), 6);
    }

    #[test]
    fn test_raw_provider_without_data() {
        let provider = RawTableProvider::new(vec![], SmbiosVersion::new(3, 0));

        assert_eq!(provider.get_table(), Err(SmbiosError::TableUnavailable));
    }
}
